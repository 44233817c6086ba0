use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::service::CheckinService;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { user, limit } = cmd {
        let clock = Clock::from_offset_hours(cfg.utc_offset_hours)?;
        let limit = limit.unwrap_or(cfg.history_limit);

        let mut pool = DbPool::new(&cfg.database)?;
        let mut svc = CheckinService::new(&mut pool, clock);

        let records = svc.history(user, limit)?;

        if records.is_empty() {
            info(format!("No check-ins recorded for user {}.", user));
            return Ok(());
        }

        println!("\nCheck-in history for {} (last {}):\n", user, records.len());

        let mut table = Table::new(vec![
            Column { header: "DATE".into(), width: 10 },
            Column { header: "POINTS".into(), width: 6 },
            Column { header: "STREAK".into(), width: 6 },
            Column { header: "KIND".into(), width: 9 },
        ]);

        for rec in &records {
            table.add_row(vec![
                rec.date_str(),
                rec.reward_points.to_string(),
                rec.continuous_days.to_string(),
                if rec.is_continuous { "continued" } else { "restarted" }.to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
