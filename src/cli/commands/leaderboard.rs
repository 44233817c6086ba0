use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::service::CheckinService;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_rank, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leaderboard { metric, limit } = cmd {
        let clock = Clock::from_offset_hours(cfg.utc_offset_hours)?;
        let limit = limit.unwrap_or(cfg.leaderboard_limit);

        let mut pool = DbPool::new(&cfg.database)?;
        let mut svc = CheckinService::new(&mut pool, clock);

        let board = svc.leaderboard(*metric, limit)?;

        if board.entries.is_empty() {
            info("Leaderboard is empty: no check-ins recorded yet.");
            return Ok(());
        }

        println!("\n🏆 Leaderboard by {}:\n", board.metric.as_str());

        let mut table = Table::new(vec![
            Column { header: "RANK".into(), width: 4 },
            Column { header: "USER".into(), width: 12 },
            Column { header: "NAME".into(), width: 16 },
            Column { header: "VALUE".into(), width: 6 },
            Column { header: "SINCE".into(), width: 10 },
        ]);

        for e in &board.entries {
            let color = color_for_rank(e.rank);
            table.add_row(vec![
                format!("{}{}{}", color, e.rank, RESET),
                e.user_id.clone(),
                e.user_name.clone(),
                e.value.to_string(),
                colorize_optional(
                    &e.first_checkin_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                ),
            ]);
        }

        print!("{}", table.render());
        println!("\nSnapshot taken at {}", board.updated_at);
    }
    Ok(())
}
