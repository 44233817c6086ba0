use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::service::CheckinService;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::outcome::CheckinOutcome;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { user, name, date } = cmd {
        let clock = Clock::from_offset_hours(cfg.utc_offset_hours)?;
        let day = resolve_day(date, &clock)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let mut svc = CheckinService::new(&mut pool, clock);

        match svc.check_in(user, name, day)? {
            CheckinOutcome::AlreadyChecked => {
                info(format!(
                    "{} already checked in on {}. Nothing recorded.",
                    user, day
                ));
            }
            CheckinOutcome::Accepted {
                reward_points,
                continuous_days,
                is_continuous,
            } => {
                let note = if is_continuous {
                    "streak continued"
                } else {
                    "streak restarted"
                };
                success(format!(
                    "Checked in {} on {}: +{} point(s), streak {} day(s) ({}).",
                    user, day, reward_points, continuous_days, note
                ));

                // audit trail, non-blocking
                if let Err(e) = audit(
                    &pool.conn,
                    "checkin",
                    user,
                    &format!("Check-in for {} (+{} points)", day, reward_points),
                ) {
                    eprintln!("⚠️ Failed to write internal log: {}", e);
                }
            }
        }
    }
    Ok(())
}
