pub mod backup;
pub mod checkin;
pub mod config;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod leaderboard;
pub mod log;
pub mod status;

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Resolve the logical day for a command: an explicit `--date` wins,
/// otherwise today in the reference timezone.
pub(crate) fn resolve_day(date: &Option<String>, clock: &Clock) -> AppResult<NaiveDate> {
    match date {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone())),
        None => Ok(clock.today()),
    }
}
