use super::record::CheckinRecord;
use super::stats::UserStats;
use serde::Serialize;

/// Result of a check-in attempt.
///
/// A duplicate submit is a normal outcome, not an error: callers at the
/// boundary render it as a regular response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CheckinOutcome {
    /// The user already has a record for today; nothing was written.
    AlreadyChecked,
    /// A new record was created.
    Accepted {
        reward_points: i64,
        continuous_days: u32,
        is_continuous: bool,
    },
}

impl CheckinOutcome {
    pub fn already_checked(&self) -> bool {
        matches!(self, CheckinOutcome::AlreadyChecked)
    }
}

/// Read-only snapshot returned by the `status` operation.
///
/// An unknown user is not an error: `stats` is simply `None`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub has_checked_today: bool,
    pub stats: Option<UserStats>,
    pub today_record: Option<CheckinRecord>,
}
