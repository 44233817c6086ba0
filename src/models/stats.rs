use chrono::NaiveDate;
use serde::Serialize;

/// Per-user aggregate row, upserted once per accepted check-in.
///
/// `this_month_checkins` / `this_year_checkins` are recomputed from the
/// `checkins` history inside the accepting transaction, so a calendar
/// rollover never leaves stale counts behind.
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub user_id: String,
    pub user_name: String,
    pub total_checkins: i64,
    pub continuous_checkins: u32,
    pub max_continuous: u32,
    pub total_points: i64,
    pub last_checkin_date: Option<NaiveDate>,
    pub first_checkin_date: Option<NaiveDate>,
    pub this_month_checkins: i64,
    pub this_year_checkins: i64,
}

impl UserStats {
    /// Zeroed row for a user seen for the first time.
    pub fn new(user_id: &str, user_name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            total_checkins: 0,
            continuous_checkins: 0,
            max_continuous: 0,
            total_points: 0,
            last_checkin_date: None,
            first_checkin_date: None,
            this_month_checkins: 0,
            this_year_checkins: 0,
        }
    }
}
