use chrono::NaiveDate;
use serde::Serialize;

/// One immutable row per accepted check-in event.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinRecord {
    pub id: i64,
    pub user_id: String,         // ⇔ checkins.user_id (TEXT, stable id)
    pub user_name: String,       // ⇔ checkins.user_name (display name at event time)
    pub checkin_date: NaiveDate, // ⇔ checkins.checkin_date (TEXT "YYYY-MM-DD")
    pub checkin_time: String,    // ⇔ checkins.checkin_time (TEXT, RFC3339 instant)
    pub reward_points: i64,      // ⇔ checkins.reward_points (fixed at creation)
    pub is_continuous: bool,     // ⇔ checkins.is_continuous (0/1)
    pub continuous_days: u32,    // ⇔ checkins.continuous_days (streak as of this event)
}

impl CheckinRecord {
    pub fn date_str(&self) -> String {
        self.checkin_date.format("%Y-%m-%d").to_string()
    }
}
