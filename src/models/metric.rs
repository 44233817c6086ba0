use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// Selectable ranking metric for the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
pub enum LeaderboardMetric {
    /// All-time check-in count
    Total,
    /// Current streak length
    Continuous,
    /// Check-ins in the current month
    Monthly,
    /// Check-ins in the current year
    Yearly,
    /// Accumulated reward points
    Points,
    /// Best streak ever reached
    MaxContinuous,
}

impl LeaderboardMetric {
    /// Column of `user_stats` holding the metric value. Fixed set, safe to
    /// interpolate into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            LeaderboardMetric::Total => "total_checkins",
            LeaderboardMetric::Continuous => "continuous_checkins",
            LeaderboardMetric::Monthly => "this_month_checkins",
            LeaderboardMetric::Yearly => "this_year_checkins",
            LeaderboardMetric::Points => "total_points",
            LeaderboardMetric::MaxContinuous => "max_continuous",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardMetric::Total => "total",
            LeaderboardMetric::Continuous => "continuous",
            LeaderboardMetric::Monthly => "monthly",
            LeaderboardMetric::Yearly => "yearly",
            LeaderboardMetric::Points => "points",
            LeaderboardMetric::MaxContinuous => "max-continuous",
        }
    }
}

/// One ranked row. `rank` is 1-based and dense: assigned by sorted
/// position, so two users tied on value still get consecutive distinct
/// ranks (tie broken by earlier first_checkin_date, then user_id).
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub user_name: String,
    pub value: i64,
    pub first_checkin_date: Option<NaiveDate>,
}

/// Snapshot of a ranking as of `updated_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub metric: LeaderboardMetric,
    pub updated_at: String,
    pub entries: Vec<LeaderboardEntry>,
}
