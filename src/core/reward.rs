//! Reward point schedule.
//!
//! Kept as a standalone swappable function: reward tuning changes
//! independently of the streak mechanics, so the service takes the
//! schedule as a value instead of hardcoding it.

/// Maps the new streak length (post-increment) to the points awarded for
/// that single check-in.
pub type RewardSchedule = fn(u32) -> i64;

/// Production schedule: 1 point up to two days, 2 from the third day,
/// 3 from the seventh.
pub fn default_schedule(new_streak: u32) -> i64 {
    match new_streak {
        s if s >= 7 => 3,
        s if s >= 3 => 2,
        _ => 1,
    }
}
