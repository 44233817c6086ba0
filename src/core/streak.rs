//! Pure streak calculator.
//!
//! Decides what a check-in on `today` means for a user given the last day
//! they checked in and their current streak. No I/O, never fails.

use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakOutcome {
    /// The user already checked in today; duplicate request, no state change.
    AlreadyCheckedIn,
    /// Yesterday had a check-in: the streak extends to the carried value.
    Continued(u32),
    /// No prior check-in, or a gap: the streak restarts at 1.
    Reset,
}

impl StreakOutcome {
    /// Streak length to record if this outcome is accepted. None for a
    /// duplicate.
    pub fn new_streak(&self) -> Option<u32> {
        match self {
            StreakOutcome::AlreadyCheckedIn => None,
            StreakOutcome::Continued(n) => Some(*n),
            StreakOutcome::Reset => Some(1),
        }
    }
}

/// Classify a check-in on `today` against the stored state.
///
/// A `last_checkin_date` in the future (clock skew, manual tampering) is
/// treated as a reset rather than an error.
pub fn evaluate(
    last_checkin_date: Option<NaiveDate>,
    continuous_days: u32,
    today: NaiveDate,
) -> StreakOutcome {
    let Some(last) = last_checkin_date else {
        return StreakOutcome::Reset;
    };

    if last == today {
        return StreakOutcome::AlreadyCheckedIn;
    }

    match today.checked_sub_days(Days::new(1)) {
        Some(yesterday) if last == yesterday => {
            StreakOutcome::Continued(continuous_days.saturating_add(1))
        }
        // gap, or last is in the future
        _ => StreakOutcome::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn first_checkin_resets() {
        assert_eq!(evaluate(None, 0, d("2024-03-01")), StreakOutcome::Reset);
        assert_eq!(evaluate(None, 0, d("2024-03-01")).new_streak(), Some(1));
    }

    #[test]
    fn same_day_is_duplicate() {
        let out = evaluate(Some(d("2024-03-10")), 4, d("2024-03-10"));
        assert_eq!(out, StreakOutcome::AlreadyCheckedIn);
        assert_eq!(out.new_streak(), None);
    }

    #[test]
    fn consecutive_day_continues() {
        let out = evaluate(Some(d("2024-03-06")), 6, d("2024-03-07"));
        assert_eq!(out, StreakOutcome::Continued(7));
        assert_eq!(out.new_streak(), Some(7));
    }

    #[test]
    fn gap_resets() {
        // checked in on the 7th, skipped the 8th, back on the 9th
        let out = evaluate(Some(d("2024-03-07")), 7, d("2024-03-09"));
        assert_eq!(out, StreakOutcome::Reset);
        assert_eq!(out.new_streak(), Some(1));
    }

    #[test]
    fn future_last_date_resets_defensively() {
        let out = evaluate(Some(d("2024-03-20")), 3, d("2024-03-10"));
        assert_eq!(out, StreakOutcome::Reset);
    }

    #[test]
    fn continues_across_month_boundary() {
        let out = evaluate(Some(d("2024-02-29")), 2, d("2024-03-01"));
        assert_eq!(out, StreakOutcome::Continued(3));
    }

    #[test]
    fn continues_across_year_boundary() {
        let out = evaluate(Some(d("2024-12-31")), 9, d("2025-01-01"));
        assert_eq!(out, StreakOutcome::Continued(10));
    }
}
