//! Check-in orchestration.
//!
//! `CheckinService` wires the pure streak/reward logic to the store and is
//! the only surface transports (CLI today) talk to. Each operation is one
//! bounded round trip; the accepting path runs inside a single IMMEDIATE
//! transaction so the record insert and the stats update land together or
//! not at all.

use chrono::NaiveDate;
use rusqlite::TransactionBehavior;

use crate::core::clock::Clock;
use crate::core::reward::{RewardSchedule, default_schedule};
use crate::core::streak::{self, StreakOutcome};
use crate::db::pool::DbPool;
use crate::db::{leaderboard, queries};
use crate::errors::{AppError, AppResult};
use crate::models::metric::{Leaderboard, LeaderboardMetric};
use crate::models::outcome::{CheckinOutcome, StatusReport};
use crate::models::record::CheckinRecord;
use crate::models::stats::UserStats;
use crate::utils::date;

const MAX_USER_ID_LEN: usize = 64;
const MAX_USER_NAME_LEN: usize = 128;

pub struct CheckinService<'a> {
    pool: &'a mut DbPool,
    clock: Clock,
    schedule: RewardSchedule,
}

impl<'a> CheckinService<'a> {
    pub fn new(pool: &'a mut DbPool, clock: Clock) -> Self {
        Self {
            pool,
            clock,
            schedule: default_schedule,
        }
    }

    pub fn with_schedule(pool: &'a mut DbPool, clock: Clock, schedule: RewardSchedule) -> Self {
        Self {
            pool,
            clock,
            schedule,
        }
    }

    fn validate_user(user_id: &str, user_name: &str) -> AppResult<()> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user id must not be empty".into()));
        }
        if user_id.len() > MAX_USER_ID_LEN {
            return Err(AppError::Validation(format!(
                "user id longer than {} characters",
                MAX_USER_ID_LEN
            )));
        }
        if user_name.trim().is_empty() {
            return Err(AppError::Validation("user name must not be empty".into()));
        }
        if user_name.len() > MAX_USER_NAME_LEN {
            return Err(AppError::Validation(format!(
                "user name longer than {} characters",
                MAX_USER_NAME_LEN
            )));
        }
        Ok(())
    }

    /// Check the user in for today (reference timezone).
    pub fn check_in_now(&mut self, user_id: &str, user_name: &str) -> AppResult<CheckinOutcome> {
        let today = self.clock.today();
        self.check_in(user_id, user_name, today)
    }

    /// Check the user in for an explicit calendar day.
    ///
    /// Idempotent per (user, day): a second call is a normal
    /// `AlreadyChecked` outcome with no writes, so callers can retry
    /// after a timeout without double-counting.
    pub fn check_in(
        &mut self,
        user_id: &str,
        user_name: &str,
        today: NaiveDate,
    ) -> AppResult<CheckinOutcome> {
        Self::validate_user(user_id, user_name)?;

        // IMMEDIATE: take the write lock up front so the read-modify-write
        // below cannot deadlock on a deferred lock upgrade.
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let stats = queries::get_stats(&tx, user_id)?;
        let (last_date, current_streak) = stats
            .as_ref()
            .map(|s| (s.last_checkin_date, s.continuous_checkins))
            .unwrap_or((None, 0));

        let outcome = streak::evaluate(last_date, current_streak, today);
        let Some(new_streak) = outcome.new_streak() else {
            // duplicate: nothing written, transaction dropped
            return Ok(CheckinOutcome::AlreadyChecked);
        };
        let is_continuous = matches!(outcome, StreakOutcome::Continued(_));
        let reward_points = (self.schedule)(new_streak);

        let record = CheckinRecord {
            id: 0,
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            checkin_date: today,
            checkin_time: self.clock.now().to_rfc3339(),
            reward_points,
            is_continuous,
            continuous_days: new_streak,
        };

        match queries::insert_record(&tx, &record) {
            Ok(_) => {}
            // a concurrent writer won the day: same answer as a plain duplicate
            Err(AppError::DuplicateCheckin { .. }) => {
                return Ok(CheckinOutcome::AlreadyChecked);
            }
            Err(e) => return Err(e),
        }

        let mut s = stats.unwrap_or_else(|| UserStats::new(user_id, user_name));
        s.user_name = user_name.to_string();
        s.total_checkins += 1;
        s.continuous_checkins = new_streak;
        s.max_continuous = s.max_continuous.max(new_streak);
        s.total_points += reward_points;
        s.last_checkin_date = Some(today);
        s.first_checkin_date = s.first_checkin_date.or(Some(today));

        // month/year counts come from the history (including the row just
        // inserted), so calendar rollover cannot leave stale counters
        let (month_start, month_end) = date::month_bounds(today);
        let (year_start, year_end) = date::year_bounds(today);
        s.this_month_checkins = queries::count_between(&tx, user_id, month_start, month_end)?;
        s.this_year_checkins = queries::count_between(&tx, user_id, year_start, year_end)?;

        queries::upsert_stats(&tx, &s)?;
        tx.commit()?;

        Ok(CheckinOutcome::Accepted {
            reward_points,
            continuous_days: new_streak,
            is_continuous,
        })
    }

    /// Read-only status snapshot. Unknown users yield `stats: None`.
    pub fn status(&mut self, user_id: &str, today: NaiveDate) -> AppResult<StatusReport> {
        let stats = queries::get_stats(&self.pool.conn, user_id)?;
        let today_record = queries::record_for_date(&self.pool.conn, user_id, today)?;

        Ok(StatusReport {
            has_checked_today: today_record.is_some(),
            stats,
            today_record,
        })
    }

    /// Most recent records first, capped at `limit`.
    pub fn history(&mut self, user_id: &str, limit: usize) -> AppResult<Vec<CheckinRecord>> {
        queries::load_history(&self.pool.conn, user_id, limit)
    }

    pub fn leaderboard(
        &mut self,
        metric: LeaderboardMetric,
        limit: usize,
    ) -> AppResult<Leaderboard> {
        leaderboard::load_leaderboard(&self.pool.conn, metric, limit, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn test_pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn clock() -> Clock {
        Clock::from_offset_hours(0).unwrap()
    }

    fn accepted(outcome: &CheckinOutcome) -> (i64, u32) {
        match outcome {
            CheckinOutcome::Accepted {
                reward_points,
                continuous_days,
                ..
            } => (*reward_points, *continuous_days),
            CheckinOutcome::AlreadyChecked => panic!("expected an accepted check-in"),
        }
    }

    #[test]
    fn first_checkin_starts_streak_at_one() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        let out = svc.check_in("u1", "Alice", d("2024-03-01")).unwrap();
        assert_eq!(accepted(&out), (1, 1));

        let report = svc.status("u1", d("2024-03-01")).unwrap();
        assert!(report.has_checked_today);
        let stats = report.stats.unwrap();
        assert_eq!(stats.total_checkins, 1);
        assert_eq!(stats.total_points, 1);
        assert_eq!(stats.first_checkin_date, Some(d("2024-03-01")));
    }

    #[test]
    fn seventh_consecutive_day_awards_top_tier() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        for day in 1..=6 {
            svc.check_in("u1", "Alice", d(&format!("2024-03-{day:02}")))
                .unwrap();
        }
        let out = svc.check_in("u1", "Alice", d("2024-03-07")).unwrap();
        assert_eq!(accepted(&out), (3, 7));
    }

    #[test]
    fn gap_resets_streak_but_keeps_max() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        for day in 1..=7 {
            svc.check_in("u1", "Alice", d(&format!("2024-03-{day:02}")))
                .unwrap();
        }
        // skip 2024-03-08
        let out = svc.check_in("u1", "Alice", d("2024-03-09")).unwrap();
        assert_eq!(accepted(&out), (1, 1));

        let stats = svc.status("u1", d("2024-03-09")).unwrap().stats.unwrap();
        assert_eq!(stats.continuous_checkins, 1);
        assert_eq!(stats.max_continuous, 7);
    }

    #[test]
    fn duplicate_submit_is_a_no_op() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        svc.check_in("u1", "Alice", d("2024-03-10")).unwrap();
        let before = svc.status("u1", d("2024-03-10")).unwrap().stats.unwrap();

        let out = svc.check_in("u1", "Alice", d("2024-03-10")).unwrap();
        assert_eq!(out, CheckinOutcome::AlreadyChecked);

        let after = svc.status("u1", d("2024-03-10")).unwrap().stats.unwrap();
        assert_eq!(after.total_checkins, before.total_checkins);
        assert_eq!(after.total_points, before.total_points);
        assert_eq!(after.continuous_checkins, before.continuous_checkins);
    }

    #[test]
    fn totals_match_history_after_mixed_sequence() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        let days = [
            "2024-03-01",
            "2024-03-02",
            "2024-03-05",
            "2024-03-06",
            "2024-03-07",
        ];
        for day in days {
            svc.check_in("u1", "Alice", d(day)).unwrap();
        }

        let stats = svc.status("u1", d("2024-03-07")).unwrap().stats.unwrap();
        let history = svc.history("u1", 100).unwrap();

        assert_eq!(stats.total_checkins, history.len() as i64);
        let point_sum: i64 = history.iter().map(|r| r.reward_points).sum();
        assert_eq!(stats.total_points, point_sum);
        // runs: 2 then 3 → current streak 3, max 3
        assert_eq!(stats.continuous_checkins, 3);
        assert_eq!(stats.max_continuous, 3);
    }

    #[test]
    fn month_counters_recompute_on_rollover() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        svc.check_in("u1", "Alice", d("2024-03-30")).unwrap();
        svc.check_in("u1", "Alice", d("2024-03-31")).unwrap();
        let march = svc.status("u1", d("2024-03-31")).unwrap().stats.unwrap();
        assert_eq!(march.this_month_checkins, 2);

        svc.check_in("u1", "Alice", d("2024-04-01")).unwrap();
        let april = svc.status("u1", d("2024-04-01")).unwrap().stats.unwrap();
        assert_eq!(april.this_month_checkins, 1);
        assert_eq!(april.this_year_checkins, 3);
        // the streak itself survives the month boundary
        assert_eq!(april.continuous_checkins, 3);
    }

    #[test]
    fn year_counters_recompute_on_rollover() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        svc.check_in("u1", "Alice", d("2024-12-31")).unwrap();
        svc.check_in("u1", "Alice", d("2025-01-01")).unwrap();

        let stats = svc.status("u1", d("2025-01-01")).unwrap().stats.unwrap();
        assert_eq!(stats.this_year_checkins, 1);
        assert_eq!(stats.this_month_checkins, 1);
        assert_eq!(stats.continuous_checkins, 2);
    }

    #[test]
    fn latest_display_name_wins_without_rewriting_history() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        svc.check_in("u1", "Alice", d("2024-03-01")).unwrap();
        svc.check_in("u1", "Alicia", d("2024-03-02")).unwrap();

        let stats = svc.status("u1", d("2024-03-02")).unwrap().stats.unwrap();
        assert_eq!(stats.user_name, "Alicia");

        let history = svc.history("u1", 10).unwrap();
        // records keep the name observed at event time
        assert_eq!(history[1].user_name, "Alice");
        assert_eq!(history[0].user_name, "Alicia");
    }

    #[test]
    fn blank_identities_are_rejected_before_the_store() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        assert!(matches!(
            svc.check_in("", "Alice", d("2024-03-01")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            svc.check_in("u1", "   ", d("2024-03-01")),
            Err(AppError::Validation(_))
        ));
        // nothing was created
        assert!(svc.status("u1", d("2024-03-01")).unwrap().stats.is_none());
    }

    #[test]
    fn unknown_user_status_is_empty_not_an_error() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        let report = svc.status("ghost", d("2024-03-01")).unwrap();
        assert!(!report.has_checked_today);
        assert!(report.stats.is_none());
        assert!(report.today_record.is_none());
        assert!(svc.history("ghost", 10).unwrap().is_empty());
    }

    #[test]
    fn check_in_now_uses_the_reference_clock() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        let out = svc.check_in_now("u1", "Alice").unwrap();
        assert!(!out.already_checked());

        let again = svc.check_in_now("u1", "Alice").unwrap();
        assert_eq!(again, CheckinOutcome::AlreadyChecked);
    }

    #[test]
    fn custom_schedule_is_honored() {
        fn flat_ten(_streak: u32) -> i64 {
            10
        }

        let mut pool = test_pool();
        let mut svc = CheckinService::with_schedule(&mut pool, clock(), flat_ten);

        let out = svc.check_in("u1", "Alice", d("2024-03-01")).unwrap();
        assert_eq!(accepted(&out).0, 10);
    }

    #[test]
    fn leaderboard_ranks_with_first_checkin_tiebreak() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        // early joined on 03-01, late on 03-03; both end with streak 7
        for day in 1..=7 {
            svc.check_in("early", "Early Bird", d(&format!("2024-03-{day:02}")))
                .unwrap();
        }
        for day in 3..=9 {
            svc.check_in("late", "Late Comer", d(&format!("2024-03-{day:02}")))
                .unwrap();
        }
        for day in 7..=9 {
            svc.check_in("short", "Short Run", d(&format!("2024-03-{day:02}")))
                .unwrap();
        }

        let board = svc
            .leaderboard(LeaderboardMetric::Continuous, 10)
            .unwrap();
        let ids: Vec<&str> = board.entries.iter().map(|e| e.user_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "short"]);

        let ranks: Vec<u32> = board.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        assert_eq!(board.entries[0].value, 7);
        assert_eq!(board.entries[1].value, 7);
        assert_eq!(board.entries[2].value, 3);
    }

    #[test]
    fn leaderboard_limit_caps_rows() {
        let mut pool = test_pool();
        let mut svc = CheckinService::new(&mut pool, clock());

        for i in 0..5 {
            svc.check_in(&format!("u{i}"), &format!("User {i}"), d("2024-03-01"))
                .unwrap();
        }

        let board = svc.leaderboard(LeaderboardMetric::Total, 3).unwrap();
        assert_eq!(board.entries.len(), 3);
    }
}
