//! Read-only ranking over `user_stats`.
//!
//! Ranks are 1-based and dense: assigned by sorted position, so tied
//! values still receive consecutive distinct ranks. Ties are broken by
//! earlier first_checkin_date (long-standing members win), then user_id
//! to keep the ordering total.

use crate::errors::AppResult;
use crate::models::metric::{Leaderboard, LeaderboardEntry, LeaderboardMetric};
use chrono::{DateTime, FixedOffset, NaiveDate};
use rusqlite::Connection;

pub fn load_leaderboard(
    conn: &Connection,
    metric: LeaderboardMetric,
    limit: usize,
    now: DateTime<FixedOffset>,
) -> AppResult<Leaderboard> {
    // metric.column() is a fixed enum mapping, not caller input
    let sql = format!(
        "SELECT user_id, user_name, {col}, first_checkin_date
         FROM user_stats
         ORDER BY {col} DESC, first_checkin_date ASC, user_id ASC
         LIMIT ?1",
        col = metric.column()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([limit as i64], |row| {
        let first_raw: Option<String> = row.get(3)?;
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i64>(2)?,
            first_raw,
        ))
    })?;

    let mut entries = Vec::new();
    for (pos, r) in rows.enumerate() {
        let (user_id, user_name, value, first_raw) = r?;
        let first_checkin_date =
            first_raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

        entries.push(LeaderboardEntry {
            rank: pos as u32 + 1,
            user_id,
            user_name,
            value,
            first_checkin_date,
        });
    }

    Ok(Leaderboard {
        metric,
        updated_at: now.to_rfc3339(),
        entries,
    })
}
