//! Store contract for check-in records and per-user stats.
//!
//! All functions take a plain `&Connection` so they compose inside a
//! `rusqlite::Transaction` (which derefs to one). The check-in write path
//! relies on the UNIQUE(user_id, checkin_date) index for same-day
//! exclusivity; `insert_record` surfaces that violation as a distinct
//! error so the service can recover it into a duplicate outcome.

use crate::errors::{AppError, AppResult};
use crate::models::record::CheckinRecord;
use crate::models::stats::UserStats;
use chrono::NaiveDate;
use rusqlite::{Connection, ErrorCode, Result, Row, params};

pub fn map_record_row(row: &Row) -> Result<CheckinRecord> {
    let date_str: String = row.get("checkin_date")?;

    let checkin_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(CheckinRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        checkin_date,
        checkin_time: row.get("checkin_time")?,
        reward_points: row.get("reward_points")?,
        is_continuous: row.get::<_, i32>("is_continuous")? == 1,
        continuous_days: row.get("continuous_days")?,
    })
}

fn parse_opt_date(raw: Option<String>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidDate(s)),
                )
            }),
    }
}

pub fn map_stats_row(row: &Row) -> Result<UserStats> {
    Ok(UserStats {
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        total_checkins: row.get("total_checkins")?,
        continuous_checkins: row.get("continuous_checkins")?,
        max_continuous: row.get("max_continuous")?,
        total_points: row.get("total_points")?,
        last_checkin_date: parse_opt_date(row.get("last_checkin_date")?)?,
        first_checkin_date: parse_opt_date(row.get("first_checkin_date")?)?,
        this_month_checkins: row.get("this_month_checkins")?,
        this_year_checkins: row.get("this_year_checkins")?,
    })
}

/// Insert a new check-in record (`id` is ignored and assigned by the
/// store). A UNIQUE violation on (user_id, checkin_date) becomes
/// `AppError::DuplicateCheckin`; the caller decides whether that is a
/// conflict or a normal duplicate.
pub fn insert_record(conn: &Connection, rec: &CheckinRecord) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO checkins
            (user_id, user_name, checkin_date, checkin_time, reward_points, is_continuous, continuous_days)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.user_id,
            rec.user_name,
            rec.checkin_date.format("%Y-%m-%d").to_string(),
            rec.checkin_time,
            rec.reward_points,
            if rec.is_continuous { 1 } else { 0 },
            rec.continuous_days,
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::DuplicateCheckin {
                user_id: rec.user_id.clone(),
                date: rec.checkin_date,
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub fn get_stats(conn: &Connection, user_id: &str) -> AppResult<Option<UserStats>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM user_stats WHERE user_id = ?1")?;

    let mut rows = stmt.query_map([user_id], map_stats_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Write the full stats row, creating it on the user's first check-in.
/// Must run inside the same transaction as the record insert.
pub fn upsert_stats(conn: &Connection, s: &UserStats) -> AppResult<()> {
    conn.execute(
        "INSERT INTO user_stats
            (user_id, user_name, total_checkins, continuous_checkins, max_continuous,
             total_points, last_checkin_date, first_checkin_date,
             this_month_checkins, this_year_checkins)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(user_id) DO UPDATE SET
            user_name           = excluded.user_name,
            total_checkins      = excluded.total_checkins,
            continuous_checkins = excluded.continuous_checkins,
            max_continuous      = excluded.max_continuous,
            total_points        = excluded.total_points,
            last_checkin_date   = excluded.last_checkin_date,
            first_checkin_date  = excluded.first_checkin_date,
            this_month_checkins = excluded.this_month_checkins,
            this_year_checkins  = excluded.this_year_checkins",
        params![
            s.user_id,
            s.user_name,
            s.total_checkins,
            s.continuous_checkins,
            s.max_continuous,
            s.total_points,
            s.last_checkin_date.map(|d| d.format("%Y-%m-%d").to_string()),
            s.first_checkin_date.map(|d| d.format("%Y-%m-%d").to_string()),
            s.this_month_checkins,
            s.this_year_checkins,
        ],
    )?;
    Ok(())
}

pub fn record_for_date(
    conn: &Connection,
    user_id: &str,
    date: NaiveDate,
) -> AppResult<Option<CheckinRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM checkins WHERE user_id = ?1 AND checkin_date = ?2",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map(params![user_id, date_str], map_record_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Most recent records first, capped at `limit`.
pub fn load_history(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> AppResult<Vec<CheckinRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM checkins
         WHERE user_id = ?1
         ORDER BY checkin_date DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![user_id, limit as i64], map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Count the user's records with checkin_date in [start, end].
/// "YYYY-MM-DD" strings compare lexicographically in date order.
pub fn count_between(
    conn: &Connection,
    user_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "SELECT COUNT(*) FROM checkins
         WHERE user_id = ?1 AND checkin_date >= ?2 AND checkin_date <= ?3",
    )?;

    let n: i64 = stmt.query_row(
        params![
            user_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// All records, oldest first; optionally restricted to one user. Feeds the
/// export pipeline.
pub fn load_all_records(
    conn: &Connection,
    user_id: Option<&str>,
) -> AppResult<Vec<CheckinRecord>> {
    let mut out = Vec::new();

    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare(
                "SELECT * FROM checkins WHERE user_id = ?1 ORDER BY checkin_date ASC, id ASC",
            )?;
            let rows = stmt.query_map([uid], map_record_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt =
                conn.prepare("SELECT * FROM checkins ORDER BY checkin_date ASC, id ASC")?;
            let rows = stmt.query_map([], map_record_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
