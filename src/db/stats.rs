use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print the `db --info` report: file size, record counts, user count,
/// covered date range.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL CHECK-INS / USERS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM checkins", [], |row| row.get(0))?;
    println!(
        "{}• Total check-ins:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM user_stats", [], |row| row.get(0))?;
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT checkin_date FROM checkins ORDER BY checkin_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT checkin_date FROM checkins ORDER BY checkin_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
