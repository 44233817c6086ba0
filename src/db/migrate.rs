use rusqlite::{Connection, OptionalExtension, Result};

use crate::ui::messages::success;

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `checkins` table exists.
fn checkins_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='checkins'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `user_stats` has a given column.
fn stats_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('user_stats')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the check-in tables with the modern schema.
///
/// The UNIQUE index on (user_id, checkin_date) is the arbiter for
/// concurrent same-day check-ins: the application never relies on
/// in-process locking.
fn create_checkin_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS checkins (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         TEXT NOT NULL,
            user_name       TEXT NOT NULL,
            checkin_date    TEXT NOT NULL,
            checkin_time    TEXT NOT NULL,
            reward_points   INTEGER NOT NULL,
            is_continuous   INTEGER NOT NULL DEFAULT 0,
            continuous_days INTEGER NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_checkins_user_date ON checkins(user_id, checkin_date);
        CREATE INDEX IF NOT EXISTS idx_checkins_date ON checkins(checkin_date);

        CREATE TABLE IF NOT EXISTS user_stats (
            user_id             TEXT PRIMARY KEY,
            user_name           TEXT NOT NULL,
            total_checkins      INTEGER NOT NULL DEFAULT 0,
            continuous_checkins INTEGER NOT NULL DEFAULT 0,
            max_continuous      INTEGER NOT NULL DEFAULT 0,
            total_points        INTEGER NOT NULL DEFAULT 0,
            last_checkin_date   TEXT,
            first_checkin_date  TEXT,
            this_month_checkins INTEGER NOT NULL DEFAULT 0,
            this_year_checkins  INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Backfill `max_continuous` for databases created before the column
/// existed. Marked in the `log` table so it runs once.
fn migrate_add_max_continuous(conn: &Connection) -> Result<()> {
    let version = "20250412_0001_add_max_continuous";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !stats_has_column(conn, "max_continuous")? {
        conn.execute(
            "ALTER TABLE user_stats ADD COLUMN max_continuous INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
        // seed the high-water mark from the recorded streak history
        conn.execute(
            "UPDATE user_stats SET max_continuous = (
                SELECT IFNULL(MAX(continuous_days), 0) FROM checkins
                WHERE checkins.user_id = user_stats.user_id
            );",
            [],
        )?;
    }

    // 2) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added max_continuous to user_stats')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'max_continuous' to user_stats table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure check-in tables exist
    if !checkins_table_exists(conn)? {
        create_checkin_tables(conn)?;
        success("Created check-in tables (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_checkins_user_date ON checkins(user_id, checkin_date);
            CREATE INDEX IF NOT EXISTS idx_checkins_date ON checkins(checkin_date);
            "#,
        )?;

        migrate_add_max_continuous(conn)?;
    }

    Ok(())
}
