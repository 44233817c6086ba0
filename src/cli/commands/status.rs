use crate::cli::commands::resolve_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::service::CheckinService;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::stats::UserStats;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_streak, colorize_optional};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { user, date } = cmd {
        let clock = Clock::from_offset_hours(cfg.utc_offset_hours)?;
        let day = resolve_day(date, &clock)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let mut svc = CheckinService::new(&mut pool, clock);

        let report = svc.status(user, day)?;

        match report.stats {
            None => info(format!("No check-ins recorded for user {}.", user)),
            Some(stats) => print_stats(&stats, report.has_checked_today, day),
        }
    }
    Ok(())
}

fn fmt_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_else(|| "--".to_string())
}

fn print_stats(s: &UserStats, checked_today: bool, day: NaiveDate) {
    let streak_color = color_for_streak(s.continuous_checkins);

    println!("\n=== {} ({}) ===", s.user_name, s.user_id);
    println!(
        "Checked in {}: {}",
        day,
        if checked_today { "yes" } else { "no" }
    );
    println!(
        "Current streak:  {}{} day(s){}",
        streak_color, s.continuous_checkins, RESET
    );
    println!("Best streak:     {} day(s)", s.max_continuous);
    println!("Total check-ins: {}", s.total_checkins);
    println!("Total points:    {}", s.total_points);
    println!("This month:      {}", s.this_month_checkins);
    println!("This year:       {}", s.this_year_checkins);
    println!(
        "First check-in:  {}",
        colorize_optional(&fmt_date(s.first_checkin_date))
    );
    println!(
        "Last check-in:   {}",
        colorize_optional(&fmt_date(s.last_checkin_date))
    );
}
