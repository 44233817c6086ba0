use crate::models::record::CheckinRecord;
use csv::Writer;
use std::path::Path;

/// Write check-in records as CSV.
pub(crate) fn export_csv(records: &[CheckinRecord], path: &Path) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "user_id",
        "user_name",
        "checkin_date",
        "checkin_time",
        "reward_points",
        "is_continuous",
        "continuous_days",
    ])?;

    for rec in records {
        wtr.write_record(&[
            rec.user_id.clone(),
            rec.user_name.clone(),
            rec.date_str(),
            rec.checkin_time.clone(),
            rec.reward_points.to_string(),
            (rec.is_continuous as i32).to_string(),
            rec.continuous_days.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
