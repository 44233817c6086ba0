use crate::models::record::CheckinRecord;
use std::path::Path;

/// Write check-in records as pretty-printed JSON.
pub(crate) fn export_json(records: &[CheckinRecord], path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
