use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use unitscout_core::PropertyRecord;

use super::cell_text;

/// Written instead of a header when there is nothing to export.
const EMPTY_MARKER: &str = "# No records to export\n";

/// Write records as CSV. The header is the sorted union of all record keys.
pub fn write_csv(records: &[PropertyRecord], path: &Path) -> anyhow::Result<()> {
    if records.is_empty() {
        fs::write(path, EMPTY_MARKER)?;
        return Ok(());
    }

    let rows = records
        .iter()
        .map(|r| -> anyhow::Result<Map<String, Value>> {
            match serde_json::to_value(r)? {
                Value::Object(map) => Ok(map),
                other => anyhow::bail!("record did not serialize to an object: {}", other),
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let header: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(&header)?;

    for row in &rows {
        writer.write_record(
            header
                .iter()
                .map(|key| row.get(*key).map(cell_text).unwrap_or_default()),
        )?;
    }

    writer.flush()?;
    Ok(())
}
