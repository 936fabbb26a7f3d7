//! Record export in flat formats.

mod csv;
mod html;
mod xlsx;
mod xml;

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use unitscout_core::{PropertyRecord, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// CSV with a sorted header
    Csv,
    /// Excel workbook
    Xlsx,
    /// XML document
    Xml,
    /// HTML table
    Html,
}

impl OutputFormat {
    /// Parse a format name or file extension, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xml" => Some(Self::Xml),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Xml => "xml",
            OutputFormat::Html => "html",
        };
        write!(f, "{}", name)
    }
}

/// Pick the export format: explicit flag, then a recognized output file
/// extension, then the configured default.
pub fn resolve_format(
    flag: Option<OutputFormat>,
    output: &Path,
    configured: &str,
) -> Result<OutputFormat, ScrapeError> {
    if let Some(format) = flag {
        return Ok(format);
    }

    if let Some(format) = output
        .extension()
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_name)
    {
        return Ok(format);
    }

    OutputFormat::from_name(configured)
        .ok_or_else(|| ScrapeError::UnsupportedFormat(configured.to_string()))
}

/// Write `records` to `path`, creating parent directories as needed.
pub fn export_records(
    records: &[PropertyRecord],
    path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::Json => write_json(records, path)?,
        OutputFormat::Csv => csv::write_csv(records, path)?,
        OutputFormat::Xlsx => xlsx::write_xlsx(records, path)?,
        OutputFormat::Xml => fs::write(path, xml::render_xml(records)?)?,
        OutputFormat::Html => fs::write(path, html::render_html(records)?)?,
    }

    debug!("Wrote {} records as {} to {}", records.len(), format, path.display());
    Ok(())
}

fn write_json(records: &[PropertyRecord], path: &Path) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Text form of a value in a flat cell. Null is empty, strings are
/// verbatim, everything else is compact JSON.
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use unitscout_core::{Field, Portal};

    pub(crate) fn sample_records() -> Vec<PropertyRecord> {
        let mut first = PropertyRecord::new("https://www.bayut.com/property/1", Portal::Bayut);
        first.set(Field::PropertyNameEn, Some(json!("Burj Vista <Tower 1> & Co")));
        first.set(Field::PropertyValue, Some(json!(2100000)));
        first.set(Field::UnitNumber, Some(json!("908")));
        first.owner_emails = Some(vec!["B@x.com".into(), "a@x.com".into()]);

        let mut second = PropertyRecord::new("https://dubai.dubizzle.com/p/2", Portal::Dubizzle);
        second.set(Field::PropertyTypeNameEn, Some(json!(["Apartment", "Product"])));
        second.meta = Some(json!({"agent": "Sara"}).as_object().unwrap().clone());

        vec![first, second]
    }

    #[test]
    fn test_resolve_format_precedence() {
        let path = Path::new("out/records.csv");
        assert_eq!(
            resolve_format(Some(OutputFormat::Xml), path, "json").unwrap(),
            OutputFormat::Xml
        );
        assert_eq!(resolve_format(None, path, "json").unwrap(), OutputFormat::Csv);
        assert_eq!(
            resolve_format(None, Path::new("out/records.XLSX"), "json").unwrap(),
            OutputFormat::Xlsx
        );
        assert_eq!(
            resolve_format(None, Path::new("out/records.txt"), "html").unwrap(),
            OutputFormat::Html
        );
        assert_eq!(
            resolve_format(None, Path::new("out/records"), "JSON").unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_unsupported_configured_format() {
        let err = resolve_format(None, Path::new("out/records.txt"), "yaml").unwrap_err();
        assert!(matches!(err, ScrapeError::UnsupportedFormat(f) if f == "yaml"));
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/records.json");
        let records = sample_records();

        export_records(&records, &path, OutputFormat::Json).unwrap();

        let back: Vec<PropertyRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_json_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        export_records(&[], &path, OutputFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("908")), "908");
        assert_eq!(cell_text(&json!(2100000)), "2100000");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
