use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;

use unitscout_core::PropertyRecord;

use super::cell_text;

/// Write one worksheet: a bold header row in schema order, then one row per
/// record. Scalars are written natively, lists and objects as JSON text.
pub fn write_xlsx(records: &[PropertyRecord], path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet().set_name("Properties")?;

    for (col, name) in PropertyRecord::COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, (_, value)) in record.to_row().into_iter().enumerate() {
            let col = col as u16;
            match &value {
                Value::Null => {}
                Value::Bool(b) => {
                    sheet.write_boolean(row, col, *b)?;
                }
                Value::Number(n) => match n.as_f64() {
                    Some(n) => {
                        sheet.write_number(row, col, n)?;
                    }
                    None => {
                        sheet.write_string(row, col, n.to_string())?;
                    }
                },
                other => {
                    sheet.write_string(row, col, cell_text(other))?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
