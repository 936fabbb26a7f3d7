use std::fmt::Write;

use quick_xml::escape::escape;

use unitscout_core::PropertyRecord;

use super::cell_text;

/// Render records as a `<table>` with the header in schema order.
pub fn render_html(records: &[PropertyRecord]) -> anyhow::Result<String> {
    let mut html = String::from("<table border=\"1\">\n  <thead>\n    <tr>");
    for column in PropertyRecord::COLUMNS {
        write!(html, "<th>{}</th>", column)?;
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for record in records {
        html.push_str("    <tr>");
        for (_, value) in record.to_row() {
            write!(html, "<td>{}</td>", escape(cell_text(&value).as_str()))?;
        }
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    Ok(html)
}
