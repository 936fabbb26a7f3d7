use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use unitscout_core::PropertyRecord;

use super::cell_text;

/// Render records as `<Properties><Property>...</Property></Properties>`.
/// Null fields become empty elements.
pub fn render_xml(records: &[PropertyRecord]) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("Properties")))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new("Property")))?;

        for (name, value) in record.to_row() {
            if value.is_null() {
                writer.write_event(Event::Empty(BytesStart::new(name)))?;
            } else {
                let text = cell_text(&value);
                writer.write_event(Event::Start(BytesStart::new(name)))?;
                writer.write_event(Event::Text(BytesText::new(&text)))?;
                writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("Property")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Properties")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}
