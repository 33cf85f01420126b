//! SpreadsheetML markup for the generated worksheet.

/// Worksheet prologue, up to and including the opening `<sheetData>`.
pub(crate) const PROLOGUE: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    "<sheetData>",
);

/// Worksheet epilogue closing what [`PROLOGUE`] opened.
pub(crate) const EPILOGUE: &str = "</sheetData></worksheet>";

/// Style index of the bold title row in the bundled `styles.xml`.
pub(crate) const TITLE_STYLE: u32 = 1;

/// Spreadsheet column letters for a 1-based ordinal: 1 is `A`, 26 is `Z`,
/// 27 is `AA`.
///
/// Ordinal 0 has no column and yields an empty string.
pub fn column_letter(mut ordinal: u32) -> String {
    let mut letters = Vec::new();
    while ordinal > 0 {
        let rem = (ordinal - 1) % 26;
        letters.push(b'A' + rem as u8);
        ordinal = (ordinal - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Render one `<row>` of inline-string cells.
pub(crate) fn render_row<S: AsRef<str>>(row: u32, cells: &[S], style: Option<u32>) -> String {
    let mut xml = String::with_capacity(32 + cells.len() * 48);
    xml.push_str(&format!(r#"<row r="{row}">"#));
    for (i, cell) in cells.iter().enumerate() {
        let reference = format!("{}{row}", column_letter(i as u32 + 1));
        match style {
            Some(s) => xml.push_str(&format!(r#"<c r="{reference}" s="{s}" t="inlineStr">"#)),
            None => xml.push_str(&format!(r#"<c r="{reference}" t="inlineStr">"#)),
        }
        xml.push_str(r#"<is><t xml:space="preserve">"#);
        escape_into(&mut xml, cell.as_ref());
        xml.push_str("</t></is></c>");
    }
    xml.push_str("</row>");
    xml
}

/// Append `text` with markup characters escaped. Characters XML 1.0 cannot
/// carry at all are dropped.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
}
