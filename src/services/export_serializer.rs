//! Export serializer: JSON, CSV and XML encodings of a record collection.
//!
//! The delimited and markup encoders write exactly the category's
//! `Record::EXPORT_FIELDS`, in order. Unset optional fields are written
//! as empty values.

use log::info;

use crate::types::errors::ExportError;
use crate::types::export::{ExportFormat, ExportPayload};
use crate::types::record::Record;

/// Encodes `records` and wraps the result with filename and MIME type.
pub fn export<T: Record>(records: &[T], format: ExportFormat) -> Result<ExportPayload, ExportError> {
    let content = match format {
        ExportFormat::Json => to_json(records)?,
        ExportFormat::Delimited => to_delimited(records)?,
        ExportFormat::Markup => to_markup(records),
    };
    let filename = format!("{}.{}", T::CATEGORY.collection_name(), format.extension());
    info!(
        "Exported {} {} record(s) as {} ({} bytes)",
        records.len(),
        T::CATEGORY,
        format,
        content.len()
    );
    Ok(ExportPayload {
        content,
        filename,
        mime_type: format.mime_type(),
    })
}

/// Like [`export`], with the format given by name (`json`, `csv`, `xml`, ...).
pub fn export_as<T: Record>(records: &[T], format: &str) -> Result<ExportPayload, ExportError> {
    let format: ExportFormat = format.parse()?;
    export(records, format)
}

/// Pretty-printed JSON array with 2-space indentation.
pub fn to_json<T: Record>(records: &[T]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(records).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// Header line plus one line per record, `\n`-terminated, quoted only where
/// a value contains a separator, a quote or a line break.
pub fn to_delimited<T: Record>(records: &[T]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(T::EXPORT_FIELDS)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    for record in records {
        let row: Vec<String> = T::EXPORT_FIELDS
            .iter()
            .map(|name| {
                record
                    .payload_field(name)
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            })
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// XML document: root element named after the collection, one child per
/// record named after the category (carrying the record ID), one element
/// per exported field.
pub fn to_markup<T: Record>(records: &[T]) -> String {
    let root = T::CATEGORY.collection_name();
    let item = T::CATEGORY.as_str();

    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<{}>\n", root));
    for record in records {
        out.push_str(&format!("  <{} id=\"{}\">\n", item, escape_markup(record.id())));
        for name in T::EXPORT_FIELDS {
            let value = record
                .payload_field(name)
                .map(|v| v.to_string())
                .unwrap_or_default();
            out.push_str(&format!("    <{0}>{1}</{0}>\n", name, escape_markup(&value)));
        }
        out.push_str(&format!("  </{}>\n", item));
    }
    out.push_str(&format!("</{}>\n", root));
    out
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Escapes the five XML special characters and drops characters XML 1.0
/// cannot represent.
pub fn escape_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
