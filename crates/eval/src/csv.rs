//! Minimal CSV adapter for the question dataset and report tables.
//!
//! RFC 4180 quoting: fields containing the delimiter, a quote, or a line
//! break are quoted, with embedded quotes doubled. Nothing more — this is
//! an I/O adapter, not part of the retrieval design.

use ragprobe_common::{RagProbeError, Result};

/// Parse CSV text into records of fields.
///
/// Handles quoted fields, doubled quotes inside them, and line breaks
/// inside quoted fields. CRLF and LF line endings both accepted.
pub fn parse(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                if field.is_empty() {
                    in_quotes = true;
                } else {
                    return Err(RagProbeError::invalid_input(
                        "CSV quote opened in the middle of an unquoted field",
                    ));
                }
            }
            ',' => {
                record.push(std::mem::take(&mut field));
            }
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    continue; // consumed by the following '\n'
                }
                field.push(ch);
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(RagProbeError::invalid_input("CSV ends inside a quoted field"));
    }

    // Final record without trailing newline
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

/// Quote a field if it needs quoting
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Format one CSV row with a trailing newline
pub fn format_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}
