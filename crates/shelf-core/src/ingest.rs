//! Tab-separated catalog ingestion.
//!
//! The input format is the raw spreadsheet export: one exact header line,
//! then one record per line, seven tab-separated fields, optionally
//! quoted. Quotes and newlines are stripped from field values; nothing
//! else is escaped, so embedded tabs or quotes inside a field are not
//! representable.

use std::io::BufRead;

use crate::catalog::record::Record;
use crate::catalog::Catalog;
use crate::error::{ShelfError, ShelfResult};

/// The header line every input must start with, byte for byte.
pub const EXPECTED_HEADER: &str =
    "TITLE\tAUTHOR(s)\t\"TRANSLATOR(s), EDITOR(s), etc.\"\tSUBJECT\tSTATUS\tDATE\tISBN";

/// Number of tab-separated fields per record line.
pub const FIELD_COUNT: usize = 7;

/// Reads a whole catalog from `reader`.
///
/// The first line must equal [`EXPECTED_HEADER`] (a trailing `\r` from
/// CRLF input is tolerated). Blank lines are skipped; every other line
/// must split into exactly [`FIELD_COUNT`] fields.
///
/// # Errors
///
/// - [`ShelfError::HeaderMismatch`] if the header differs, carrying both
///   the expected and the found text.
/// - [`ShelfError::MalformedRecord`] with the 1-based line number if a
///   line does not have seven fields.
/// - [`ShelfError::Io`] if reading fails.
pub fn parse_catalog<R: BufRead>(reader: R) -> ShelfResult<Catalog> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    if header.trim_end_matches('\r') != EXPECTED_HEADER {
        return Err(ShelfError::HeaderMismatch {
            expected: EXPECTED_HEADER.to_string(),
            found: header,
        });
    }

    let mut catalog = Catalog::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Line numbers count the header, so record lines start at 2.
        let record = parse_record(&line, index + 2)?;
        catalog.push(record);
    }

    tracing::debug!(records = catalog.len(), "parsed catalog");

    Ok(catalog)
}

fn parse_record(line: &str, line_number: usize) -> ShelfResult<Record> {
    let fields: Vec<String> = line.split('\t').map(sanitize_field).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ShelfError::MalformedRecord {
            line: line_number,
            fields: fields.len(),
        });
    }

    let mut fields = fields.into_iter();
    // Header order: title, author, contributor, subject, status, date, isbn.
    Ok(Record::new(
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
        fields.next().unwrap_or_default(),
    ))
}

/// Strips quoting and line-ending characters from a raw field value.
fn sanitize_field(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != '"' && c != '\n' && c != '\r')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn with_header(body: &str) -> String {
        format!("{EXPECTED_HEADER}\n{body}")
    }

    #[test]
    fn parses_records_in_input_order() {
        let input = with_header(
            "Spring Snow\tYukio Mishima\ttrans. Michael Gallagher\tFiction\tRead\t2023 May\t9780394442396\n\
             Nausea\tJean-Paul Sartre\t\tFiction\tNone\t2022 March\t9780811220300\n",
        );
        let catalog = parse_catalog(Cursor::new(input)).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().title(), "Spring Snow");
        assert_eq!(catalog.get(0).unwrap().contributor(), "trans. Michael Gallagher");
        assert_eq!(catalog.get(1).unwrap().author(), "Jean-Paul Sartre");
    }

    #[test]
    fn empty_fields_keep_their_position() {
        let input = with_header("Nausea\tJean-Paul Sartre\t\t\t\t\t\n");
        let catalog = parse_catalog(Cursor::new(input)).unwrap();

        let record = catalog.get(0).unwrap();
        assert_eq!(record.title(), "Nausea");
        assert_eq!(record.author(), "Jean-Paul Sartre");
        assert_eq!(record.contributor(), "");
        assert_eq!(record.isbn(), "");
    }

    #[test]
    fn quotes_are_stripped_from_fields() {
        let input = with_header(
            "\"Being and Time\"\tMartin Heidegger\t\"trans. Macquarrie and Robinson\"\t\t\t\t\n",
        );
        let catalog = parse_catalog(Cursor::new(input)).unwrap();

        let record = catalog.get(0).unwrap();
        assert_eq!(record.title(), "Being and Time");
        assert_eq!(record.contributor(), "trans. Macquarrie and Robinson");
    }

    #[test]
    fn header_mismatch_is_fatal_and_reports_both_texts() {
        let err = parse_catalog(Cursor::new("TITLE\tAUTHOR\nNausea\t...\n")).unwrap_err();
        match err {
            ShelfError::HeaderMismatch { expected, found } => {
                assert_eq!(expected, EXPECTED_HEADER);
                assert_eq!(found, "TITLE\tAUTHOR");
            }
            other => panic!("expected HeaderMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_a_header_mismatch() {
        let err = parse_catalog(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ShelfError::HeaderMismatch { .. }));
    }

    #[test]
    fn crlf_header_is_accepted() {
        let input = format!("{EXPECTED_HEADER}\r\nNausea\tJean-Paul Sartre\t\t\t\t\t\r\n");
        let catalog = parse_catalog(Cursor::new(input)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().author(), "Jean-Paul Sartre");
    }

    #[test]
    fn short_line_reports_its_line_number() {
        let input = with_header(
            "Nausea\tJean-Paul Sartre\t\t\t\t\t\n\
             The Stranger\tAlbert Camus\n",
        );
        let err = parse_catalog(Cursor::new(input)).unwrap_err();
        match err {
            ShelfError::MalformedRecord { line, fields } => {
                assert_eq!(line, 3);
                assert_eq!(fields, 2);
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn overlong_line_is_malformed_too() {
        let input = with_header("a\tb\tc\td\te\tf\tg\th\n");
        let err = parse_catalog(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            ShelfError::MalformedRecord { line: 2, fields: 8 }
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = with_header("Nausea\tJean-Paul Sartre\t\t\t\t\t\n\n");
        let catalog = parse_catalog(Cursor::new(input)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn header_only_input_yields_empty_catalog() {
        let catalog = parse_catalog(Cursor::new(format!("{EXPECTED_HEADER}\n"))).unwrap();
        assert!(catalog.is_empty());
    }
}
