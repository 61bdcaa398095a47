//! Parser for catalog files.
//!
//! Format: `movieId::title::genres`, one movie per line. The genre column is
//! free text and kept verbatim ("Animation|Children's|Comedy").
//!
//! Lines are parsed in parallel with rayon, then checked in file order so the
//! error reported for a bad file is always its first malformed line.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Number of columns in a catalog line
const CATALOG_FIELDS: usize = 3;

/// Read a whole file and decode it with the given encoding
pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    decode(bytes, encoding)
}

/// Decode raw bytes into a UTF-8 string
///
/// ISO-8859-1 is a single-byte encoding where each byte maps directly to the
/// Unicode code point of the same value, so decoding cannot fail.
pub fn decode(bytes: Vec<u8>, encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| DataLoadError::InvalidValue {
            field: "utf-8 text".to_string(),
            value: e.utf8_error().to_string(),
        }),
    }
}

/// Parse catalog text into records, in line order
///
/// `file` only labels error messages.
pub fn parse_catalog(content: &str, delimiter: &str, file: &str) -> Result<Vec<CatalogRecord>> {
    if delimiter.is_empty() {
        return Err(DataLoadError::InvalidValue {
            field: "delimiter".to_string(),
            value: String::new(),
        });
    }

    let lines: Vec<&str> = content.lines().collect();
    let parsed: Vec<Result<Option<CatalogRecord>>> = lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1, delimiter, file))
        .collect();

    let mut records = Vec::with_capacity(parsed.len());
    for result in parsed {
        if let Some(record) = result? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse a single line; `Ok(None)` for blank lines
fn parse_line(
    line: &str,
    line_no: usize,
    delimiter: &str,
    file: &str,
) -> Result<Option<CatalogRecord>> {
    let line_trimmed = line.trim();
    if line_trimmed.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line_trimmed.split(delimiter).collect();
    if parts.len() > CATALOG_FIELDS {
        return Err(DataLoadError::FieldCountMismatch {
            expected: CATALOG_FIELDS,
            found: parts.len(),
            line: line_no,
        });
    }

    let parse_error = |reason: String| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    let movie_id = parts[0];
    let title = parts
        .get(1)
        .ok_or_else(|| parse_error("Missing title".to_string()))?;
    let genres = parts.get(2).copied();

    let id: MovieId = movie_id
        .trim()
        .parse()
        .map_err(|e| parse_error(format!("Invalid movieId '{}': {}", movie_id, e)))?;

    Ok(Some(CatalogRecord::new(id, *title, genres)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movielens_lines() {
        let content = "1::Toy Story (1995)::Animation|Children's|Comedy\n\
                       2::Jumanji (1995)::Adventure|Children's|Fantasy\n";
        let records = parse_catalog(content, "::", "movies.dat").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].title, "Toy Story (1995)");
        assert_eq!(
            records[0].genres.as_deref(),
            Some("Animation|Children's|Comedy")
        );
        assert_eq!(records[1].id, 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "\n1::A::Drama\n   \n2::B::Comedy\n";
        let records = parse_catalog(content, "::", "movies.dat").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_genres_is_none() {
        let content = "1::No Genres\n2::Empty Genres::\n";
        let records = parse_catalog(content, "::", "movies.dat").unwrap();

        assert_eq!(records[0].genres, None);
        assert_eq!(records[1].genres, None);
    }

    #[test]
    fn test_missing_title_aborts() {
        let err = parse_catalog("1::A::Drama\n2\n", "::", "movies.dat").unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("title"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_id_reports_first_bad_line() {
        let content = "1::A::Drama\nx::B::Drama\ny::C::Drama\n";
        let err = parse_catalog(content, "::", "movies.dat").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse_catalog("1::A::Drama::extra\n", "::", "movies.dat").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 3, found: 4, line: 1 }
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let records = parse_catalog("7,Heat (1995),Action|Crime\n", ",", "movies.csv").unwrap();
        assert_eq!(records[0].id, 7);
        assert_eq!(records[0].genres.as_deref(), Some("Action|Crime"));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert!(matches!(
            parse_catalog("1::A::B", "", "movies.dat"),
            Err(DataLoadError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_decode_latin1() {
        // "Café" with 0xE9 for é
        let text = decode(vec![0x43, 0x61, 0x66, 0xE9], Encoding::Latin1).unwrap();
        assert_eq!(text, "Café");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(decode(vec![0xE9], Encoding::Utf8).is_err());
    }
}
