//! Mapping file parsing: `OLDFORM;NEWFORM` lines, `#` comments.

use crate::config::{BlankLinePolicy, LoaderConfig};
use crate::error::{LoadError, Result};

/// One old-form to new-form pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub old_form: String,
    pub new_form: String,
    /// 1-based line number in the source
    pub line: usize,
}

/// Parse every line into entries, failing on the first malformed one.
///
/// Fields are kept verbatim; surrounding whitespace is part of the field.
pub fn parse_entries<I, S>(lines: I, source_name: &str, config: &LoaderConfig) -> Result<Vec<MappingEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(entry) = parse_line(line.as_ref(), idx + 1, source_name, config)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parse a single line. `Ok(None)` for lines that carry no entry.
pub fn parse_line(
    line: &str,
    line_no: usize,
    source_name: &str,
    config: &LoaderConfig,
) -> Result<Option<MappingEntry>> {
    if line.starts_with(config.comment_marker) {
        return Ok(None);
    }
    if line.is_empty() && config.blank_lines == BlankLinePolicy::Skip {
        return Ok(None);
    }

    let mut fields: Vec<&str> = line.split(config.separator).collect();
    // Trailing empty fields are dropped: "a;b;" has two, "a;;" has one
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() != 2 || fields.iter().any(|f| f.is_empty()) {
        return Err(LoadError::Format {
            source_name: source_name.to_string(),
            line: line_no,
            content: line.to_string(),
            found_fields: fields.len(),
        });
    }

    Ok(Some(MappingEntry {
        old_form: fields[0].to_string(),
        new_form: fields[1].to_string(),
        line: line_no,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadErrorKind;

    fn parse(lines: &[&str]) -> Result<Vec<MappingEntry>> {
        parse_entries(lines.iter(), "test.csv", &LoaderConfig::default())
    }

    #[test]
    fn test_skips_comments_and_keeps_order() {
        let entries = parse(&["# comment", "adres;adress", "#;x", "te huur;verhuur"]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].old_form, "adres");
        assert_eq!(entries[0].new_form, "adress");
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].old_form, "te huur");
        assert_eq!(entries[1].new_form, "verhuur");
        assert_eq!(entries[1].line, 4);
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let err = parse(&["adres;adress", "badword"]).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Format);
        match err {
            LoadError::Format { line, content, found_fields, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "badword");
                assert_eq!(found_fields, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_three_fields_is_format_error() {
        let err = parse(&["a;b;c"]).unwrap_err();
        assert!(matches!(err, LoadError::Format { found_fields: 3, .. }));
    }

    #[test]
    fn test_trailing_separators_are_ignored() {
        let entries = parse(&["adres;adress;", "a;b;;"]).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].old_form, "adres");
        assert_eq!(entries[0].new_form, "adress");
        assert_eq!(entries[1].old_form, "a");
        assert_eq!(entries[1].new_form, "b");
    }

    #[test]
    fn test_trailing_separators_do_not_fill_missing_field() {
        let err = parse(&["a;;"]).unwrap_err();
        assert!(matches!(err, LoadError::Format { found_fields: 1, .. }));
        assert!(parse(&["a;;b"]).is_err());
    }

    #[test]
    fn test_empty_field_is_format_error() {
        assert!(parse(&[";b"]).is_err());
        assert!(parse(&["a;"]).is_err());
    }

    #[test]
    fn test_blank_line_rejected_by_default() {
        let err = parse(&["a;b", ""]).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: 2, found_fields: 1, .. }));
    }

    #[test]
    fn test_blank_line_skipped_when_configured() {
        let config = LoaderConfig::default().with_blank_lines(BlankLinePolicy::Skip);
        let entries = parse_entries(["a;b", "", "c;d"], "test.csv", &config).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].line, 3);
    }

    #[test]
    fn test_whitespace_only_line_is_not_blank() {
        let config = LoaderConfig::default().with_blank_lines(BlankLinePolicy::Skip);
        assert!(parse_entries(["  "], "test.csv", &config).is_err());
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let entries = parse(&[" adres ; adress"]).unwrap();
        assert_eq!(entries[0].old_form, " adres ");
        assert_eq!(entries[0].new_form, " adress");
    }

    #[test]
    fn test_custom_separator() {
        let config = LoaderConfig::default().with_separator('\t');
        let entries = parse_entries(["oud\tnieuw"], "test.tsv", &config).unwrap();
        assert_eq!(entries[0].old_form, "oud");
        assert_eq!(entries[0].new_form, "nieuw");
    }
}
