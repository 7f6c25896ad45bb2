//! Load failures.
//!
//! Every failure is fatal to the load that raised it: callers get a single
//! `Err` and no partially built rule set.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Coarse classification of a failed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Format,
    Lookup,
    ResourceUnavailable,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unexpected format in {source_name} at line {line}: {content:?} ({found_fields} fields)")]
    Format {
        source_name: String,
        line: usize,
        content: String,
        found_fields: usize,
    },

    #[error("No words in {old_form:?} at {source_name} line {line}")]
    EmptyPhrase {
        source_name: String,
        line: usize,
        old_form: String,
    },

    #[error("Morphological analyzer for {language:?} unavailable: {source}")]
    TaggerUnavailable {
        language: String,
        #[source]
        source: io::Error,
    },

    #[error("Morphological lookup failed for {word:?}: {source}")]
    Lookup {
        word: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Format { .. } | LoadError::EmptyPhrase { .. } => LoadErrorKind::Format,
            LoadError::Lookup { .. } | LoadError::TaggerUnavailable { .. } => LoadErrorKind::Lookup,
            LoadError::ResourceUnavailable { .. } | LoadError::Read { .. } => {
                LoadErrorKind::ResourceUnavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_read_failures_with_unavailable_resources() {
        let err = LoadError::Read {
            source_name: "nl/preferredwords.csv".to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(err.kind(), LoadErrorKind::ResourceUnavailable);
    }

    #[test]
    fn test_format_message_names_line() {
        let err = LoadError::Format {
            source_name: "preferredwords.csv".to_string(),
            line: 3,
            content: "a;b;c".to_string(),
            found_fields: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"a;b;c\""));
        assert_eq!(err.kind(), LoadErrorKind::Format);
    }
}
