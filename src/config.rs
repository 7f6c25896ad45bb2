//! Loader settings: rule metadata and the line/field conventions of the
//! mapping file.

pub const DEFAULT_LANGUAGE: &str = "nl";
pub const DEFAULT_RULE_ID: &str = "NL_PREFERRED_WORD_RULE_INTERNAL";
pub const DEFAULT_MESSAGE: &str = "For this word exists a preferred alternative.";
pub const DEFAULT_SHORT_MESSAGE: &str = "Better word suggestion";

/// What to do with a zero-length line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Blank lines are malformed entries
    #[default]
    Reject,
    Skip,
}

/// How an old-form phrase is cut into surface units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSplit {
    /// Split on every single space; "a  b" yields an empty middle unit
    #[default]
    SingleSpace,
    /// Split on runs of spaces; never yields empty units
    Collapse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub language: String,
    pub rule_id: String,
    pub message: String,
    pub short_message: String,
    pub comment_marker: char,
    pub separator: char,
    pub blank_lines: BlankLinePolicy,
    pub units: UnitSplit,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            rule_id: DEFAULT_RULE_ID.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            short_message: DEFAULT_SHORT_MESSAGE.to_string(),
            comment_marker: '#',
            separator: ';',
            blank_lines: BlankLinePolicy::default(),
            units: UnitSplit::default(),
        }
    }
}

impl LoaderConfig {
    /// Defaults for another language; the rule id follows the language code
    pub fn for_language(code: &str) -> Self {
        Self {
            language: code.to_string(),
            rule_id: format!("{}_PREFERRED_WORD_RULE_INTERNAL", code.to_uppercase()),
            ..Self::default()
        }
    }

    pub fn with_messages(mut self, message: &str, short_message: &str) -> Self {
        self.message = message.to_string();
        self.short_message = short_message.to_string();
        self
    }

    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    pub fn with_unit_split(mut self, split: UnitSplit) -> Self {
        self.units = split;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dutch_resource() {
        let config = LoaderConfig::default();
        assert_eq!(config.language, "nl");
        assert_eq!(config.rule_id, "NL_PREFERRED_WORD_RULE_INTERNAL");
        assert_eq!(config.separator, ';');
        assert_eq!(config.comment_marker, '#');
        assert_eq!(config.blank_lines, BlankLinePolicy::Reject);
        assert_eq!(config.units, UnitSplit::SingleSpace);
    }

    #[test]
    fn test_for_language_derives_rule_id() {
        let config = LoaderConfig::for_language("de");
        assert_eq!(config.language, "de");
        assert_eq!(config.rule_id, "DE_PREFERRED_WORD_RULE_INTERNAL");
        assert_eq!(config.message, DEFAULT_MESSAGE);
    }
}
