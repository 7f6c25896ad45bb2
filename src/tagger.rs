//! Morphological lookup used to decide whether a phrase is a dictionary
//! base form.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// One analysis of a surface word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub surface: String,
    pub lemma: String,
    pub pos_tag: Option<String>,
}

impl Reading {
    pub fn new(surface: &str, lemma: &str, pos_tag: Option<&str>) -> Self {
        Self {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos_tag: pos_tag.map(str::to_string),
        }
    }

    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.lemma == lemma
    }
}

/// True if any reading carries exactly this lemma
pub fn has_lemma(readings: &[Reading], lemma: &str) -> bool {
    readings.iter().any(|r| r.has_lemma(lemma))
}

/// A morphological analyzer. Unknown words yield no readings, not an error;
/// errors are reserved for the analyzer itself being unusable.
pub trait Tagger: Send + Sync {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>> {
        (**self).tag(word)
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>> {
        (**self).tag(word)
    }
}

impl<T: Tagger + ?Sized> Tagger for Arc<T> {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>> {
        (**self).tag(word)
    }
}

/// Knows no words; every entry compiles to exact matching
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTagger;

impl Tagger for NoTagger {
    fn tag(&self, _word: &str) -> io::Result<Vec<Reading>> {
        Ok(Vec::new())
    }
}

/// In-memory surface -> readings table
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
    readings: HashMap<String, Vec<Reading>>,
}

impl LemmaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: &str, lemma: &str, pos_tag: Option<&str>) {
        self.readings
            .entry(surface.to_string())
            .or_default()
            .push(Reading::new(surface, lemma, pos_tag));
    }

    /// Builder form of `insert`
    pub fn with(mut self, surface: &str, lemma: &str) -> Self {
        self.insert(surface, lemma, None);
        self
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Parse `surface<TAB>lemma[<TAB>tag]` lines. `#` comments and blank
    /// lines are ignored.
    pub fn parse(content: &str) -> io::Result<Self> {
        let mut table = Self::new();
        for (idx, line) in content.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let surface = fields.next().unwrap_or("");
            let lemma = fields.next().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: expected surface<TAB>lemma, got {:?}", idx + 1, line),
                )
            })?;
            table.insert(surface, lemma, fields.next());
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        log::info!("Loaded lemma table {}: {} surface forms", path.display(), table.len());
        Ok(table)
    }
}

impl Tagger for LemmaTable {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>> {
        Ok(self.readings.get(word).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_table_lookup() {
        let table = LemmaTable::new().with("lopen", "lopen").with("liep", "lopen");
        let readings = table.tag("liep").unwrap();
        assert_eq!(readings.len(), 1);
        assert!(has_lemma(&readings, "lopen"));
        assert!(!has_lemma(&readings, "liep"));
        assert!(table.tag("onbekend").unwrap().is_empty());
    }

    #[test]
    fn test_lemma_table_keeps_all_readings() {
        let table = LemmaTable::new().with("zagen", "zien").with("zagen", "zagen");
        let readings = table.tag("zagen").unwrap();
        assert_eq!(readings.len(), 2);
        assert!(has_lemma(&readings, "zagen"));
    }

    #[test]
    fn test_lemma_table_parse() {
        let content = "# export\nadres\tadres\tZNW\n\nliep\tlopen\n";
        let table = LemmaTable::parse(content).unwrap();
        assert_eq!(table.len(), 2);
        let readings = table.tag("adres").unwrap();
        assert_eq!(readings[0].pos_tag.as_deref(), Some("ZNW"));
        assert_eq!(table.tag("liep").unwrap()[0].pos_tag, None);
    }

    #[test]
    fn test_lemma_table_parse_rejects_missing_lemma() {
        let err = LemmaTable::parse("adres\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_lemma_table_load_missing_file() {
        assert!(LemmaTable::load(Path::new("does/not/exist.tsv")).is_err());
    }

    #[test]
    fn test_no_tagger_knows_nothing() {
        assert!(NoTagger.tag("adres").unwrap().is_empty());
    }

    #[test]
    fn test_shared_tagger_delegates() {
        let shared: Arc<dyn Tagger> = Arc::new(LemmaTable::new().with("adres", "adres"));
        assert!(has_lemma(&shared.tag("adres").unwrap(), "adres"));
        let boxed: Box<dyn Tagger> = Box::new(NoTagger);
        assert!((&boxed).tag("adres").unwrap().is_empty());
    }
}
