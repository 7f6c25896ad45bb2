//! Hunspell-backed morphological lookup.
//!
//! Loads a `<name>.aff` / `<name>.dic` pair with zspell. A word's readings
//! are its stems, so a word listed as a root in the `.dic` file is its own
//! lemma while affixed forms point back at the root.

use std::fs;
use std::io;
use std::path::Path;
use zspell::Dictionary;

use crate::tagger::{Reading, Tagger};

pub struct HunspellTagger {
    name: String,
    dict: Dictionary,
}

impl HunspellTagger {
    /// Load `<name>.aff` and `<name>.dic` from the given directory
    pub fn load(dict_dir: &Path, name: &str) -> io::Result<Self> {
        let aff_path = dict_dir.join(format!("{}.aff", name));
        let dic_path = dict_dir.join(format!("{}.dic", name));

        let aff_content = fs::read_to_string(&aff_path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read {}: {}", aff_path.display(), e))
        })?;
        let dic_content = fs::read_to_string(&dic_path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read {}: {}", dic_path.display(), e))
        })?;

        let tagger = Self::from_strs(name, &aff_content, &dic_content)?;
        log::info!("Loaded dictionary: {}", tagger.name());
        Ok(tagger)
    }

    /// Build from in-memory affix and dictionary sources
    pub fn from_strs(name: &str, aff_content: &str, dic_content: &str) -> io::Result<Self> {
        let dict = zspell::builder()
            .config_str(aff_content)
            .dict_str(dic_content)
            .build()
            .map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Failed to build dictionary {}: {}", name, e),
                )
            })?;
        Ok(Self {
            name: name.to_string(),
            dict,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the word is accepted by the dictionary at all
    pub fn check(&self, word: &str) -> bool {
        self.dict.check_word(word)
    }
}

impl Tagger for HunspellTagger {
    fn tag(&self, word: &str) -> io::Result<Vec<Reading>> {
        let entry = self.dict.entry(word);
        let readings = match entry.stems() {
            Some(stems) => stems
                .into_iter()
                .map(|stem| Reading::new(word, &stem, None))
                .collect(),
            None => Vec::new(),
        };
        Ok(readings)
    }
}
