//! Locating mapping files under a data directory laid out as
//! `<root>/<lang>/preferredwords.csv`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, Result};

pub const PREFERRED_WORDS_FILE: &str = "preferredwords.csv";

#[derive(Debug, Clone)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the mapping file for a language
    pub fn preferred_words_path(&self, language: &str) -> PathBuf {
        self.root.join(language).join(PREFERRED_WORDS_FILE)
    }
}

pub fn open_resource(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
