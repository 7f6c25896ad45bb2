//! Loading a complete rule set. A load either produces every rule of the
//! source, in source order, or fails without a rule set.

use std::io::{self, BufRead};
use std::sync::{Arc, PoisonError, RwLock};

use rayon::prelude::*;

use crate::compiler::{CompiledRule, RuleCompiler};
use crate::config::LoaderConfig;
use crate::entry::parse_entries;
use crate::error::{LoadError, Result};
use crate::resource::{ResourceDir, open_resource};
use crate::tagger::Tagger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    language: String,
    source_name: String,
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Parse and compile mapping lines
    pub fn from_lines<I, S, T>(
        lines: I,
        source_name: &str,
        tagger: &T,
        description: &str,
        config: &LoaderConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: Tagger + ?Sized,
    {
        let entries = parse_entries(lines, source_name, config)?;
        let compiler = RuleCompiler::new(tagger, description, source_name, config);
        let rules = entries
            .iter()
            .map(|entry| compiler.compile(entry))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Loaded {} preferred-word rules ({}) from {}",
            rules.len(),
            config.language,
            source_name
        );
        Ok(Self {
            language: config.language.clone(),
            source_name: source_name.to_string(),
            rules,
        })
    }

    /// Read the whole stream, then compile it
    pub fn from_reader<R, T>(
        reader: R,
        source_name: &str,
        tagger: &T,
        description: &str,
        config: &LoaderConfig,
    ) -> Result<Self>
    where
        R: BufRead,
        T: Tagger + ?Sized,
    {
        let lines = reader
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|source| LoadError::Read {
                source_name: source_name.to_string(),
                source,
            })?;
        Self::from_lines(lines, source_name, tagger, description, config)
    }

    /// Load `<root>/<config.language>/preferredwords.csv`
    pub fn load<T: Tagger + ?Sized>(
        resources: &ResourceDir,
        tagger: &T,
        description: &str,
        config: &LoaderConfig,
    ) -> Result<Self> {
        let path = resources.preferred_words_path(&config.language);
        let reader = open_resource(&path)?;
        Self::from_reader(reader, &path.display().to_string(), tagger, description, config)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&CompiledRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Load several languages in parallel. One result per language, in the
/// order given; a failing language does not affect the others.
pub fn load_batch<T: Tagger + ?Sized>(
    resources: &ResourceDir,
    languages: &[&str],
    tagger: &T,
    description: &str,
) -> Vec<(String, Result<RuleSet>)> {
    languages
        .par_iter()
        .map(|lang| {
            let config = LoaderConfig::for_language(lang);
            (lang.to_string(), RuleSet::load(resources, tagger, description, &config))
        })
        .collect()
}

/// Like `load_batch`, but each language gets its own analyzer from
/// `make_tagger`. A language whose analyzer cannot be built fails alone.
pub fn load_batch_with<F, T>(
    resources: &ResourceDir,
    languages: &[&str],
    description: &str,
    make_tagger: F,
) -> Vec<(String, Result<RuleSet>)>
where
    F: Fn(&str) -> io::Result<T> + Sync,
    T: Tagger,
{
    languages
        .par_iter()
        .map(|lang| {
            let config = LoaderConfig::for_language(lang);
            let result = make_tagger(*lang)
                .map_err(|source| LoadError::TaggerUnavailable {
                    language: lang.to_string(),
                    source,
                })
                .and_then(|tagger| RuleSet::load(resources, &tagger, description, &config));
            (lang.to_string(), result)
        })
        .collect()
}

/// A rule set that can be replaced wholesale while readers hold the old one
pub struct SharedRuleSet {
    current: RwLock<Arc<RuleSet>>,
}

impl SharedRuleSet {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
        }
    }

    pub fn current(&self) -> Arc<RuleSet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Build a replacement and swap it in. On error the current set stays.
    pub fn reload<F>(&self, build: F) -> Result<Arc<RuleSet>>
    where
        F: FnOnce() -> Result<RuleSet>,
    {
        let fresh = Arc::new(build()?);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&fresh);
        Ok(fresh)
    }
}
