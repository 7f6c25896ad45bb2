//! Turns mapping entries into token rules.
//!
//! An entry is classified once, as a whole: if the complete old form is a
//! lemma of itself, every unit matches inflected forms; otherwise every unit
//! must match its surface text exactly. Multi-word phrases are rarely
//! lemmas, so phrases end up matching exactly.

use crate::config::{LoaderConfig, UnitSplit};
use crate::entry::MappingEntry;
use crate::error::{LoadError, Result};
use crate::tagger::{Tagger, has_lemma};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-sensitive equality with the observed token
    Exact,
    /// Observed token's lemma equals the unit text
    BaseForm,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::BaseForm => "baseform",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchUnit {
    pub surface_text: String,
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    pub id: String,
    pub description: String,
    pub message: String,
    pub short_message: String,
    /// Left-to-right word order of `old_form`
    pub units: Vec<MatchUnit>,
    pub old_form: String,
    pub suggestion: String,
}

impl CompiledRule {
    pub fn matches_inflections(&self) -> bool {
        self.units.iter().all(|u| u.match_mode == MatchMode::BaseForm)
    }
}

/// Split an old form into surface units
pub fn split_units(old_form: &str, split: UnitSplit) -> Vec<&str> {
    match split {
        UnitSplit::SingleSpace => {
            // leading and inner empties stay, trailing ones are dropped
            let mut units: Vec<&str> = old_form.split(' ').collect();
            while units.last().is_some_and(|u| u.is_empty()) {
                units.pop();
            }
            units
        }
        UnitSplit::Collapse => old_form.split(' ').filter(|u| !u.is_empty()).collect(),
    }
}

/// Is the whole term one of its own lemmas?
pub fn is_base_form<T: Tagger + ?Sized>(tagger: &T, term: &str) -> Result<bool> {
    let readings = tagger.tag(term).map_err(|source| LoadError::Lookup {
        word: term.to_string(),
        source,
    })?;
    Ok(has_lemma(&readings, term))
}

pub struct RuleCompiler<'a, T: Tagger + ?Sized> {
    tagger: &'a T,
    description: &'a str,
    source_name: &'a str,
    config: &'a LoaderConfig,
}

impl<'a, T: Tagger + ?Sized> RuleCompiler<'a, T> {
    pub fn new(tagger: &'a T, description: &'a str, source_name: &'a str, config: &'a LoaderConfig) -> Self {
        Self {
            tagger,
            description,
            source_name,
            config,
        }
    }

    /// Compile one entry. Issues exactly one tagger lookup.
    pub fn compile(&self, entry: &MappingEntry) -> Result<CompiledRule> {
        let parts = split_units(&entry.old_form, self.config.units);
        if parts.is_empty() {
            return Err(LoadError::EmptyPhrase {
                source_name: self.source_name.to_string(),
                line: entry.line,
                old_form: entry.old_form.clone(),
            });
        }

        let match_mode = if is_base_form(self.tagger, &entry.old_form)? {
            MatchMode::BaseForm
        } else {
            MatchMode::Exact
        };
        log::debug!(
            "{}:{}: {:?} -> {:?} ({} units, {})",
            self.source_name,
            entry.line,
            entry.old_form,
            entry.new_form,
            parts.len(),
            match_mode.as_str()
        );

        let units = parts
            .into_iter()
            .map(|part| MatchUnit {
                surface_text: part.to_string(),
                match_mode,
            })
            .collect();

        Ok(CompiledRule {
            id: self.config.rule_id.clone(),
            description: self.description.to_string(),
            message: self.config.message.clone(),
            short_message: self.config.short_message.clone(),
            units,
            old_form: entry.old_form.clone(),
            suggestion: entry.new_form.clone(),
        })
    }
}
