use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

pub mod compiler;
pub mod config;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod resource;
pub mod ruleset;
pub mod tagger;

pub use crate::compiler::{CompiledRule, MatchMode, MatchUnit, RuleCompiler};
pub use crate::config::{BlankLinePolicy, LoaderConfig, UnitSplit};
pub use crate::dictionary::HunspellTagger;
pub use crate::entry::{MappingEntry, parse_entries};
pub use crate::error::{LoadError, LoadErrorKind, Result};
pub use crate::resource::{ResourceDir, open_resource};
pub use crate::ruleset::{RuleSet, SharedRuleSet, load_batch, load_batch_with};
pub use crate::tagger::{LemmaTable, NoTagger, Reading, Tagger};

// =============================================================================
// Python bindings
// =============================================================================

/// Compiled rule data returned to Python
#[pyclass]
#[derive(Clone)]
struct RuleInfo {
    #[pyo3(get)]
    id: String,
    #[pyo3(get)]
    description: String,
    #[pyo3(get)]
    message: String,
    #[pyo3(get)]
    short_message: String,
    #[pyo3(get)]
    old_form: String,
    #[pyo3(get)]
    suggestion: String,
    /// (surface_text, "exact" | "baseform")
    #[pyo3(get)]
    units: Vec<(String, String)>,
}

impl From<&CompiledRule> for RuleInfo {
    fn from(rule: &CompiledRule) -> Self {
        Self {
            id: rule.id.clone(),
            description: rule.description.clone(),
            message: rule.message.clone(),
            short_message: rule.short_message.clone(),
            old_form: rule.old_form.clone(),
            suggestion: rule.suggestion.clone(),
            units: rule
                .units
                .iter()
                .map(|u| (u.surface_text.clone(), u.match_mode.as_str().to_string()))
                .collect(),
        }
    }
}

fn to_py_err(e: LoadError) -> PyErr {
    match e.kind() {
        LoadErrorKind::Format => pyo3::exceptions::PyValueError::new_err(e.to_string()),
        _ => pyo3::exceptions::PyIOError::new_err(e.to_string()),
    }
}

fn rule_infos(rules: &RuleSet) -> Vec<RuleInfo> {
    rules.iter().map(RuleInfo::from).collect()
}

fn make_config(language: &str, skip_blank_lines: bool, collapse_spaces: bool) -> LoaderConfig {
    let mut config = LoaderConfig::for_language(language);
    if skip_blank_lines {
        config = config.with_blank_lines(BlankLinePolicy::Skip);
    }
    if collapse_spaces {
        config = config.with_unit_split(UnitSplit::Collapse);
    }
    config
}

/// Default dictionary name for a language, e.g. `nl_NL`
fn hunspell_name(language: &str) -> String {
    format!("{}_{}", language, language.to_uppercase())
}

/// Lemma table wins over a Hunspell dictionary; with neither, every entry
/// compiles to exact matching.
fn build_tagger(
    language: &str,
    lemma_file: Option<&str>,
    dict_dir: Option<&str>,
    dict_name: Option<&str>,
) -> PyResult<Box<dyn Tagger>> {
    let io_err = |e: std::io::Error| pyo3::exceptions::PyIOError::new_err(e.to_string());

    if let Some(path) = lemma_file {
        return Ok(Box::new(LemmaTable::load(Path::new(path)).map_err(io_err)?));
    }
    if let Some(dir) = dict_dir {
        let name = match dict_name {
            Some(n) => n.to_string(),
            None => hunspell_name(language),
        };
        return Ok(Box::new(HunspellTagger::load(Path::new(dir), &name).map_err(io_err)?));
    }
    Ok(Box::new(NoTagger))
}

/// Compile mapping lines into rules
#[pyfunction]
#[pyo3(signature = (lines, rule_description, language="nl", lemma_file=None, dict_dir=None, dict_name=None, skip_blank_lines=false, collapse_spaces=false))]
#[allow(clippy::too_many_arguments)]
fn compile_preferred_words(
    lines: Vec<String>,
    rule_description: String,
    language: &str,
    lemma_file: Option<String>,
    dict_dir: Option<String>,
    dict_name: Option<String>,
    skip_blank_lines: bool,
    collapse_spaces: bool,
) -> PyResult<Vec<RuleInfo>> {
    let tagger = build_tagger(language, lemma_file.as_deref(), dict_dir.as_deref(), dict_name.as_deref())?;
    let config = make_config(language, skip_blank_lines, collapse_spaces);
    let rules = RuleSet::from_lines(&lines, "<lines>", &tagger, &rule_description, &config).map_err(to_py_err)?;
    Ok(rule_infos(&rules))
}

/// Compile a mapping file, read entirely in Rust
#[pyfunction]
#[pyo3(signature = (file_path, rule_description, language="nl", lemma_file=None, dict_dir=None, dict_name=None, skip_blank_lines=false, collapse_spaces=false))]
#[allow(clippy::too_many_arguments)]
fn compile_preferred_words_file(
    file_path: String,
    rule_description: String,
    language: &str,
    lemma_file: Option<String>,
    dict_dir: Option<String>,
    dict_name: Option<String>,
    skip_blank_lines: bool,
    collapse_spaces: bool,
) -> PyResult<Vec<RuleInfo>> {
    let tagger = build_tagger(language, lemma_file.as_deref(), dict_dir.as_deref(), dict_name.as_deref())?;
    let config = make_config(language, skip_blank_lines, collapse_spaces);
    let reader = open_resource(Path::new(&file_path)).map_err(to_py_err)?;
    let rules = RuleSet::from_reader(reader, &file_path, &tagger, &rule_description, &config).map_err(to_py_err)?;
    Ok(rule_infos(&rules))
}

/// Batch compile `<root>/<lang>/preferredwords.csv` for several languages.
/// A lemma table is shared by all languages; with `dict_dir`, each language
/// loads its own `<lang>_<LANG>` Hunspell dictionary from that directory.
/// Returns: (HashMap<lang, rules>, HashMap<lang, error message>)
#[pyfunction]
#[pyo3(signature = (root, languages, rule_description, lemma_file=None, dict_dir=None))]
fn compile_preferred_words_batch(
    root: String,
    languages: Vec<String>,
    rule_description: String,
    lemma_file: Option<String>,
    dict_dir: Option<String>,
) -> PyResult<(HashMap<String, Vec<RuleInfo>>, HashMap<String, String>)> {
    let resources = ResourceDir::new(root);
    let langs: Vec<&str> = languages.iter().map(String::as_str).collect();

    let results = match (lemma_file.as_deref(), dict_dir.as_deref()) {
        (None, Some(dir)) => load_batch_with(&resources, &langs, &rule_description, |lang| {
            HunspellTagger::load(Path::new(dir), &hunspell_name(lang))
        }),
        (lemma_file, _) => {
            let tagger = build_tagger("", lemma_file, None, None)?;
            load_batch(&resources, &langs, &tagger, &rule_description)
        }
    };

    let mut loaded = HashMap::new();
    let mut failed = HashMap::new();
    for (lang, result) in results {
        match result {
            Ok(rules) => {
                loaded.insert(lang, rule_infos(&rules));
            }
            Err(e) => {
                failed.insert(lang, e.to_string());
            }
        }
    }
    Ok((loaded, failed))
}

#[pymodule]
fn rust_preferred_words(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compile_preferred_words, m)?)?;
    m.add_function(wrap_pyfunction!(compile_preferred_words_file, m)?)?;
    m.add_function(wrap_pyfunction!(compile_preferred_words_batch, m)?)?;
    m.add_class::<RuleInfo>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_info_from_compiled_rule() {
        let tagger = LemmaTable::new().with("adres", "adres");
        let rules = RuleSet::from_lines(
            ["adres;adress", "te huur;verhuur"],
            "test.csv",
            &tagger,
            "Preferred words",
            &LoaderConfig::default(),
        )
        .unwrap();
        let infos = rule_infos(&rules);
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].id, "NL_PREFERRED_WORD_RULE_INTERNAL");
        assert_eq!(infos[0].units, vec![("adres".to_string(), "baseform".to_string())]);
        assert_eq!(infos[1].old_form, "te huur");
        assert_eq!(infos[1].units[1], ("huur".to_string(), "exact".to_string()));
    }

    #[test]
    fn test_hunspell_name() {
        assert_eq!(hunspell_name("nl"), "nl_NL");
        assert_eq!(hunspell_name("de"), "de_DE");
    }

    #[test]
    fn test_make_config_flags() {
        let config = make_config("de", true, true);
        assert_eq!(config.rule_id, "DE_PREFERRED_WORD_RULE_INTERNAL");
        assert_eq!(config.blank_lines, BlankLinePolicy::Skip);
        assert_eq!(config.units, UnitSplit::Collapse);
        assert_eq!(make_config("nl", false, false), LoaderConfig::default());
    }
}
