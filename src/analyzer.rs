//! Initialisation façade (C9): once-only load, thread-safe shared instance,
//! and the public convenience surface.

use std::path::Path;
use std::sync::OnceLock;

use crate::dictionary::{self, DictionarySource, DirectorySource};
use crate::errors::{Error, LoadError};
use crate::morph::MorphEngine;
use crate::phrase;
use crate::Language;

/// `Result` specialised to dictionary-load failures, mirroring the teacher's
/// `MopsResult<T, MopsErr>` alias convention.
pub type AnalyzerResult<T> = Result<T, LoadError>;

/// The loaded, immutable analyzer. Every method is safe for unsynchronised
/// concurrent use once constructed, since all state is read-only.
pub struct MorphAnalyzer {
    engine: MorphEngine,
    language: Language,
}

impl MorphAnalyzer {
    fn from_source(source: &dyn DictionarySource, language: Language) -> AnalyzerResult<Self> {
        let engine = dictionary::load(source, language)?;
        Ok(Self { engine, language })
    }

    /// Loads a fresh analyzer from the five dictionary files in `dir`,
    /// cross-checked against `language` (teacher-style `Language` parameter
    /// to dictionary loading; Russian-only for now).
    pub fn open<P: AsRef<Path>>(dir: P, language: Language) -> AnalyzerResult<Self> {
        let source = DirectorySource::new(dir);
        Self::from_source(&source, language)
    }

    /// The language this analyzer was loaded for.
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn word_forms(&self, word: &str) -> Vec<String> {
        self.engine.word_forms(word)
    }

    pub fn tag(&self, word: &str) -> String {
        self.engine.tag(word)
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.engine.is_known(word)
    }

    pub fn inflect(&self, word: &str, case: &str, number: &str, gender: &str, animacy: &str) -> String {
        self.engine.inflect(word, case, number, gender, animacy)
    }

    pub fn phrase_forms_concordant(&self, phrase_text: &str) -> Vec<String> {
        phrase::phrase_forms_concordant(&self.engine, phrase_text)
    }
}

static DEFAULT_DICT_DIR: &str = "data/dict";
static SHARED: OnceLock<Result<MorphAnalyzer, LoadError>> = OnceLock::new();

/// Returns the process-wide shared analyzer, loading it from
/// [`DEFAULT_DICT_DIR`] on first call. The load is idempotent under
/// concurrent first callers: exactly one load runs, and every caller
/// (concurrent or not) observes its outcome.
pub fn shared() -> Result<&'static MorphAnalyzer, Error> {
    match SHARED.get_or_init(|| MorphAnalyzer::open(DEFAULT_DICT_DIR, Language::default())) {
        Ok(analyzer) => Ok(analyzer),
        Err(err) => Err(Error::Load(err.clone())),
    }
}
