//! DAWG-backed dictionary morphological analyzer for Russian.
//!
//! Given a surface word, enumerate every inflected form of its lexeme,
//! report its primary OpenCorpora tag, or decline a short phrase while
//! keeping adjective–noun agreement and prepositions intact.

pub(crate) mod analyzer;
pub mod dawg;
/// Dictionary loading: the five embedded tables, read through [`dictionary::DictionarySource`].
pub mod dictionary;
pub mod errors;
/// Grammatical structures and the word → forms / word → tag engine.
pub mod morph;
pub mod paradigm;
/// Phrase declension and adjective agreement.
pub mod phrase;
pub(crate) mod words;

use serde::{Deserialize, Serialize};

pub use analyzer::{shared, AnalyzerResult, MorphAnalyzer};
pub use errors::Error;
pub use morph::{Animacy, Case, Gender, Number};

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Clone, Copy, Default, clap::ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
/// Dictionary language, checked against `meta.json` and threaded through
/// [`MorphAnalyzer::open`] and the CLI's `--language` flag. Russian-only for
/// now, mirroring the teacher's `Language` parameter to dictionary loading.
pub enum Language {
    #[default]
    Russian,
}
