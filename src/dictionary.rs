//! Loads the five embedded files into the C1–C6 tables.
//!
//! This is the "dictionary construction" consumer, not the OpenCorpora→DAWG
//! compiler — the compiler that produces `words.dawg`/`paradigms.array`/etc.
//! from source OpenCorpora XML stays out of scope; the files are consumed
//! as-is.

use std::path::{Path, PathBuf};

use crate::dawg::{Dawg, Guide};
use crate::errors::LoadError;
use crate::morph::MorphEngine;
use crate::paradigm::{ParadigmStore, StringTable, PARADIGM_PREFIXES};
use crate::words::WordsIndex;
use crate::Language;

const WORDS_FILE: &str = "words.dawg";
const PARADIGMS_FILE: &str = "paradigms.array";
const SUFFIXES_FILE: &str = "suffixes.json";
const GRAMTAB_FILE: &str = "gramtab-opencorpora-int.json";
const META_FILE: &str = "meta.json";

/// The external collaborator this core defers to: something that can hand
/// back the raw bytes of each of the five embedded files by name.
pub trait DictionarySource {
    fn read(&self, name: &str) -> Result<Vec<u8>, LoadError>;
}

/// Reads the five files from a plain directory on disk.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl DictionarySource for DirectorySource {
    fn read(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|error| LoadError::file(path, error))
    }
}

#[derive(serde::Deserialize)]
struct Meta {
    #[serde(default)]
    paradigm_prefixes: Option<Vec<String>>,
    #[serde(default)]
    language: Option<Language>,
}

/// Loads every table from `source` and assembles a ready-to-use [`MorphEngine`].
///
/// `language` is the dictionary language the caller expects to load (the
/// teacher's `Dictionary::init`/`MorphAnalyzer::create` take the same
/// parameter); it is cross-checked against `meta.json`'s own `language`
/// field when the field is present, and otherwise trusted as-is since
/// Russian is the only language this core supports.
pub fn load(source: &dyn DictionarySource, language: Language) -> Result<MorphEngine, LoadError> {
    tracing::debug!(%language, "loading dictionary tables");

    let words_bytes = source.read(WORDS_FILE)?;
    let (dawg, rest) = Dawg::from_le_bytes(&words_bytes)?;
    let (guide, _) = Guide::from_le_bytes(rest)?;
    let words = WordsIndex::new(dawg, guide);

    let paradigms_bytes = source.read(PARADIGMS_FILE)?;
    let (paradigms, _) = ParadigmStore::from_le_bytes(&paradigms_bytes)?;

    let suffixes = StringTable::from_json(&source.read(SUFFIXES_FILE)?)?;
    let gramtab = StringTable::from_json(&source.read(GRAMTAB_FILE)?)?;

    let meta_bytes = source.read(META_FILE)?;
    let meta: Meta = serde_json::from_slice(&meta_bytes).map_err(LoadError::json)?;
    if let Some(prefixes) = meta.paradigm_prefixes {
        let expected: Vec<&str> = PARADIGM_PREFIXES.to_vec();
        if prefixes != expected {
            return Err(LoadError::Malformed {
                what: "meta.json paradigm_prefixes does not match PARADIGM_PREFIXES",
            });
        }
    }
    if let Some(declared) = meta.language {
        if declared != language {
            return Err(LoadError::Malformed {
                what: "meta.json language does not match the requested language",
            });
        }
    }

    tracing::debug!(
        paradigms = paradigms.len(),
        suffixes = suffixes.len(),
        gramtab = gramtab.len(),
        "dictionary tables loaded"
    );

    Ok(MorphEngine::new(words, paradigms, suffixes, gramtab))
}
