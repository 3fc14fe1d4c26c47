//! Morphology engine (C7): word → forms, word → tag, targeted inflection,
//! and the tag-string predicates everything above is built on.
//!
//! The closed six-case/two-number/three-gender/two-animacy grammeme set
//! below mirrors the teacher's `morph::grammemes` module but is sized to
//! what this analyzer actually needs as typed `inflect` parameters, rather
//! than the teacher's full OpenCorpora grammeme universe.

use serde::{Deserialize, Serialize};

use crate::paradigm::{ParadigmStore, StringTable, PARADIGM_PREFIXES};
use crate::words::WordsIndex;

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Case {
    #[serde(rename = "nomn")]
    Nominativus,
    #[serde(rename = "gent")]
    Genetivus,
    #[serde(rename = "datv")]
    Dativus,
    #[serde(rename = "accs")]
    Accusativus,
    #[serde(rename = "ablt")]
    Ablativus,
    #[serde(rename = "loct")]
    Locativus,
}

impl Case {
    pub fn as_tag_token(self) -> &'static str {
        match self {
            Case::Nominativus => "nomn",
            Case::Genetivus => "gent",
            Case::Dativus => "datv",
            Case::Accusativus => "accs",
            Case::Ablativus => "ablt",
            Case::Locativus => "loct",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Number {
    #[serde(rename = "sing")]
    Singular,
    #[serde(rename = "plur")]
    Plural,
}

impl Number {
    pub fn as_tag_token(self) -> &'static str {
        match self {
            Number::Singular => "sing",
            Number::Plural => "plur",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Gender {
    #[serde(rename = "masc")]
    Masculine,
    #[serde(rename = "femn")]
    Feminine,
    #[serde(rename = "neut")]
    Neutral,
}

impl Gender {
    pub fn as_tag_token(self) -> &'static str {
        match self {
            Gender::Masculine => "masc",
            Gender::Feminine => "femn",
            Gender::Neutral => "neut",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, derive_more::Display, Copy, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Animacy {
    #[serde(rename = "anim")]
    Animate,
    #[serde(rename = "inan")]
    Inanimate,
}

impl Animacy {
    pub fn as_tag_token(self) -> &'static str {
        match self {
            Animacy::Animate => "anim",
            Animacy::Inanimate => "inan",
        }
    }
}

/// `tag_pos`: the substring of `tag` up to the first `,` or space.
pub fn tag_pos(tag: &str) -> &str {
    let end = tag
        .find(|c: char| c == ',' || c == ' ')
        .unwrap_or(tag.len());
    &tag[..end]
}

/// The first of `candidates` that appears as a substring of `tag`; empty if none.
pub fn tag_grammeme<'a>(tag: &str, candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|c| tag.contains(c))
        .unwrap_or("")
}

/// Conjunction of substring containment for each non-empty constraint.
pub fn tag_matches(tag: &str, case: &str, number: &str, gender: &str, animacy: &str) -> bool {
    (case.is_empty() || tag.contains(case))
        && (number.is_empty() || tag.contains(number))
        && (gender.is_empty() || tag.contains(gender))
        && (animacy.is_empty() || tag.contains(animacy))
}

/// The morphology engine: C5+C6 tables plus the C4 words index they describe.
pub struct MorphEngine {
    words: WordsIndex,
    paradigms: ParadigmStore,
    suffixes: StringTable,
    gramtab: StringTable,
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl MorphEngine {
    pub fn new(
        words: WordsIndex,
        paradigms: ParadigmStore,
        suffixes: StringTable,
        gramtab: StringTable,
    ) -> Self {
        Self {
            words,
            paradigms,
            suffixes,
            gramtab,
        }
    }

    /// Resolves the canonical (first) entry for `word`, together with its
    /// paradigm and the extracted stem. Returns the owning paradigm id
    /// alongside so callers can attribute later per-form faults in logs.
    fn primary_split<'w>(&self, word: &'w str) -> Option<(&[u16], usize, &'w str, u16)> {
        let entries = self.words.get(word);
        let first = entries.first()?;
        let Some(para) = self.paradigms.get(first.paradigm_id) else {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, "paradigm id out of range, skipping entry");
            return None;
        };
        let n = para.len() / 3;
        let fi = first.form_idx as usize;
        if fi >= n {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, form_idx = fi, forms = n, "form index out of range, skipping entry");
            return None;
        }

        let prefix_id = para[2 * n + fi];
        let Some(&prefix) = PARADIGM_PREFIXES.get(prefix_id as usize) else {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, prefix_id, "prefix id out of range, skipping entry");
            return None;
        };
        let Some(suffix) = self.suffixes.get(para[fi]) else {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, suffix_id = para[fi], "suffix id out of range, skipping entry");
            return None;
        };

        if !word.starts_with(prefix) || !word.ends_with(suffix) {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, prefix = %prefix, suffix = %suffix, "stem-extraction contract violated, skipping entry");
            return None;
        }
        if prefix.len() + suffix.len() > word.len() {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, prefix = %prefix, suffix = %suffix, "prefix and suffix overlap, skipping entry");
            return None;
        }
        let stem = &word[prefix.len()..word.len() - suffix.len()];
        Some((para, n, stem, first.paradigm_id))
    }

    pub fn word_forms(&self, word: &str) -> Vec<String> {
        let word = normalize(word);
        if word.is_empty() {
            return Vec::new();
        }
        let Some((para, n, stem, paradigm_id)) = self.primary_split(&word) else {
            return Vec::new();
        };

        let mut forms = Vec::with_capacity(n);
        let mut seen = std::collections::HashSet::with_capacity(n);
        for i in 0..n {
            let Some(prefix) = PARADIGM_PREFIXES.get(para[2 * n + i] as usize) else {
                tracing::warn!(%word, paradigm_id, form_idx = i, "prefix id out of range, skipping form");
                continue;
            };
            let Some(suffix) = self.suffixes.get(para[i]) else {
                tracing::warn!(%word, paradigm_id, form_idx = i, "suffix id out of range, skipping form");
                continue;
            };
            let form = format!("{prefix}{stem}{suffix}");
            if seen.insert(form.clone()) {
                forms.push(form);
            }
        }
        forms
    }

    /// Whether `word` resolves to at least one words-index entry.
    pub fn is_known(&self, word: &str) -> bool {
        !self.words.get(&normalize(word)).is_empty()
    }

    pub fn tag(&self, word: &str) -> String {
        let word = normalize(word);
        if word.is_empty() {
            return String::new();
        }
        let entries = self.words.get(&word);
        let Some(first) = entries.first() else {
            return String::new();
        };
        let Some(para) = self.paradigms.get(first.paradigm_id) else {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, "paradigm id out of range, skipping entry");
            return String::new();
        };
        let n = para.len() / 3;
        let fi = first.form_idx as usize;
        if fi >= n {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, form_idx = fi, forms = n, "form index out of range, skipping entry");
            return String::new();
        }
        let Some(tag) = self.gramtab.get(para[n + fi]) else {
            tracing::warn!(%word, paradigm_id = first.paradigm_id, tag_id = para[n + fi], "tag id out of range, skipping entry");
            return String::new();
        };
        tag.to_owned()
    }

    /// Reserved: the accusative agreement rule resolves animacy before
    /// calling `inflect`, so `animacy` is always passed empty in practice.
    pub fn inflect(
        &self,
        word: &str,
        case: &str,
        number: &str,
        gender: &str,
        animacy: &str,
    ) -> String {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return word.to_owned();
        }
        let Some((para, n, stem, paradigm_id)) = self.primary_split(&normalized) else {
            return word.to_owned();
        };

        for i in 0..n {
            let Some(tag) = self.gramtab.get(para[n + i]) else {
                tracing::warn!(word = %normalized, paradigm_id, form_idx = i, "tag id out of range, skipping form");
                continue;
            };
            if tag_matches(tag, case, number, gender, animacy) {
                let Some(prefix) = PARADIGM_PREFIXES.get(para[2 * n + i] as usize) else {
                    tracing::warn!(word = %normalized, paradigm_id, form_idx = i, "prefix id out of range, skipping form");
                    continue;
                };
                let Some(suffix) = self.suffixes.get(para[i]) else {
                    tracing::warn!(word = %normalized, paradigm_id, form_idx = i, "suffix id out of range, skipping form");
                    continue;
                };
                return format!("{prefix}{stem}{suffix}");
            }
        }
        word.to_owned()
    }
}
