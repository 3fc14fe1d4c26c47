//! Surface-form lookup (C4): composes the DAWG, guide and completer with the
//! base64 payload convention to answer `(paradigm_id, form_idx)` queries.

use crate::dawg::{Completer, Dawg, Guide};

/// Separator byte between a word's spelling and its payload completions in
/// the words DAWG.
const PAYLOAD_SEP: u8 = 0x01;

/// A decoded `(paradigm_id, form_idx)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub paradigm_id: u16,
    pub form_idx: u16,
}

/// The words index: a DAWG of `word + 0x01 + base64(payload)` keys.
pub struct WordsIndex {
    dawg: Dawg,
    guide: Guide,
}

impl WordsIndex {
    pub fn new(dawg: Dawg, guide: Guide) -> Self {
        Self { dawg, guide }
    }

    /// Enumerates every `(paradigm_id, form_idx)` entry for `word`.
    ///
    /// Output order is the completer's stable enumeration order; the first
    /// entry is the dictionary's canonical parse.
    pub fn get(&self, word: &str) -> Vec<WordEntry> {
        let Some(after_word) = self.dawg.follow_bytes(word.as_bytes(), Dawg::ROOT) else {
            return Vec::new();
        };
        let Some(payload_root) = self.dawg.follow_char(PAYLOAD_SEP, after_word) else {
            return Vec::new();
        };

        let mut completer = Completer::new(&self.dawg, &self.guide);
        completer.start(payload_root, b"");

        let mut entries = Vec::new();
        while completer.next() {
            if let Some(entry) = decode_payload(completer.key()) {
                entries.push(entry);
            }
        }
        entries
    }
}

fn decode_payload(key: &[u8]) -> Option<WordEntry> {
    use base64::Engine;

    let key = key.strip_suffix(b"\n").unwrap_or(key);
    let decoded = match base64::engine::general_purpose::STANDARD.decode(key) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(%error, "malformed base64 payload, skipping completion");
            return None;
        }
    };
    if decoded.len() < 4 {
        tracing::warn!(len = decoded.len(), "payload shorter than 4 bytes, skipping completion");
        return None;
    }
    Some(WordEntry {
        paradigm_id: u16::from_be_bytes([decoded[0], decoded[1]]),
        form_idx: u16::from_be_bytes([decoded[2], decoded[3]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::test_fixtures::words_fixture;

    #[test]
    fn decodes_payload_with_trailing_newline() {
        use base64::Engine;
        let payload = base64::engine::general_purpose::STANDARD.encode([0, 7, 0, 3]);
        let mut key = payload.into_bytes();
        key.push(b'\n');
        assert_eq!(
            decode_payload(&key),
            Some(WordEntry {
                paradigm_id: 7,
                form_idx: 3
            })
        );
    }

    #[test]
    fn rejects_payload_shorter_than_four_bytes() {
        use base64::Engine;
        let payload = base64::engine::general_purpose::STANDARD.encode([0, 7]);
        assert_eq!(decode_payload(payload.as_bytes()), None);
    }

    #[test]
    fn unknown_word_returns_empty() {
        let (dawg, guide) = words_fixture();
        let index = WordsIndex::new(dawg, guide);
        assert!(index.get("неизвестно").is_empty());
    }

    #[test]
    fn known_word_decodes_its_entries() {
        let (dawg, guide) = words_fixture();
        let index = WordsIndex::new(dawg, guide);
        let entries = index.get("кошка");
        assert!(!entries.is_empty());
        assert_eq!(
            entries[0],
            WordEntry {
                paradigm_id: 0,
                form_idx: 0
            }
        );
    }
}
