use byteorder::{ByteOrder, LittleEndian};

use crate::errors::LoadError;

/// Indexed collection of per-lexeme paradigms.
///
/// Each paradigm is a flat `[u16; 3N]`: suffix ids, then tag ids, then prefix
/// ids, each slice of length `N` (the form count). See [`super::PARADIGM_PREFIXES`]
/// for how the prefix ids resolve.
#[derive(Debug, Clone)]
pub struct ParadigmStore {
    paradigms: Vec<Vec<u16>>,
}

impl ParadigmStore {
    /// Decodes `u16 LE count`, then for each paradigm a `u16 LE length`
    /// followed by `length` `u16 LE` values.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), LoadError> {
        if bytes.len() < 2 {
            return Err(LoadError::Truncated {
                what: "paradigm count",
            });
        }
        let count = LittleEndian::read_u16(&bytes[..2]) as usize;
        let mut rest = &bytes[2..];

        let mut paradigms = Vec::with_capacity(count);
        for _ in 0..count {
            if rest.len() < 2 {
                return Err(LoadError::Truncated {
                    what: "paradigm length",
                });
            }
            let length = LittleEndian::read_u16(&rest[..2]) as usize;
            rest = &rest[2..];

            let body_len = length
                .checked_mul(2)
                .ok_or(LoadError::Truncated { what: "paradigm body" })?;
            if rest.len() < body_len {
                return Err(LoadError::Truncated {
                    what: "paradigm body",
                });
            }
            if length % 3 != 0 {
                return Err(LoadError::Malformed {
                    what: "paradigm length not a multiple of 3",
                });
            }

            let mut values = Vec::with_capacity(length);
            for chunk in rest[..body_len].chunks_exact(2) {
                values.push(LittleEndian::read_u16(chunk));
            }
            paradigms.push(values);
            rest = &rest[body_len..];
        }

        Ok((Self { paradigms }, rest))
    }

    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }

    /// The raw `[u16; 3N]` triplet array for `paradigm_id`, if in range.
    pub fn get(&self, paradigm_id: u16) -> Option<&[u16]> {
        self.paradigms.get(paradigm_id as usize).map(Vec::as_slice)
    }
}
