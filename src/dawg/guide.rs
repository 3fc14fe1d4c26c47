use crate::errors::LoadError;

/// Per-node `(first-child-label, next-sibling-label)` table, used by the
/// [`super::Completer`] to enumerate completions without scanning all 256
/// possible transition bytes at every node.
#[derive(Debug, Clone)]
pub struct Guide {
    bytes: Vec<u8>,
}

impl Guide {
    /// Decodes `u32 LE node_count` followed by `2 * node_count` bytes.
    ///
    /// Returns the remaining tail of `bytes` alongside the guide.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), LoadError> {
        use byteorder::{ByteOrder, LittleEndian};

        if bytes.len() < 4 {
            return Err(LoadError::Truncated { what: "guide size" });
        }
        let node_count = LittleEndian::read_u32(&bytes[..4]) as usize;
        let body_len = node_count
            .checked_mul(2)
            .ok_or(LoadError::Truncated { what: "guide body" })?;
        let rest = &bytes[4..];
        if rest.len() < body_len {
            return Err(LoadError::Truncated { what: "guide body" });
        }

        Ok((
            Self {
                bytes: rest[..body_len].to_vec(),
            },
            &rest[body_len..],
        ))
    }

    pub fn node_count(&self) -> usize {
        self.bytes.len() / 2
    }

    /// Label of the first child of node `index` in completion order; `0` if none.
    pub fn child(&self, index: u32) -> u8 {
        self.bytes.get(2 * index as usize).copied().unwrap_or(0)
    }

    /// Label of the next sibling of node `index`; `0` if none.
    pub fn sibling(&self, index: u32) -> u8 {
        self.bytes
            .get(2 * index as usize + 1)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
impl Guide {
    pub(crate) fn from_raw_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}
