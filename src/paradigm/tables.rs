use crate::errors::LoadError;

/// An ordered, id-indexed table of strings: the suffix table and the gramtab
/// share this representation, differing only in what the ids mean.
#[derive(Debug, Clone)]
pub struct StringTable {
    entries: Vec<String>,
}

impl StringTable {
    /// Parses a JSON array of strings.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let entries: Vec<String> = serde_json::from_slice(bytes).map_err(LoadError::json)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u16) -> Option<&str> {
        self.entries.get(id as usize).map(String::as_str)
    }
}
