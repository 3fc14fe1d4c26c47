use byteorder::{ByteOrder, LittleEndian};

use crate::errors::LoadError;

/// Bit layout of a single DAWG unit, per the `dawg`/`dawg-python` format family.
///
/// ```text
/// bits 0..=7   label
/// bit  8       has_leaf
/// bit  9       extension (scales offset by 1 bit)
/// bits 10..=30 offset
/// bit  31      is_leaf
/// ```
const LEAF_BIT: u32 = 1 << 31;
const HAS_LEAF_BIT: u32 = 1 << 8;
const EXTENSION_BIT: u32 = 1 << 9;
const LABEL_MASK: u32 = 0xFF;

/// Read-only array of 32-bit DAWG units with byte-wise transition lookup.
///
/// Mirrors the double-array trie bit tricks used by double-array DAWG readers
/// (`label`/`value`/`has_leaf`/`offset`), generalized to also support value
/// lookup (`has_value`/`value`) rather than only prefix search.
#[derive(Debug, Clone)]
pub struct Dawg {
    units: Vec<u32>,
}

impl Dawg {
    /// Root state of every lookup.
    pub const ROOT: u32 = 0;

    /// Decodes `u32 LE size` followed by `size` `u32 LE` units.
    ///
    /// Returns the remaining, unconsumed tail of `bytes` alongside the dictionary
    /// so callers can chain further blobs (the words file appends a guide
    /// immediately afterwards).
    pub fn from_le_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), LoadError> {
        if bytes.len() < 4 {
            return Err(LoadError::Truncated { what: "dawg size" });
        }
        let size = LittleEndian::read_u32(&bytes[..4]) as usize;
        let body_len = size
            .checked_mul(4)
            .ok_or(LoadError::Truncated { what: "dawg body" })?;
        let rest = &bytes[4..];
        if rest.len() < body_len {
            return Err(LoadError::Truncated { what: "dawg body" });
        }

        let mut units = Vec::with_capacity(size);
        for chunk in rest[..body_len].chunks_exact(4) {
            units.push(LittleEndian::read_u32(chunk));
        }

        Ok((Self { units }, &rest[body_len..]))
    }

    pub fn node_count(&self) -> usize {
        self.units.len()
    }

    fn unit(&self, index: u32) -> Option<u32> {
        self.units.get(index as usize).copied()
    }

    fn label_bits(unit: u32) -> u32 {
        unit & (LABEL_MASK | LEAF_BIT)
    }

    fn value_bits(unit: u32) -> u32 {
        unit & !LEAF_BIT
    }

    fn has_leaf(unit: u32) -> bool {
        unit & HAS_LEAF_BIT != 0
    }

    fn offset(unit: u32) -> u32 {
        let shift = (unit & EXTENSION_BIT) >> 9;
        (unit >> 10) << shift
    }

    /// Follows a single byte-labelled transition from `index`.
    ///
    /// Returns `None` when the DAWG has no outgoing arc labelled `label` from
    /// `index`, or when `index` itself is out of bounds (malformed input).
    pub fn follow_char(&self, label: u8, index: u32) -> Option<u32> {
        let here = self.unit(index)?;
        let next = index ^ Self::offset(here) ^ label as u32;
        let there = self.unit(next)?;
        (Self::label_bits(there) == label as u32).then_some(next)
    }

    /// Follows a sequence of bytes from `index`, failing on the first missing arc.
    pub fn follow_bytes(&self, bytes: &[u8], index: u32) -> Option<u32> {
        let mut cur = index;
        for &b in bytes {
            cur = self.follow_char(b, cur)?;
        }
        Some(cur)
    }

    /// Whether `index` carries a leaf value (a zero-labelled child arc).
    pub fn has_value(&self, index: u32) -> bool {
        self.unit(index).is_some_and(Self::has_leaf)
    }

    /// Reads the 31-bit value stored at `index`'s leaf, if any.
    pub fn value(&self, index: u32) -> Option<u32> {
        let here = self.unit(index)?;
        if !Self::has_leaf(here) {
            return None;
        }
        let leaf = self.unit(index ^ Self::offset(here))?;
        Some(Self::value_bits(leaf))
    }
}

#[cfg(test)]
impl Dawg {
    pub(crate) fn from_raw_units(units: Vec<u32>) -> Self {
        Self { units }
    }
}
