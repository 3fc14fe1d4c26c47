//! Hand-built DAWG + guide pair shared by the `dawg` submodule tests.
//!
//! Encodes exactly two keys, `"a"` (value `5`) and `"ab"` (value `7`), with
//! offsets chosen by hand so the bit arithmetic in [`super::Dawg`] and the
//! completion order in [`super::Guide`] can be checked against worked-out
//! expectations rather than round-tripped blindly.

use super::{Dawg, Guide};

const HAS_LEAF_BIT: u32 = 1 << 8;
const LEAF_BIT: u32 = 1 << 31;

pub(crate) fn two_key_fixture() -> (Dawg, Guide) {
    let mut units = vec![0u32; 98];
    units[0] = 0; // root, offset 0
    units[97] = b'a' as u32 | HAS_LEAF_BIT | (1 << 10); // node "a", offset 1
    units[96] = LEAF_BIT | 5; // value of "a"
    units[2] = b'b' as u32 | HAS_LEAF_BIT | (3 << 10); // node "ab", offset 3
    units[1] = LEAF_BIT | 7; // value of "ab"
    let dawg = Dawg::from_raw_units(units);

    let mut bytes = vec![0u8; 98 * 2];
    bytes[0] = b'a'; // child(root) = 'a'
    bytes[2 * 97] = b'b'; // child(node "a") = 'b'
    let guide = Guide::from_raw_bytes(bytes);

    (dawg, guide)
}

/// Builds a DAWG + guide containing exactly one key: `key[0..n]`, as a linear
/// non-branching chain, with a leaf value at the end. Node `i` is reached
/// after consuming `key[0..i]`; the leaf value lives one slot past the chain.
fn linear_chain_fixture(key: &[u8]) -> (Dawg, Guide) {
    let n = key.len();
    let leaf_index = (n + 1) as u32;

    let mut units = vec![0u32; n + 2];
    for i in 0..n {
        let cur = i as u32;
        let next = cur + 1;
        let label = if i == 0 { 0 } else { key[i - 1] as u32 };
        let offset = cur ^ next ^ key[i] as u32;
        units[i] = label | (offset << 10);
    }
    let last = n as u32;
    let label = if n == 0 { 0 } else { key[n - 1] as u32 };
    let offset_to_leaf = last ^ leaf_index;
    units[n as usize] = label | HAS_LEAF_BIT | (offset_to_leaf << 10);
    units[leaf_index as usize] = LEAF_BIT;
    let dawg = Dawg::from_raw_units(units);

    let mut guide_bytes = vec![0u8; (n + 1) * 2];
    for i in 0..n {
        guide_bytes[2 * i] = key[i];
    }
    let guide = Guide::from_raw_bytes(guide_bytes);

    (dawg, guide)
}

/// Builds a DAWG + guide over an arbitrary set of `(key, value)` pairs by
/// laying out a trie with first-fit double-array placement, the same
/// placement strategy real DAWG compilers use (minus minimization, which
/// doesn't matter for lookup correctness).
///
/// Keys may be any byte strings, including ones where one key is a prefix of
/// another, as long as no two keys are equal.
pub(crate) fn build_dawg(entries: &[(&[u8], u32)]) -> (Dawg, Guide) {
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct Node {
        value: Option<u32>,
        children: BTreeMap<u8, Node>,
    }

    let mut root = Node::default();
    for &(key, value) in entries {
        let mut node = &mut root;
        for &b in key {
            node = node.children.entry(b).or_default();
        }
        node.value = Some(value);
    }

    let mut units: Vec<u32> = vec![0];
    let mut used = vec![true];
    let mut guide: Vec<(u8, u8)> = vec![(0, 0)];

    fn place(
        node: &Node,
        index: u32,
        units: &mut Vec<u32>,
        used: &mut Vec<bool>,
        guide: &mut Vec<(u8, u8)>,
    ) {
        let labels: Vec<u8> = node.children.keys().copied().collect();
        let needs_value_slot = node.value.is_some();

        let mut offset: u32 = 1;
        let found = loop {
            let value_slot = index ^ offset;
            let value_ok = !needs_value_slot || !used.get(value_slot as usize).copied().unwrap_or(false);
            let children_ok = labels.iter().all(|&l| {
                let slot = index ^ offset ^ l as u32;
                !used.get(slot as usize).copied().unwrap_or(false)
            });
            if value_ok && children_ok {
                break offset;
            }
            offset += 1;
        };
        offset = found;

        if needs_value_slot {
            let slot = (index ^ offset) as usize;
            if slot >= units.len() {
                units.resize(slot + 1, 0);
                used.resize(slot + 1, false);
                guide.resize(slot + 1, (0, 0));
            }
            units[slot] = LEAF_BIT | node.value.unwrap();
            used[slot] = true;
        }

        let existing = units[index as usize] & 0xFF;
        units[index as usize] =
            existing | if needs_value_slot { HAS_LEAF_BIT } else { 0 } | (offset << 10);

        for &label in &labels {
            let child_index = index ^ offset ^ label as u32;
            let slot = child_index as usize;
            if slot >= units.len() {
                units.resize(slot + 1, 0);
                used.resize(slot + 1, false);
                guide.resize(slot + 1, (0, 0));
            }
            units[slot] |= label as u32;
            used[slot] = true;
        }

        guide[index as usize].0 = labels.first().copied().unwrap_or(0);
        for (pos, &label) in labels.iter().enumerate() {
            let child_index = index ^ offset ^ label as u32;
            let sibling = labels.get(pos + 1).copied().unwrap_or(0);
            guide[child_index as usize].1 = sibling;
        }

        for &label in &labels {
            let child_index = index ^ offset ^ label as u32;
            place(&node.children[&label], child_index, units, used, guide);
        }
    }

    place(&root, 0, &mut units, &mut used, &mut guide);

    let dawg = Dawg::from_raw_units(units);
    let mut guide_bytes = vec![0u8; guide.len() * 2];
    for (i, (child, sibling)) in guide.iter().enumerate() {
        guide_bytes[2 * i] = *child;
        guide_bytes[2 * i + 1] = *sibling;
    }
    let guide = Guide::from_raw_bytes(guide_bytes);

    (dawg, guide)
}

/// A words-index fixture: the single entry `"кошка"` mapping to
/// `(paradigm_id: 0, form_idx: 0)`, encoded exactly as [`super::super::words`]
/// expects (word bytes, separator, base64 payload).
pub(crate) fn words_fixture() -> (Dawg, Guide) {
    use base64::Engine;

    let mut key = "кошка".as_bytes().to_vec();
    key.push(0x01);
    key.extend_from_slice(
        base64::engine::general_purpose::STANDARD
            .encode([0u8, 0, 0, 0])
            .as_bytes(),
    );
    linear_chain_fixture(&key)
}
