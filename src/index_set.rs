//! Ordered, deduplicated set of row indexes.
//!
//! Backing value type for everything in this crate: a set of non-negative
//! integers with ascending iteration and no duplicates. Serializes as an
//! ascending integer sequence; deserialization re-normalizes so a decoded
//! set always satisfies the invariants.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered set of `u64` indexes.
///
/// Invariants: no duplicates; iteration order is ascending; may be empty.
/// Construction from any iterator sorts and deduplicates on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSet {
    indexes: BTreeSet<u64>,
}

impl IndexSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set containing a single index.
    pub fn single(index: u64) -> Self {
        let mut indexes = BTreeSet::new();
        indexes.insert(index);
        Self { indexes }
    }

    /// Insert an index. Returns `true` if the index was not already present.
    pub fn insert(&mut self, index: u64) -> bool {
        self.indexes.insert(index)
    }

    /// Remove an index. Returns `true` if the index was present.
    pub fn remove(&mut self, index: u64) -> bool {
        self.indexes.remove(&index)
    }

    /// Whether the given index is a member.
    pub fn contains(&self, index: u64) -> bool {
        self.indexes.contains(&index)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Smallest member, or `None` if empty.
    pub fn first(&self) -> Option<u64> {
        self.indexes.first().copied()
    }

    /// Largest member, or `None` if empty.
    pub fn last(&self) -> Option<u64> {
        self.indexes.last().copied()
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.indexes.iter().copied()
    }

    /// Count members strictly below `pivot`.
    ///
    /// Row-move arithmetic: when the rows at these indexes are removed from
    /// a table, an insertion row at `pivot` shifts down by this amount.
    pub fn count_below(&self, pivot: u64) -> usize {
        self.indexes.range(..pivot).count()
    }
}

impl FromIterator<u64> for IndexSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            indexes: iter.into_iter().collect(),
        }
    }
}

impl Extend<u64> for IndexSet {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.indexes.extend(iter);
    }
}

impl From<&[u64]> for IndexSet {
    fn from(slice: &[u64]) -> Self {
        slice.iter().copied().collect()
    }
}

impl<const N: usize> From<[u64; N]> for IndexSet {
    fn from(array: [u64; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indexes.iter().copied()
    }
}

impl Serialize for IndexSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.indexes.iter())
    }
}

impl<'de> Deserialize<'de> for IndexSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // BTreeSet collection re-normalizes: out-of-order or duplicated
        // input still yields a valid set.
        let indexes = Vec::<u64>::deserialize(deserializer)?;
        Ok(indexes.into_iter().collect())
    }
}
