mod entry;
mod error;

#[cfg(feature = "serde")]
mod serde;

use std::fmt::{Debug, Display};

pub use entry::AssocArrayEntry;
pub use error::KeyNotFound;

use key_scan::*;

/// Capacity hint used by [`AssocArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// `AssocArray` is a growable associative container backed by a vector of
/// key-value entries kept in insertion order.
///
/// Lookups are first-match linear scans comparing keys by equality, so the
/// key type only needs `PartialEq`. Keys are unique among stored entries:
/// `set` on a present key overwrites its value in place, and `remove`
/// shifts later entries left to keep the sequence contiguous.
pub struct AssocArray<K, V> {
    inner: Vec<AssocArrayEntry<K, V>>,
}

impl<K, V> PartialEq for AssocArray<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

impl<K, V> Eq for AssocArray<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
}

impl<K: Debug, V: Debug> Debug for AssocArray<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries().iter()).finish()
    }
}

/// Deep copy: every entry is duplicated into independent storage, so
/// mutating the clone never affects the original.
impl<K: Clone, V: Clone> Clone for AssocArray<K, V> {
    fn clone(&self) -> Self {
        AssocArray {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Default for AssocArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders as `{k1: v1, k2: v2, ...}` in insertion order.
impl<K: Display, V: Display> Display for AssocArray<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.key, entry.value)?;
        }
        f.write_str("}")
    }
}

impl<K, V> AssocArray<K, V> {
    /// Create a new, empty associative array.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty associative array with room for at least `capacity`
    /// entries before the backing storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        AssocArray {
            inner: Vec::with_capacity(capacity),
        }
    }

    fn find(&self, key: &K) -> Option<usize>
    where
        K: PartialEq,
    {
        EqScan::scan_by_key(self.entries(), key)
    }

    /// Get the value associated with `key`.
    ///
    /// Fails with [`KeyNotFound`] when the key does not appear in the
    /// associative array.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound>
    where
        K: PartialEq,
    {
        match self.find(key) {
            Some(index) => Ok(&self.inner[index].value),
            None => Err(KeyNotFound),
        }
    }

    /// Mutable counterpart of [`get`](AssocArray::get).
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound>
    where
        K: PartialEq,
    {
        match self.find(key) {
            Some(index) => Ok(&mut self.inner[index].value),
            None => Err(KeyNotFound),
        }
    }

    /// Set the value associated with `key` to `value` and return the
    /// previous value if the key was already present.
    ///
    /// An existing key keeps its position; a new key is appended at the
    /// end, growing the backing storage if it is full.
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        K: PartialEq,
    {
        match self.find(&key) {
            Some(index) => Some(std::mem::replace(&mut self.inner[index].value, value)),
            None => {
                self.inner.push(AssocArrayEntry::new(key, value));
                None
            }
        }
    }

    /// Remove the entry associated with `key` and return its value. Later
    /// entries shift one position left to close the gap. Does nothing if
    /// the key does not appear in the associative array.
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: PartialEq,
    {
        self.find(key).map(|index| self.inner.remove(index).value)
    }

    /// Determine if `key` appears in the associative array.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AssocArrayEntry<K, V>> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.inner.iter().map(|entry| &entry.key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.inner.iter().map(|entry| &entry.value)
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> {
        self.inner.iter_mut().map(|entry| &mut entry.value)
    }
}

impl<K, V> AssocArray<K, V> {
    /// Borrow a slice view into the entries stored in the `AssocArray`
    pub fn entries(&self) -> &[AssocArrayEntry<K, V>] {
        &self.inner
    }

    /// Get a key-value entry based on its position in insertion order.
    pub fn get_index(&self, index: usize) -> Option<&AssocArrayEntry<K, V>> {
        self.inner.get(index)
    }

    /// Returns the first entry in the AssocArray, if any exists
    pub fn first(&self) -> Option<&AssocArrayEntry<K, V>> {
        self.inner.first()
    }

    /// Returns the last entry in the AssocArray, if any exists
    pub fn last(&self) -> Option<&AssocArrayEntry<K, V>> {
        self.inner.last()
    }

    /// Determine how many entries are in the associative array.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of entries the backing storage can hold before reallocating.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssocArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = AssocArray::new();
        array.extend(iter);
        array
    }
}

/// Routes through `set`, so duplicate keys collapse to the latest value.
impl<K: PartialEq, V> Extend<(K, V)> for AssocArray<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> IntoIterator for AssocArray<K, V> {
    type Item = AssocArrayEntry<K, V>;
    type IntoIter = std::vec::IntoIter<AssocArrayEntry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a AssocArray<K, V> {
    type Item = &'a AssocArrayEntry<K, V>;
    type IntoIter = std::slice::Iter<'a, AssocArrayEntry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
