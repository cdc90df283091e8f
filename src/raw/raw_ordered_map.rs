use core::borrow::Borrow;
use core::hash::Hash;
use std::collections::HashMap;

/// The backing store for a `Collection`.
///
/// Entries live in a contiguous vector in insertion order; a hash index maps
/// each key to its position in that vector. The index exists purely for O(1)
/// key lookup and duplicate detection - iteration never touches it.
///
/// Invariant: `index[k] == i` iff `entries[i].0 == k`, and every entry key
/// appears in the index exactly once.
#[derive(Clone)]
pub(crate) struct RawOrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> RawOrderedMap<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<K: Hash + Eq + Clone, V> RawOrderedMap<K, V> {
    /// Inserts a key-value pair.
    ///
    /// A duplicate key replaces the stored value in place and returns the old
    /// one; the entry keeps its original position.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            let old = core::mem::replace(&mut self.entries[position].1, value);
            Some(old)
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
            None
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(key).map(|&position| &mut self.entries[position].1)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(key).map(|&position| {
            let (k, v) = &self.entries[position];
            (k, v)
        })
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// Removes and returns the last entry in insertion order.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Drains every entry into a vector, leaving the map empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        self.index.clear();
        core::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn raw_capacity() {
        let map: RawOrderedMap<usize, u32> = RawOrderedMap::with_capacity(10);
        assert!(map.capacity() >= 10);
    }

    proptest! {
        #[test]
        fn raw_behaves_like_assoc_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(i16, u32)> = Vec::new();
            let mut map: RawOrderedMap<i16, u32> = RawOrderedMap::new();

            for operation in operations {
                match operation {
                    Operation::Insert(key, value) => {
                        let expected = model.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                        prop_assert_eq!(map.insert(key, value), expected);
                        if let Some(slot) = model.iter_mut().find(|(k, _)| *k == key) {
                            slot.1 = value;
                        } else {
                            model.push((key, value));
                        }
                    }
                    Operation::Get(key) => {
                        let expected = model.iter().find(|(k, _)| *k == key).map(|(_, v)| v);
                        prop_assert_eq!(map.get(&key), expected);
                        prop_assert_eq!(map.contains_key(&key), expected.is_some());
                    }
                    Operation::PopLast => {
                        prop_assert_eq!(map.pop_last(), model.pop());
                    }
                }

                prop_assert_eq!(map.len(), model.len());
                prop_assert_eq!(map.is_empty(), model.is_empty());
                prop_assert_eq!(map.as_slice(), model.as_slice());
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(i16, u32),
        Get(i16),
        PopLast,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        // Narrow key range to force duplicate-key insertions.
        let key = -32i16..32i16;
        prop_oneof![
            20 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            5 => key.prop_map(Operation::Get),
            5 => Just(Operation::PopLast),
        ]
    }
}
