//! Structural transforms: pairing, concatenation, grouping, and slicing.

use core::hash::Hash;
use core::ops::{Bound, RangeBounds};

use super::Collection;
use crate::error::{Error, Result};

impl<K: Hash + Eq + Clone, V> Collection<K, V> {
    /// Pairs each element with the element at the same position in `other`.
    ///
    /// The result length is `min(len(self), len(other))`; each result element
    /// is a two-element sub-collection `[self_i, other_i]`. Both results and
    /// the outer collection carry fresh sequential keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let a = Collection::from_values([1, 2, 3]);
    /// let b = Collection::from_values([4, 5, 6]);
    /// let zipped = a.zip(&b);
    ///
    /// assert_eq!(zipped.len(), 3);
    /// assert_eq!(zipped.first().unwrap().to_vec(), [1, 4]);
    /// assert_eq!(zipped.last().unwrap().to_vec(), [3, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    #[must_use]
    pub fn zip<K2>(&self, other: &Collection<K2, V>) -> Collection<usize, Collection<usize, V>>
    where
        V: Clone,
    {
        let pairs = self
            .entries()
            .iter()
            .zip(other.entries().iter())
            .map(|((_, a), (_, b))| Collection::from_values([a.clone(), b.clone()]))
            .collect::<Vec<_>>();
        Collection::from_values(pairs)
    }

    /// Appends all elements of `other` after all elements of the receiver,
    /// producing one flat collection with fresh sequential keys.
    ///
    /// Original keys on both sides are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let a = Collection::from_values([1, 2, 3]);
    /// let b = Collection::from_values([4, 5, 6]);
    ///
    /// assert_eq!(a.concat(&b).to_vec(), [1, 2, 3, 4, 5, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m)
    #[must_use]
    pub fn concat<K2>(&self, other: &Collection<K2, V>) -> Collection<usize, V>
    where
        V: Clone,
    {
        let values = self
            .values()
            .chain(other.values())
            .cloned()
            .collect::<Vec<_>>();
        Collection::from_values(values)
    }

    /// Uses the receiver's values as keys, paired positionally with the
    /// values of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the two collections have
    /// different lengths; the library never silently truncates or pads.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::{Collection, Error};
    ///
    /// let fields = Collection::from_values(["name", "country"]);
    /// let values = Collection::from_values(["Christian", "Indonesia"]);
    /// let record = fields.combine(&values)?;
    ///
    /// assert_eq!(record.to_pairs(), [("name", "Christian"), ("country", "Indonesia")]);
    ///
    /// let short = Collection::from_values(["name"]);
    /// assert_eq!(
    ///     short.combine(&values),
    ///     Err(Error::LengthMismatch { keys: 1, values: 2 })
    /// );
    /// # Ok::<(), flowmap::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) average.
    pub fn combine<K2, W>(&self, values: &Collection<K2, W>) -> Result<Collection<V, W>>
    where
        V: Hash + Eq + Clone,
        W: Clone,
    {
        if self.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: self.len(),
                values: values.len(),
            });
        }
        Ok(self
            .values()
            .cloned()
            .zip(values.values().cloned())
            .collect())
    }

    /// Groups elements by the key computed by `f`, which receives each
    /// `(value, key)` pair.
    ///
    /// Groups appear in first-seen key order; within a group, elements keep
    /// their source order and get fresh sequential keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let staff = Collection::from_values([
    ///     ("Christian", "IT"),
    ///     ("Budi", "IT"),
    ///     ("Callista", "HR"),
    /// ]);
    /// let by_dept = staff.group_by(|&(_, dept), _| dept);
    ///
    /// assert_eq!(by_dept.keys().copied().collect::<Vec<_>>(), ["IT", "HR"]);
    /// assert_eq!(
    ///     by_dept.get(&"IT").unwrap().to_vec(),
    ///     [("Christian", "IT"), ("Budi", "IT")]
    /// );
    /// assert_eq!(by_dept.get(&"HR").unwrap().to_vec(), [("Callista", "HR")]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) average.
    #[must_use]
    pub fn group_by<G, F>(&self, mut f: F) -> Collection<G, Collection<usize, V>>
    where
        V: Clone,
        G: Hash + Eq + Clone,
        F: FnMut(&V, &K) -> G,
    {
        self.map_to_groups(|value, key| (f(value, key), value.clone()))
    }

    /// Splits the collection into exactly two: elements matching the
    /// predicate and elements not matching, in that order.
    ///
    /// Both halves preserve their original keys and relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let scores = Collection::from_pairs([("Chris", 100), ("Tian", 80), ("Budi", 90)]);
    /// let (passed, failed) = scores.partition(|score, _| *score >= 90);
    ///
    /// assert_eq!(passed.to_pairs(), [("Chris", 100), ("Budi", 90)]);
    /// assert_eq!(failed.to_pairs(), [("Tian", 80)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn partition<F>(&self, mut pred: F) -> (Collection<K, V>, Collection<K, V>)
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        let mut matching = Collection::new();
        let mut non_matching = Collection::new();
        for (key, value) in self.entries() {
            if pred(value, key) {
                matching.raw.insert(key.clone(), value.clone());
            } else {
                non_matching.raw.insert(key.clone(), value.clone());
            }
        }
        (matching, non_matching)
    }

    /// Splits the collection into consecutive sub-collections of at most
    /// `size` elements each, in source order.
    ///
    /// The last chunk may be shorter. Elements keep their original keys
    /// inside each chunk; the outer collection carries fresh sequential keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let chunks = line.chunk(3)?;
    ///
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks.get(&0).unwrap().to_vec(), [1, 2, 3]);
    /// assert_eq!(chunks.get(&1).unwrap().to_vec(), [4, 5, 6]);
    /// assert_eq!(chunks.get(&2).unwrap().to_vec(), [7, 8, 9]);
    /// # Ok::<(), flowmap::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn chunk(&self, size: usize) -> Result<Collection<usize, Collection<K, V>>>
    where
        V: Clone,
    {
        if size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        let chunks = self
            .entries()
            .chunks(size)
            .map(|chunk| chunk.iter().cloned().collect())
            .collect::<Vec<Collection<K, V>>>();
        Ok(Collection::from_values(chunks))
    }

    /// Returns the elements in the given positional range, preserving their
    /// original keys.
    ///
    /// The range is clamped to the collection bounds: out-of-range or
    /// inverted ranges yield an empty collection, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8]);
    ///
    /// assert_eq!(line.slice(3..).to_vec(), [4, 5, 6, 7, 8]);
    /// assert_eq!(line.slice(3..5).to_vec(), [4, 5]);
    /// assert_eq!(line.slice(3..5).to_pairs(), [(3, 4), (4, 5)]);
    /// assert!(line.slice(100..).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(length of the slice)
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Collection<K, V>
    where
        V: Clone,
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
        };
        let end = match range.end_bound() {
            Bound::Unbounded => self.len(),
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
        };
        let end = end.min(self.len());
        if start >= end {
            return Collection::new();
        }
        self.entries()[start..end].iter().cloned().collect()
    }
}
