//! Element-wise transforms: the `map` family.

use core::hash::Hash;

use super::Collection;
use crate::error::{Error, Result};

impl<K: Hash + Eq + Clone, V> Collection<K, V> {
    /// Produces a new collection where each value is replaced by `f(value)`.
    ///
    /// Keys are preserved positionally: the result has the same key set and
    /// cardinality as the source. The source is not mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3]);
    /// let doubled = line.map(|item| item * 2);
    ///
    /// assert_eq!(doubled.to_vec(), [2, 4, 6]);
    /// assert_eq!(line.to_vec(), [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Collection<K, U>
    where
        F: FnMut(&V) -> U,
    {
        self.entries().iter().map(|(key, value)| (key.clone(), f(value))).collect()
    }

    /// Constructs an instance of a target value type from each element.
    ///
    /// Equivalent to `map(|v| U::from(v.clone()))`; used to adapt raw scalars
    /// into richer value objects. Keys are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// impl From<&str> for Person {
    ///     fn from(name: &str) -> Self {
    ///         Person { name: name.to_string() }
    ///     }
    /// }
    ///
    /// let names = Collection::from_values(["Christian"]);
    /// let people = names.map_into::<Person>();
    /// assert_eq!(people.to_vec(), [Person { name: "Christian".to_string() }]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn map_into<U>(&self) -> Collection<K, U>
    where
        V: Clone,
        U: From<V>,
    {
        self.map(|value| U::from(value.clone()))
    }

    /// Unpacks each value (itself an ordered sequence) into the positional
    /// arguments of `f`, given as a fixed-arity array.
    ///
    /// The result carries fresh sequential keys. The arity `N` is fixed by
    /// the closure's parameter type, as below.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArityMismatch`] as soon as an element's length is not
    /// exactly `N`. This is a developer error, not a recoverable condition:
    /// no partial result is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let names = Collection::from_values([vec!["Chris", "Tian"], vec!["Tian", "Chris"]]);
    /// let full = names.map_spread(|[first, last]: [&str; 2]| format!("{first} {last}"))?;
    ///
    /// assert_eq!(full.to_vec(), ["Chris Tian", "Tian Chris"]);
    /// # Ok::<(), flowmap::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(total length of all elements)
    pub fn map_spread<T, U, F, const N: usize>(&self, mut f: F) -> Result<Collection<usize, U>>
    where
        V: Clone + IntoIterator<Item = T>,
        F: FnMut([T; N]) -> U,
    {
        let mut result = Vec::with_capacity(self.len());
        for (_, value) in self.entries() {
            let items: Vec<T> = value.clone().into_iter().collect();
            let spread: [T; N] = <[T; N]>::try_from(items).map_err(|items| Error::ArityMismatch {
                expected: N,
                actual: items.len(),
            })?;
            result.push(f(spread));
        }
        Ok(Collection::from_values(result))
    }

    /// Buckets each element under a group key computed by `f`, which returns
    /// a `(group key, contributed value)` pair per element.
    ///
    /// Groups appear in first-seen key order; each group's values keep their
    /// source order and get fresh sequential keys. To group whole elements
    /// without reshaping them, see [`group_by`](Collection::group_by).
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
    /// let by_dept = staff.map_to_groups(|&(name, dept), _| (dept, name));
    ///
    /// assert_eq!(by_dept.get(&"IT").unwrap().to_vec(), ["Christian", "Budi"]);
    /// assert_eq!(by_dept.get(&"HR").unwrap().to_vec(), ["Callista"]);
    /// assert_eq!(by_dept.keys().copied().collect::<Vec<_>>(), ["IT", "HR"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) average.
    #[must_use]
    pub fn map_to_groups<G, U, F>(&self, mut f: F) -> Collection<G, Collection<usize, U>>
    where
        G: Hash + Eq + Clone,
        F: FnMut(&V, &K) -> (G, U),
    {
        let mut buckets: Collection<G, Vec<U>> = Collection::new();
        for (key, value) in self.entries() {
            let (group_key, contributed) = f(value, key);
            if let Some(bucket) = buckets.raw.get_mut(&group_key) {
                bucket.push(contributed);
            } else {
                buckets.raw.insert(group_key, vec![contributed]);
            }
        }
        buckets
            .into_iter()
            .map(|(group_key, bucket)| (group_key, Collection::from_values(bucket)))
            .collect()
    }

    /// Concatenates the sequences returned by `f`, in source order, into one
    /// flat collection with fresh sequential keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let people = Collection::from_values([
    ///     ("Christian", vec!["Coding", "Gaming"]),
    ///     ("Budi", vec!["Reading", "Writing"]),
    /// ]);
    /// let hobbies = people.flat_map(|(_, hobbies)| hobbies.clone());
    ///
    /// assert_eq!(hobbies.to_vec(), ["Coding", "Gaming", "Reading", "Writing"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(total length of all returned sequences)
    #[must_use]
    pub fn flat_map<U, I, F>(&self, mut f: F) -> Collection<usize, U>
    where
        F: FnMut(&V) -> I,
        I: IntoIterator<Item = U>,
    {
        let mut result = Vec::new();
        for (_, value) in self.entries() {
            result.extend(f(value));
        }
        Collection::from_values(result)
    }

    /// Flattens a collection of sequences by exactly one level, concatenating
    /// in source order with fresh sequential keys.
    ///
    /// Differs from [`flat_map`](Collection::flat_map) only in that no
    /// transformation is applied to the inner elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let nested = Collection::from_values([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    /// let flat = nested.collapse();
    ///
    /// assert_eq!(flat.to_vec(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(total length of all inner sequences)
    #[must_use]
    pub fn collapse<T>(&self) -> Collection<usize, T>
    where
        V: Clone + IntoIterator<Item = T>,
    {
        self.flat_map(|value| value.clone())
    }
}
