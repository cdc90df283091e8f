//! Filtering and query operations.

use core::fmt::Display;
use core::hash::Hash;

use rand::Rng;

use super::Collection;
use crate::error::{Error, Result};

impl<K: Hash + Eq + Clone, V> Collection<K, V> {
    /// Keeps the elements for which the predicate returns `true`.
    ///
    /// The predicate receives each `(value, key)` pair. Surviving elements
    /// preserve their original keys and order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let scores = Collection::from_pairs([("Chris", 100), ("Tian", 80), ("Budi", 90)]);
    /// let passed = scores.filter(|score, _| *score >= 90);
    ///
    /// assert_eq!(passed.to_pairs(), [("Chris", 100), ("Budi", 90)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn filter<F>(&self, mut pred: F) -> Collection<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        let mut result = Collection::new();
        for (key, value) in self.entries() {
            if pred(value, key) {
                result.raw.insert(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns `true` if any element equals the given value.
    ///
    /// For a predicate-based test, see
    /// [`contains_where`](Collection::contains_where); for key membership,
    /// see [`contains_key`](Collection::contains_key).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values(["Christian", "Budi", "Dyla"]);
    /// assert!(line.contains(&"Dyla"));
    /// assert!(!line.contains(&"Zahra"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Returns `true` if any `(value, key)` pair satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values(["Christian", "Budi", "Dyla"]);
    /// assert!(line.contains_where(|name, _| name.starts_with('C')));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains_where<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries().iter().any(|(key, value)| pred(value, key))
    }

    /// Returns the first `n` elements, preserving keys.
    ///
    /// `n` is clamped to the available length.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.take(3).to_vec(), [1, 2, 3]);
    /// assert_eq!(line.take(100).to_vec(), [1, 2, 3, 4, 5, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn take(&self, n: usize) -> Collection<K, V>
    where
        V: Clone,
    {
        self.entries()[..n.min(self.len())].iter().cloned().collect()
    }

    /// Skips the first `n` elements and returns the remainder, preserving
    /// keys.
    ///
    /// `n` is clamped to the available length.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.skip(3).to_vec(), [4, 5, 6]);
    /// assert!(line.skip(100).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn skip(&self, n: usize) -> Collection<K, V>
    where
        V: Clone,
    {
        self.entries()[n.min(self.len())..].iter().cloned().collect()
    }

    /// Takes elements from the start while the predicate holds, stopping at
    /// (and excluding) the first element where it fails.
    ///
    /// Short-circuiting: the predicate is never evaluated on elements beyond
    /// the stop point. Keys are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.take_while(|v, _| *v < 3).to_vec(), [1, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(length of the result)
    #[must_use]
    pub fn take_while<F>(&self, mut pred: F) -> Collection<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        let mut result = Collection::new();
        for (key, value) in self.entries() {
            if !pred(value, key) {
                break;
            }
            result.raw.insert(key.clone(), value.clone());
        }
        result
    }

    /// Takes elements from the start until the predicate fires, stopping at
    /// (and excluding) the first element where it returns `true`.
    ///
    /// Short-circuiting, like [`take_while`](Collection::take_while).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.take_until(|v, _| *v == 3).to_vec(), [1, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(length of the result)
    #[must_use]
    pub fn take_until<F>(&self, mut pred: F) -> Collection<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        self.take_while(|value, key| !pred(value, key))
    }

    /// Drops elements from the start while the predicate holds and returns
    /// the remainder, beginning with the first element where it fails.
    ///
    /// Short-circuiting: the predicate is never evaluated past the boundary.
    /// Keys are preserved. With the same predicate,
    /// [`take_while`](Collection::take_while) and `skip_while` partition the
    /// collection complementarily.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.skip_while(|v, _| *v < 3).to_vec(), [3, 4, 5, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn skip_while<F>(&self, mut pred: F) -> Collection<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        let boundary = self
            .entries()
            .iter()
            .position(|(key, value)| !pred(value, key))
            .unwrap_or(self.len());
        self.entries()[boundary..].iter().cloned().collect()
    }

    /// Drops elements from the start until the predicate fires and returns
    /// the remainder, beginning with the first element where it returns
    /// `true`.
    ///
    /// Short-circuiting, like [`skip_while`](Collection::skip_while).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(line.skip_until(|v, _| *v == 3).to_vec(), [3, 4, 5, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn skip_until<F>(&self, mut pred: F) -> Collection<K, V>
    where
        V: Clone,
        F: FnMut(&V, &K) -> bool,
    {
        self.skip_while(|value, key| !pred(value, key))
    }

    /// Returns the first element in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3]);
    /// assert_eq!(line.first(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn first(&self) -> Result<&V> {
        self.entries().first().map(|(_, value)| value).ok_or(Error::EmptyCollection)
    }

    /// Returns the first element satisfying the predicate, in iteration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(line.first_where(|v, _| *v > 5), Ok(&6));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn first_where<F>(&self, mut pred: F) -> Result<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries()
            .iter()
            .find(|(key, value)| pred(value, key))
            .map(|(_, value)| value)
            .ok_or(Error::NotFound)
    }

    /// Returns the last element in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3]);
    /// assert_eq!(line.last(), Ok(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn last(&self) -> Result<&V> {
        self.entries().last().map(|(_, value)| value).ok_or(Error::EmptyCollection)
    }

    /// Returns the last element satisfying the predicate, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(line.last_where(|v, _| *v < 5), Ok(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn last_where<F>(&self, mut pred: F) -> Result<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.entries()
            .iter()
            .rev()
            .find(|(key, value)| pred(value, key))
            .map(|(_, value)| value)
            .ok_or(Error::NotFound)
    }

    /// Returns a uniformly selected element. The element is not removed.
    ///
    /// Non-deterministic by design; callers testing this should assert
    /// membership, not an exact value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3, 4, 5]);
    /// let picked = *line.random()?;
    /// assert!(line.contains(&picked));
    /// # Ok::<(), flowmap::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn random(&self) -> Result<&V> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let position = rand::thread_rng().gen_range(0..self.len());
        Ok(&self.entries()[position].1)
    }

    /// Concatenates the string representations of all values, with
    /// `separator` between each adjacent pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values(["Christian", "Budi", "Zahra"]);
    /// assert_eq!(line.join("-"), "Christian-Budi-Zahra");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(total rendered length)
    #[must_use]
    pub fn join(&self, separator: &str) -> String
    where
        V: Display,
    {
        self.join_with(separator, separator)
    }

    /// Concatenates the string representations of all values, with
    /// `separator` between each adjacent pair except the final one, which
    /// uses `last_separator`.
    ///
    /// With exactly two elements the single separator used is
    /// `last_separator`; with zero or one elements no separator appears.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let trio = Collection::from_values(["A", "B", "C"]);
    /// assert_eq!(trio.join_with(",", " and "), "A,B and C");
    ///
    /// let duo = Collection::from_values(["A", "B"]);
    /// assert_eq!(duo.join_with(",", " and "), "A and B");
    ///
    /// let solo = Collection::from_values(["A"]);
    /// assert_eq!(solo.join_with(",", " and "), "A");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(total rendered length)
    #[must_use]
    pub fn join_with(&self, separator: &str, last_separator: &str) -> String
    where
        V: Display,
    {
        let mut rendered = self.values().map(ToString::to_string);
        let Some(first) = rendered.next() else {
            return String::new();
        };

        let mut out = first;
        let mut pending = rendered.next();
        while let Some(current) = pending {
            pending = rendered.next();
            // The final pair gets last_separator; every earlier pair gets separator.
            if pending.is_some() {
                out.push_str(separator);
            } else {
                out.push_str(last_separator);
            }
            out.push_str(&current);
        }
        out
    }
}
