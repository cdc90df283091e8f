use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::error::{Error, Result};
use crate::raw::RawOrderedMap;

mod query;
mod structure;
mod transform;

/// An insertion-ordered mapping from unique keys to values, with a fluent
/// chain of transformation operations.
///
/// A `Collection` stores `(key, value)` pairs and iterates them in the order
/// they were inserted. Keys are unique: assigning a value to an existing key
/// replaces the stored value without moving the entry. List-like collections
/// use sequential `usize` keys starting at 0 (see
/// [`from_values`](Collection::from_values)); map-like collections carry
/// explicit keys (see [`from_pairs`](Collection::from_pairs)).
///
/// Every transformation ([`map`](Collection::map), [`filter`](Collection::filter),
/// [`group_by`](Collection::group_by), ...) returns a *new* collection that
/// shares no mutable backing storage with its source. The only operations that
/// mutate a collection in place are [`push`](Collection::push) and
/// [`pop`](Collection::pop) (and the [`Extend`] impls, which are repeated
/// insertion).
///
/// Operations with preconditions return [`Result`] and fail immediately with
/// an [`Error`] when the precondition is violated; the library never silently
/// truncates or pads to avoid an error.
///
/// # Examples
///
/// ```
/// use flowmap::Collection;
///
/// let mut line = Collection::from_values(["Christian", "Budi"]);
/// line.push("Zahra");
///
/// assert_eq!(line.to_vec(), ["Christian", "Budi", "Zahra"]);
/// assert_eq!(line.join("-"), "Christian-Budi-Zahra");
///
/// let (short, long) = line.partition(|name, _| name.len() <= 5);
/// assert_eq!(short.to_vec(), ["Budi", "Zahra"]);
/// assert_eq!(long.to_vec(), ["Christian"]);
/// ```
///
/// A `Collection` with a known list of pairs can be initialized from an array:
///
/// ```
/// use flowmap::Collection;
///
/// let solar_distance = Collection::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.get(&"Earth"), Some(&1.0));
/// ```
pub struct Collection<K, V> {
    raw: RawOrderedMap<K, V>,
}

/// An iterator over the entries of a `Collection`.
///
/// This `struct` is created by the [`iter`] method on [`Collection`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use flowmap::Collection;
///
/// let map = Collection::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: Collection::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, (K, V)>,
}

/// An owning iterator over the entries of a `Collection`, in insertion order.
///
/// This `struct` is created by the [`into_iter`] method on [`Collection`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// # Examples
///
/// ```
/// use flowmap::Collection;
///
/// let map = Collection::from([(1, "a"), (2, "b")]);
/// let mut iter = map.into_iter();
/// assert_eq!(iter.next(), Some((1, "a")));
/// assert_eq!(iter.next_back(), Some((2, "b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `Collection`.
///
/// This `struct` is created by the [`keys`] method on [`Collection`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use flowmap::Collection;
///
/// let map = Collection::from([("b", 2), ("a", 1)]);
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["b", "a"]);
/// ```
///
/// [`keys`]: Collection::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `Collection`.
///
/// This `struct` is created by the [`values`] method on [`Collection`]. See
/// its documentation for more.
///
/// # Examples
///
/// ```
/// use flowmap::Collection;
///
/// let map = Collection::from([(1, "a"), (2, "b")]);
/// let values: Vec<_> = map.values().copied().collect();
/// assert_eq!(values, ["a", "b"]);
/// ```
///
/// [`values`]: Collection::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Collection<K, V> {
    /// Makes a new, empty `Collection`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let mut map: Collection<i32, &str> = Collection::new();
    /// map.extend([(1, "a")]);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Collection<K, V> {
        Collection {
            raw: RawOrderedMap::new(),
        }
    }

    /// Creates an empty collection with capacity for at least `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map: Collection<usize, i32> = Collection::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Collection {
            raw: RawOrderedMap::with_capacity(capacity),
        }
    }

    /// Returns the current capacity of the collection.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of elements in the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3]);
    /// assert_eq!(line.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the collection contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let empty: Collection<usize, i32> = Collection::new();
    /// assert!(empty.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Gets an iterator over the entries of the collection, in insertion
    /// order.
    ///
    /// Iteration does not consume or change the collection; any number of
    /// independent passes may be taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([("Chris", 100), ("Budi", 90)]);
    ///
    /// for (name, score) in map.iter() {
    ///     println!("{name}: {score}");
    /// }
    ///
    /// let (first_name, first_score) = map.iter().next().unwrap();
    /// assert_eq!((*first_name, *first_score), ("Chris", 100));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) per iteration step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.raw.as_slice().iter(),
        }
    }

    /// Gets an iterator over the keys of the collection, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values(["a", "b"]);
    /// let keys: Vec<_> = line.keys().copied().collect();
    /// assert_eq!(keys, [0, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the collection, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub(crate) fn entries(&self) -> &[(K, V)] {
        self.raw.as_slice()
    }
}

impl<V> Collection<usize, V> {
    /// Builds a list-like collection from a finite ordered sequence of
    /// values, auto-indexed with sequential keys `0..n-1`.
    ///
    /// Round-trips with [`to_vec`](Collection::to_vec):
    /// `Collection::from_values(xs).to_vec() == xs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([10, 20, 30]);
    /// assert_eq!(line.to_pairs(), [(0, 10), (1, 20), (2, 30)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().enumerate().collect()
    }

    /// Appends a value at the end of the collection, assigning the next
    /// sequential integer key (one past the current maximum key, or 0 when
    /// the collection is empty).
    ///
    /// This is one of the two in-place mutators; it changes the receiver and
    /// returns it again for chaining. To append several values at once, use
    /// [`Extend`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let mut line = Collection::new();
    /// line.push(1).push(2).push(3);
    /// assert_eq!(line.to_pairs(), [(0, 1), (1, 2), (2, 3)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) for the key-maximum scan (keys need not be contiguous after
    /// [`slice`](Collection::slice) or [`filter`](Collection::filter)).
    pub fn push(&mut self, value: V) -> &mut Self {
        let next = self.keys().max().map_or(0, |max| max + 1);
        self.raw.insert(next, value);
        self
    }
}

impl<K: Hash + Eq + Clone, V> Collection<K, V> {
    /// Builds a collection from explicit key/value pairs, order preserved.
    ///
    /// A duplicate key replaces the previously stored value and keeps the
    /// entry at its original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from_pairs([("name", "Christian"), ("country", "Indonesia")]);
    /// assert_eq!(map.to_pairs(), [("name", "Christian"), ("country", "Indonesia")]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the collection's key type, but
    /// `Hash` and `Eq` on the borrowed form *must* match those of the key
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([(1, "a")]);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([(1, "a")]);
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_key_value(key)
    }

    /// Returns `true` if the collection contains the specified key.
    ///
    /// For membership of a *value*, see [`contains`](Collection::contains).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([(1, "a")]);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.contains_key(key)
    }

    /// Removes and returns the last element in iteration order.
    ///
    /// This is one of the two in-place mutators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the collection has zero elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::{Collection, Error};
    ///
    /// let mut line = Collection::from_values([1, 2, 3]);
    /// assert_eq!(line.pop(), Ok(3));
    /// assert_eq!(line.to_vec(), [1, 2]);
    ///
    /// let mut empty: Collection<usize, i32> = Collection::new();
    /// assert_eq!(empty.pop(), Err(Error::EmptyCollection));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) average.
    pub fn pop(&mut self) -> Result<V> {
        self.raw.pop_last().map(|(_, value)| value).ok_or(Error::EmptyCollection)
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Returns the values of the collection as a plain vector, in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let line = Collection::from_values([1, 2, 3]);
    /// assert_eq!(line.to_vec(), [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec(&self) -> Vec<V> {
        self.entries().iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the entries of the collection as a plain vector of pairs, in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.to_pairs(), [("a", 1), ("b", 2)]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(K, V)> {
        self.entries().to_vec()
    }
}

impl<K: Clone, V: Clone> Clone for Collection<K, V> {
    fn clone(&self) -> Self {
        Collection {
            raw: self.raw.clone(),
        }
    }
}

impl<K: Hash, V: Hash> Hash for Collection<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Collection<K, V> {
    /// Two collections are equal iff they hold the same key/value pairs in
    /// the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for Collection<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Collection::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for Collection<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.raw.insert(k, v);
        }
    }
}

impl<V> Extend<V> for Collection<usize, V> {
    /// Appends every value with [`push`](Collection::push) semantics: each
    /// gets the next sequential integer key.
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let mut line: Collection<usize, i32> = Collection::new();
    /// line.extend([1, 2, 3]);
    /// assert_eq!(line.to_pairs(), [(0, 1), (1, 2), (2, 3)]);
    /// ```
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        // One key-maximum scan for the whole batch, not one per element.
        let mut next = self.keys().max().map_or(0, |max| max + 1);
        for value in iter {
            self.raw.insert(next, value);
            next += 1;
        }
    }
}

impl<K: Hash + Eq + Clone, V, const N: usize> From<[(K, V); N]> for Collection<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, Q, V> Index<&Q> for Collection<K, V>
where
    K: Borrow<Q> + Hash + Eq + Clone,
    Q: ?Sized + Hash + Eq,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Hash + Eq + Clone, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the collection, in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowmap::Collection;
    ///
    /// let map = Collection::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((2, "b")));
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty `collection::Iter`.
    ///
    /// ```
    /// # use flowmap::collection;
    /// let iter: collection::Iter<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter { inner: [].iter() }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `collection::IntoIter`.
    ///
    /// ```
    /// # use flowmap::collection;
    /// let iter: collection::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Default for Keys<'_, K, V> {
    /// Creates an empty `collection::Keys`.
    ///
    /// ```
    /// # use flowmap::collection;
    /// let iter: collection::Keys<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Keys {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Default for Values<'_, K, V> {
    /// Creates an empty `collection::Values`.
    ///
    /// ```
    /// # use flowmap::collection;
    /// let iter: collection::Values<'_, u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Values {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}
