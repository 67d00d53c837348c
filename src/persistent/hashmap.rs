//! Persistent (immutable) hash map based on HAMT.
//!
//! This module provides [`PersistentHashMap`], an immutable hash map
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentHashMap` is a hash array mapped trie (HAMT): a 32-way
//! branching trie navigated by successive 5-bit digits of a 32-bit key
//! hash. Each branch stores only its present children, addressed through a
//! presence bitmap, and every update clones nothing but the nodes on the
//! path from the root to the affected leaf. Everything off that path is
//! shared with the previous version by reference count.
//!
//! - O(log32 N) get (effectively O(1): at most 7 levels for 32-bit hashes)
//! - O(log32 N) insert and remove
//! - O(1) len, `is_empty`, and map cloning
//!
//! All operations return new maps without modifying the original, so any
//! number of snapshots can be read concurrently while newer versions are
//! being produced elsewhere.
//!
//! # Examples
//!
//! ```rust
//! use evergreen::persistent::PersistentHashMap;
//!
//! let map = PersistentHashMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//!
//! assert_eq!(map.get("one"), Some(&1));
//!
//! // Structural sharing: the original map is preserved
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get("one"), Some(&1));       // Original unchanged
//! assert_eq!(updated.get("one"), Some(&100)); // New version
//! ```
//!
//! # Hashing
//!
//! The map is parameterized over a [`BuildHasher`] and truncates the 64-bit
//! `Hasher::finish` result to 32 bits; seven 5-bit digits exhaust the hash,
//! which bounds the trie depth. The default builder is selected by feature
//! flag (std `RandomState`, `rustc-hash` under `fxhash`, `ahash` under
//! `ahash`) and any other builder can be injected via
//! [`PersistentHashMap::with_hasher`].
//!
//! # Known limitation
//!
//! There is no leaf-level collision bucket. Two *distinct* keys whose full
//! 32-bit hashes are identical cannot both be stored: once the digit stream
//! is exhausted they would route to digit 0 at every further level and grow
//! the trie without bound. Inserting such a pair panics with a diagnostic
//! message instead. With a well-distributed hasher this is a ~2^-32 event
//! per pair; a hasher that cannot guarantee it should not be plugged in.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::{NoSuchEntry, ReferenceCounter};
use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// Constants
// =============================================================================

/// Bits consumed from the hash per trie level.
const BITS_PER_LEVEL: u32 = 5;

/// Mask extracting one digit (2^5 = 32-way branching).
const DIGIT_MASK: u32 = (1 << BITS_PER_LEVEL) - 1;

/// Inline capacity for branch child arrays before spilling to the heap.
const INLINE_CHILDREN: usize = 4;

// =============================================================================
// Default Hasher Selection
// =============================================================================

/// The default [`BuildHasher`] used by [`PersistentHashMap::new`].
///
/// `ahash::RandomState` when the `ahash` feature is enabled.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// The default [`BuildHasher`] used by [`PersistentHashMap::new`].
///
/// `rustc_hash::FxBuildHasher` when the `fxhash` feature is enabled.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The default [`BuildHasher`] used by [`PersistentHashMap::new`].
///
/// The standard library's `RandomState` unless an alternate hasher feature
/// (`fxhash`, `ahash`) is enabled.
#[cfg(not(any(feature = "ahash", feature = "fxhash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// BitIndexedArray
// =============================================================================

/// A compact sparse array addressed by a 5-bit digit (0–31).
///
/// A 32-bit presence bitmap flags which digits hold an entry; the entries
/// themselves are densely packed in ascending digit order, so the array
/// costs space proportional to its population, not its 32-slot capacity.
/// The position of a digit's entry is the number of set bits strictly
/// below that digit in the bitmap.
///
/// Invariant: `bitmap.count_ones() == entries.len()`.
#[derive(Clone)]
struct BitIndexedArray<T> {
    bitmap: u32,
    entries: SmallVec<[T; INLINE_CHILDREN]>,
}

impl<T> BitIndexedArray<T> {
    fn new() -> Self {
        Self {
            bitmap: 0,
            entries: SmallVec::new(),
        }
    }

    const fn bit(digit: u32) -> u32 {
        1 << (digit & DIGIT_MASK)
    }

    /// Number of set bits strictly below `digit`: the entry's dense position.
    const fn offset(&self, digit: u32) -> usize {
        (self.bitmap & (Self::bit(digit) - 1)).count_ones() as usize
    }

    const fn contains(&self, digit: u32) -> bool {
        self.bitmap & Self::bit(digit) != 0
    }

    fn get(&self, digit: u32) -> Option<&T> {
        if self.contains(digit) {
            Some(&self.entries[self.offset(digit)])
        } else {
            None
        }
    }

    /// Overwrites the entry at `digit`, or inserts it, shifting later
    /// entries one position right. Unrelated entries keep their order.
    fn set(&mut self, digit: u32, value: T) {
        let offset = self.offset(digit);
        if self.contains(digit) {
            self.entries[offset] = value;
        } else {
            self.bitmap |= Self::bit(digit);
            self.entries.insert(offset, value);
        }
    }

    /// Removes the entry at `digit`, shifting later entries left.
    /// No-op when the digit is absent.
    fn remove(&mut self, digit: u32) {
        if self.contains(digit) {
            let offset = self.offset(digit);
            self.bitmap &= !Self::bit(digit);
            self.entries.remove(offset);
        }
    }

    const fn is_empty(&self) -> bool {
        self.bitmap == 0
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

// =============================================================================
// HashCursor
// =============================================================================

/// A 32-bit hash being consumed 5 bits at a time during a descent.
///
/// `original` is never mutated and identifies the hashed key for O(1)
/// collision filtering at leaves; `remaining` loses one digit per
/// extraction. After seven extractions `remaining` is zero and every
/// further digit is 0. The cursor is `Copy`: each recursive call owns its
/// own value, so independent descents never interfere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HashCursor {
    original: u32,
    remaining: u32,
}

impl HashCursor {
    const fn new(hash: u32) -> Self {
        Self {
            original: hash,
            remaining: hash,
        }
    }

    const fn original(self) -> u32 {
        self.original
    }

    /// Returns the next 5-bit digit and advances the cursor.
    const fn next_digit(&mut self) -> u32 {
        let digit = self.remaining & DIGIT_MASK;
        self.remaining >>= BITS_PER_LEVEL;
        digit
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// A single key/value pair together with its hash cursor.
///
/// The cursor's `original` half disambiguates hash collisions without
/// re-descending; its `remaining` half is the state the cursor had when the
/// leaf was created, which lets a split re-insert the existing pair at the
/// correct depth.
#[derive(Clone)]
struct Leaf<K, V> {
    cursor: HashCursor,
    key: K,
    value: V,
}

impl<K, V> Leaf<K, V> {
    fn matches<Q>(&self, key: &Q, cursor: HashCursor) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.cursor.original() == cursor.original() && self.key.borrow() == key
    }
}

/// Internal trie node: a closed, two-variant hierarchy.
#[derive(Clone)]
enum Node<K, V> {
    /// Interior node owning a sparse array of shared children.
    Branch(BitIndexedArray<ReferenceCounter<Node<K, V>>>),
    /// Terminal node owning one key/value pair.
    Leaf(Leaf<K, V>),
}

impl<K, V> Node<K, V> {
    fn empty_branch() -> Self {
        Self::Branch(BitIndexedArray::new())
    }
}

impl<K: Clone + Eq, V: Clone> Node<K, V> {
    /// Inserts along the cursor's digit path, cloning only this path.
    ///
    /// Returns the replacement node and whether a new entry was added
    /// (as opposed to an existing key being overwritten).
    fn assoc(&self, key: K, value: V, mut cursor: HashCursor) -> (Self, bool) {
        match self {
            Self::Branch(children) => {
                // Shallow clone: the entry sequence is copied, but each
                // child is a refcount bump, never a deep copy.
                let mut children = children.clone();
                let digit = cursor.next_digit();
                let (child, added) = match children.get(digit) {
                    Some(existing) => existing.assoc(key, value, cursor),
                    None => (Self::Leaf(Leaf { cursor, key, value }), true),
                };
                children.set(digit, ReferenceCounter::new(child));
                (Self::Branch(children), added)
            }
            Self::Leaf(leaf) => {
                if leaf.matches(&key, cursor) {
                    (Self::Leaf(Leaf { cursor, key, value }), false)
                } else {
                    // A full 32-bit collision between distinct keys would
                    // route to digit 0 at every level past cursor
                    // exhaustion; there is no collision bucket, so fail
                    // fast instead of growing the trie without bound.
                    assert!(
                        leaf.cursor.original() != cursor.original(),
                        "distinct keys share the same 32-bit hash; \
                         PersistentHashMap has no collision bucket"
                    );
                    // The digit paths diverge at or below this depth: grow
                    // the trie by re-inserting the existing pair (with its
                    // stored cursor) and then the incoming one.
                    let (branch, _) = Self::empty_branch().assoc(
                        leaf.key.clone(),
                        leaf.value.clone(),
                        leaf.cursor,
                    );
                    branch.assoc(key, value, cursor)
                }
            }
        }
    }

    /// Removes along the cursor's digit path, cloning only this path.
    ///
    /// Returns `None` when this subtree became empty, which tells the
    /// parent to prune its entry; empty branches collapse all the way up.
    fn dissoc<Q>(&self, key: &Q, mut cursor: HashCursor) -> Option<Self>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self {
            Self::Branch(children) => {
                let mut children = children.clone();
                let digit = cursor.next_digit();
                let outcome = children.get(digit).map(|child| child.dissoc(key, cursor));
                match outcome {
                    // No child on the digit path: nothing below holds the
                    // key (the facade verified presence at the top level).
                    None => {}
                    Some(None) => children.remove(digit),
                    Some(Some(child)) => children.set(digit, ReferenceCounter::new(child)),
                }
                if children.is_empty() {
                    None
                } else {
                    Some(Self::Branch(children))
                }
            }
            Self::Leaf(leaf) => {
                // The facade only descends after confirming the key is
                // present, so this must be an exact match; anything else
                // means the trie shape invariant is broken.
                assert!(
                    leaf.matches(key, cursor),
                    "removal reached a non-matching leaf: trie invariant violated"
                );
                None
            }
        }
    }

    /// Pure descent; reads never allocate.
    fn get<'a, Q>(&'a self, key: &Q, mut cursor: HashCursor) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self {
            Self::Branch(children) => {
                let digit = cursor.next_digit();
                children.get(digit).and_then(|child| child.get(key, cursor))
            }
            Self::Leaf(leaf) => leaf.matches(key, cursor).then_some(&leaf.value),
        }
    }
}

// =============================================================================
// PersistentHashMap Definition
// =============================================================================

/// A persistent (immutable) hash map based on HAMT.
///
/// `PersistentHashMap` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns. Cloning
/// a map is an O(1) reference copy, and any two maps derived from one
/// another share all of their unmodified trie structure.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log32 N)        |
/// | `insert`       | O(log32 N)        |
/// | `remove`       | O(log32 N)        |
/// | `contains_key` | O(log32 N)        |
/// | `len`          | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use evergreen::persistent::PersistentHashMap;
///
/// let map = PersistentHashMap::singleton("key".to_string(), 42);
/// assert_eq!(map.get("key"), Some(&42));
/// ```
pub struct PersistentHashMap<K, V, S = DefaultHashBuilder> {
    /// Root of the trie; an empty map is a branch with an empty bitmap.
    root: ReferenceCounter<Node<K, V>>,
    /// Number of entries, maintained across updates.
    length: usize,
    /// Hasher builder shared by all snapshots derived from this map.
    hash_builder: S,
}

impl<K, V, S: Clone> Clone for PersistentHashMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            root: ReferenceCounter::clone(&self.root),
            length: self.length,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V> PersistentHashMap<K, V> {
    /// Creates a new empty map with the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map: PersistentHashMap<String, i32> = PersistentHashMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a map containing a single key-value pair.
    ///
    /// Like [`new`](Self::new), this pins the default hasher; use
    /// [`with_hasher`](Self::with_hasher) followed by `insert` to combine
    /// a single entry with a custom hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::singleton("key".to_string(), 42);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self
    where
        K: Clone + Hash + Eq,
        V: Clone,
    {
        Self::new().insert(key, value)
    }
}

impl<K, V, S> PersistentHashMap<K, V, S> {
    /// Creates a new empty map that hashes keys with `hash_builder`.
    ///
    /// The builder must be deterministic for the lifetime of the map and
    /// of every snapshot derived from it; derived snapshots carry a clone
    /// of the same builder, so leaf hashes stay comparable across
    /// versions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map: PersistentHashMap<String, i32, _> =
    ///     PersistentHashMap::with_hasher(RandomState::new());
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            root: ReferenceCounter::new(Node::empty_branch()),
            length: 0,
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let empty: PersistentHashMap<String, i32> = PersistentHashMap::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.insert("key".to_string(), 42);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<K: Clone + Hash + Eq, V: Clone, S: BuildHasher + Clone> PersistentHashMap<K, V, S> {
    /// Truncated 32-bit hash of a key; the trie consumes it as seven
    /// 5-bit digits.
    #[allow(clippy::cast_possible_truncation)]
    fn cursor_for<Q: Hash + ?Sized>(&self, key: &Q) -> HashCursor {
        HashCursor::new(self.hash_builder.hash_one(key) as u32)
    }

    /// Inserts a key-value pair, returning the new map version.
    ///
    /// If the map already contains the key, the value is replaced. The
    /// original map is never modified.
    ///
    /// # Complexity
    ///
    /// O(log32 N); allocates only the nodes on the root-to-leaf path.
    ///
    /// # Panics
    ///
    /// If a *different* key with an identical 32-bit hash is already
    /// present (see the module-level known limitation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map1 = PersistentHashMap::new().insert("key".to_string(), 1);
    /// let map2 = map1.insert("key".to_string(), 2);
    ///
    /// assert_eq!(map1.get("key"), Some(&1)); // Original unchanged
    /// assert_eq!(map2.get("key"), Some(&2)); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let cursor = self.cursor_for(&key);
        let (root, added) = self.root.assoc(key, value, cursor);
        Self {
            root: ReferenceCounter::new(root),
            length: if added { self.length + 1 } else { self.length },
            hash_builder: self.hash_builder.clone(),
        }
    }

    /// Removes a key, returning the new map version.
    ///
    /// If the key is absent the original map is returned unchanged (an
    /// O(1) clone, no fresh trie nodes). Branches emptied by the removal
    /// collapse and are pruned from their parents.
    ///
    /// # Complexity
    ///
    /// O(log32 N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::new()
    ///     .insert("a".to_string(), 1)
    ///     .insert("b".to_string(), 2);
    /// let removed = map.remove("a");
    ///
    /// assert_eq!(map.len(), 2);     // Original unchanged
    /// assert_eq!(removed.len(), 1); // New version
    /// assert_eq!(removed.get("a"), None);
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let cursor = self.cursor_for(key);
        // Verify presence before descending: Leaf::dissoc relies on it,
        // and an absent key must not cost any allocation.
        if self.root.get(key, cursor).is_none() {
            return self.clone();
        }
        let root = self
            .root
            .dissoc(key, cursor)
            .unwrap_or_else(Node::empty_branch);
        Self {
            root: ReferenceCounter::new(root),
            length: self.length - 1,
            hash_builder: self.hash_builder.clone(),
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash`
    /// and `Eq` on the borrowed form must match those for the key type.
    ///
    /// # Complexity
    ///
    /// O(log32 N); never allocates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::new().insert("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.root.get(key, self.cursor_for(key))
    }

    /// Returns the value for the key, or `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::new().insert("a".to_string(), 1);
    /// assert_eq!(map.get_or("a", &0), &1);
    /// assert_eq!(map.get_or("b", &0), &0);
    /// ```
    #[must_use]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value for the key, or [`NoSuchEntry`] if it is absent.
    ///
    /// This is the fallible counterpart of [`get`](Self::get) for callers
    /// that treat a missing entry as an error rather than a branch.
    ///
    /// # Errors
    ///
    /// [`NoSuchEntry`] when the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::{NoSuchEntry, PersistentHashMap};
    ///
    /// let map = PersistentHashMap::new().insert("a".to_string(), 1);
    /// assert_eq!(map.try_get("a"), Ok(&1));
    /// assert_eq!(map.try_get("b"), Err(NoSuchEntry));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, NoSuchEntry>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(NoSuchEntry)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::new().insert("key".to_string(), 42);
    ///
    /// assert!(map.contains_key("key"));
    /// assert!(!map.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an iterator over key-value pairs.
    ///
    /// Iteration order follows the trie (hash order) and is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::persistent::PersistentHashMap;
    ///
    /// let map = PersistentHashMap::new()
    ///     .insert("a".to_string(), 1)
    ///     .insert("b".to_string(), 2);
    ///
    /// let total: i32 = map.iter().map(|(_, value)| value).sum();
    /// assert_eq!(total, 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentHashMapIterator<'_, K, V> {
        let mut entries = Vec::with_capacity(self.length);
        Self::collect_entries(&self.root, &mut entries);
        PersistentHashMapIterator {
            entries,
            current_index: 0,
        }
    }

    fn collect_entries<'a>(node: &'a Node<K, V>, entries: &mut Vec<(&'a K, &'a V)>) {
        match node {
            Node::Branch(children) => {
                for child in children.iter() {
                    Self::collect_entries(child, entries);
                }
            }
            Node::Leaf(leaf) => entries.push((&leaf.key, &leaf.value)),
        }
    }

    /// Returns an iterator over keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of a [`PersistentHashMap`].
pub struct PersistentHashMapIterator<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
    current_index: usize,
}

impl<'a, K, V> Iterator for PersistentHashMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.entries.len() {
            None
        } else {
            let entry = self.entries[self.current_index];
            self.current_index += 1;
            Some(entry)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for PersistentHashMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len().saturating_sub(self.current_index)
    }
}

/// An owning iterator over key-value pairs of a [`PersistentHashMap`].
pub struct PersistentHashMapIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for PersistentHashMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PersistentHashMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: BuildHasher + Default> Default for PersistentHashMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Default + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        for (key, value) in iter {
            map = map.insert(key, value);
        }
        map
    }
}

impl<K, V, S> IntoIterator for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Item = (K, V);
    type IntoIter = PersistentHashMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let entries: Vec<(K, V)> = self
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        PersistentHashMapIntoIterator {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> PartialEq for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone + PartialEq,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        self.iter().all(|(key, value)| {
            other
                .get(key)
                .is_some_and(|other_value| other_value == value)
        })
    }
}

impl<K, V, S> Eq for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone + Eq,
    S: BuildHasher + Clone,
{
}

impl<K, V, S> fmt::Debug for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq + fmt::Debug,
    V: Clone + fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// `PersistentHashMap` is treated as a container of values with the key
/// type fixed, matching how maps are folded in most functional languages.
impl<K, V, S> TypeConstructor for PersistentHashMap<K, V, S> {
    type Inner = V;
    type WithType<B> = PersistentHashMap<K, B, S>;
}

impl<K, V, S> Foldable for PersistentHashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(accumulator, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        // Iteration order is unspecified, so fold_right is fold_left with
        // the argument order flipped.
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Tests
// =============================================================================
