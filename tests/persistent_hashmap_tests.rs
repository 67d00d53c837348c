//! Unit tests for `PersistentHashMap`.
//!
//! Covers the public surface, snapshot independence, and the trie-shape
//! scenarios (digit collisions, branch collapse) driven by a deterministic
//! hasher injected through `with_hasher`.

use evergreen::persistent::{NoSuchEntry, PersistentHashMap};
use rstest::rstest;
use std::hash::{BuildHasher, Hasher};

// =============================================================================
// Deterministic test hashers
// =============================================================================

/// Hashes a `u32` key to itself, making digit paths fully predictable:
/// key `k` descends through digits `k & 31`, `(k >> 5) & 31`, ...
#[derive(Clone, Default)]
struct Identity32Builder;

struct Identity32Hasher(u64);

impl Hasher for Identity32Hasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = (self.0 << 8) | u64::from(byte);
        }
    }

    fn write_u32(&mut self, value: u32) {
        self.0 = u64::from(value);
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

impl BuildHasher for Identity32Builder {
    type Hasher = Identity32Hasher;

    fn build_hasher(&self) -> Identity32Hasher {
        Identity32Hasher(0)
    }
}

/// Hashes every key to the same value: all pairs are full hash collisions.
#[derive(Clone, Default)]
struct ConstantBuilder;

struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        42
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

impl BuildHasher for ConstantBuilder {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> ConstantHasher {
        ConstantHasher
    }
}

// =============================================================================
// Basic operations
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: PersistentHashMap<String, i32> = PersistentHashMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.get("key"), None);
}

#[rstest]
fn test_singleton_creates_single_entry_map() {
    let map = PersistentHashMap::singleton("key".to_string(), 42);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("key"), Some(&42));
}

#[rstest]
fn test_insert_multiple_entries() {
    let map = PersistentHashMap::new()
        .insert("one".to_string(), 1)
        .insert("two".to_string(), 2)
        .insert("three".to_string(), 3);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("one"), Some(&1));
    assert_eq!(map.get("two"), Some(&2));
    assert_eq!(map.get("three"), Some(&3));
    assert_eq!(map.get("four"), None);
}

#[rstest]
fn test_insert_overwrite_keeps_length() {
    let map = PersistentHashMap::new()
        .insert("key".to_string(), 1)
        .insert("key".to_string(), 2);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("key"), Some(&2));
}

#[rstest]
fn test_borrowed_key_lookup() {
    let map = PersistentHashMap::new().insert("hello".to_string(), 42);
    // &str lookups against String keys
    assert!(map.contains_key("hello"));
    assert_eq!(map.try_get("hello"), Ok(&42));
    assert_eq!(map.try_get("world"), Err(NoSuchEntry));
    assert_eq!(map.get_or("world", &7), &7);
}

// =============================================================================
// The concrete end-to-end scenario
// =============================================================================

#[rstest]
fn test_insert_three_remove_one_with_live_snapshot() {
    let three = PersistentHashMap::new()
        .insert("a".to_string(), 1)
        .insert("b".to_string(), 2)
        .insert("c".to_string(), 3);

    assert_eq!(three.get("a"), Some(&1));
    assert_eq!(three.get("b"), Some(&2));
    assert_eq!(three.get("c"), Some(&3));
    assert!(!three.contains_key("z"));

    let without_b = three.remove("b");
    assert!(!without_b.contains_key("b"));
    assert_eq!(without_b.get("a"), Some(&1));
    assert_eq!(without_b.get("c"), Some(&3));

    // The earlier snapshot still holds all three entries.
    assert!(three.contains_key("b"));
    assert_eq!(three.len(), 3);
}

// =============================================================================
// Snapshot independence
// =============================================================================

#[rstest]
fn test_snapshot_independence_under_divergent_updates() {
    let base = PersistentHashMap::new().insert("shared".to_string(), 0);
    let left = base.insert("left".to_string(), 1);
    let right = base.insert("right".to_string(), 2);

    assert_eq!(base.len(), 1);
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 2);
    assert!(!left.contains_key("right"));
    assert!(!right.contains_key("left"));
    assert_eq!(left.get("shared"), Some(&0));
    assert_eq!(right.get("shared"), Some(&0));
}

#[rstest]
fn test_remove_of_absent_key_returns_equal_map() {
    let map = PersistentHashMap::new()
        .insert("a".to_string(), 1)
        .insert("b".to_string(), 2);
    let same = map.remove("missing");
    assert_eq!(map, same);
}

#[rstest]
fn test_insert_then_remove_restores_observable_state() {
    let original = PersistentHashMap::new().insert("a".to_string(), 1);
    let round_trip = original.insert("b".to_string(), 2).remove("b");
    assert_eq!(original, round_trip);
}

// =============================================================================
// Trie-shape scenarios (deterministic hasher)
// =============================================================================

#[rstest]
fn test_digit_collision_grows_one_level() {
    // 7 and 39 share digit 7 at depth 0 and diverge at depth 1
    // (39 = 7 + 32, so its second digit is 1 while 7's is 0).
    let map: PersistentHashMap<u32, &str, _> = PersistentHashMap::with_hasher(Identity32Builder)
        .insert(7, "seven")
        .insert(39, "thirty-nine");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&7), Some(&"seven"));
    assert_eq!(map.get(&39), Some(&"thirty-nine"));
}

#[rstest]
fn test_deep_digit_collision() {
    // Agree on the first four digits (20 bits), diverge at depth 4.
    let low = 0x000A_BCDE_u32;
    let high = low | (1 << 20);
    let map: PersistentHashMap<u32, u32, _> = PersistentHashMap::with_hasher(Identity32Builder)
        .insert(low, 1)
        .insert(high, 2);

    assert_eq!(map.get(&low), Some(&1));
    assert_eq!(map.get(&high), Some(&2));
}

#[rstest]
fn test_removal_collapses_emptied_branches() {
    let map: PersistentHashMap<u32, u32, _> = PersistentHashMap::with_hasher(Identity32Builder)
        .insert(7, 70)
        .insert(39, 390);

    let one_left = map.remove(&39);
    assert_eq!(one_left.len(), 1);
    assert_eq!(one_left.get(&7), Some(&70));
    assert_eq!(one_left.get(&39), None);

    let emptied = one_left.remove(&7);
    assert!(emptied.is_empty());
    // Emptied map accepts new entries again.
    assert_eq!(emptied.insert(1, 10).get(&1), Some(&10));
}

#[rstest]
fn test_deep_removal_replaces_subtree_in_ancestors() {
    // All eight keys share their three leading digits (10, 10, 10), so
    // removals happen four levels down; each pruned subtree must be
    // written back into every ancestor branch on the way up.
    let prefix = 0b01010_01010_01010_u32;
    let key_at = |index: u32| prefix | (index << 15);

    let mut map: PersistentHashMap<u32, u32, _> =
        PersistentHashMap::with_hasher(Identity32Builder);
    for index in 0..8 {
        map = map.insert(key_at(index), index);
    }
    let snapshot = map.clone();

    for index in 0..4 {
        map = map.remove(&key_at(index));
    }

    assert_eq!(map.len(), 4);
    for index in 0..4 {
        assert_eq!(map.get(&key_at(index)), None);
    }
    for index in 4..8 {
        assert_eq!(map.get(&key_at(index)), Some(&index));
    }
    // The pre-removal snapshot still holds all eight entries.
    assert_eq!(snapshot.len(), 8);
    for index in 0..8 {
        assert_eq!(snapshot.get(&key_at(index)), Some(&index));
    }
}

#[rstest]
#[should_panic(expected = "distinct keys share the same 32-bit hash")]
fn test_full_hash_collision_panics() {
    let _ = PersistentHashMap::with_hasher(ConstantBuilder)
        .insert(1_u32, "a")
        .insert(2_u32, "b");
}

#[rstest]
fn test_full_hash_collision_same_key_is_fine() {
    // Overwriting the same key never needs a collision bucket.
    let map = PersistentHashMap::with_hasher(ConstantBuilder)
        .insert(1_u32, "a")
        .insert(1_u32, "b");
    assert_eq!(map.get(&1), Some(&"b"));
    assert_eq!(map.len(), 1);
}

// =============================================================================
// Volume and iteration
// =============================================================================

#[rstest]
fn test_thousand_entries_round_trip() {
    let map: PersistentHashMap<i32, i32> = (0..1000).map(|index| (index, index * 3)).collect();
    assert_eq!(map.len(), 1000);
    for index in 0..1000 {
        assert_eq!(map.get(&index), Some(&(index * 3)));
    }

    let mut remaining = map.clone();
    for index in 0..500 {
        remaining = remaining.remove(&index);
    }
    assert_eq!(remaining.len(), 500);
    assert_eq!(map.len(), 1000); // snapshot untouched
}

#[rstest]
fn test_iteration_visits_every_entry_once() {
    let map: PersistentHashMap<i32, i32> = (0..100).map(|index| (index, index)).collect();
    let mut keys: Vec<i32> = map.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..100).collect::<Vec<_>>());
    assert_eq!(map.values().sum::<i32>(), (0..100).sum::<i32>());
}
