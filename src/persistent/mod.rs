//! Persistent (immutable) data structures.
//!
//! This module provides immutable data structures that use structural
//! sharing to minimize copying:
//!
//! - [`PersistentHashMap`]: Persistent hash map (HAMT)
//! - [`PersistentList`]: Persistent singly-linked list
//! - [`PersistentQueue`]: Persistent FIFO queue (banker's queue)
//!
//! # Structural Sharing
//!
//! Update operations never modify a node reachable from an existing value;
//! they allocate replacements only along the modified path and share every
//! untouched subtree with the previous version by reference count.
//!
//! # Examples
//!
//! ## `PersistentHashMap`
//!
//! ```rust
//! use evergreen::persistent::PersistentHashMap;
//!
//! let map = PersistentHashMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//! assert_eq!(map.get("one"), Some(&1));
//!
//! // Structural sharing: the original map is preserved
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get("one"), Some(&1));       // Original unchanged
//! assert_eq!(updated.get("one"), Some(&100)); // New version
//! ```
//!
//! ## `PersistentList`
//!
//! ```rust
//! use evergreen::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```
//!
//! ## `PersistentQueue`
//!
//! ```rust
//! use evergreen::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new().push_back(1).push_back(2);
//! assert_eq!(queue.front(), Some(&1));
//!
//! let shorter = queue.pop_front();
//! assert_eq!(queue.len(), 2);   // Original unchanged
//! assert_eq!(shorter.len(), 1); // New queue
//! ```

use std::fmt;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Error Type
// =============================================================================

/// The error returned by fallible lookups when the requested entry is absent.
///
/// All other operations on the persistent structures are total: the only
/// user-visible failure in this crate is a lookup that insists on an entry
/// that is not there.
///
/// # Examples
///
/// ```rust
/// use evergreen::persistent::{NoSuchEntry, PersistentHashMap};
///
/// let map: PersistentHashMap<String, i32> = PersistentHashMap::new();
/// assert_eq!(map.try_get("missing"), Err(NoSuchEntry));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchEntry;

impl fmt::Display for NoSuchEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no such entry in persistent data structure")
    }
}

impl std::error::Error for NoSuchEntry {}

mod hashmap;
mod list;
mod queue;

pub use hashmap::DefaultHashBuilder;
pub use hashmap::PersistentHashMap;
pub use hashmap::PersistentHashMapIntoIterator;
pub use hashmap::PersistentHashMapIterator;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;
pub use queue::PersistentQueue;
pub use queue::PersistentQueueIterator;

// =============================================================================
// Tests
// =============================================================================
