//! # evergreen
//!
//! Persistent (immutable) data structures with structural sharing.
//!
//! ## Overview
//!
//! Every structure in this crate is a value type: update operations return
//! a *new* version and leave every previously observed version untouched
//! and fully usable. New versions share all unmodified substructure with
//! their predecessors, so updates are cheap and snapshots are free.
//!
//! - [`persistent::PersistentHashMap`]: hash map backed by a hash array
//!   mapped trie (HAMT) with path-copying updates
//! - [`persistent::PersistentList`]: singly-linked cons list
//! - [`persistent::PersistentQueue`]: banker's queue built from two lists
//! - [`typeclass`]: Functor/Applicative/Monad/Foldable vocabulary for
//!   `Option`, `Result` and the persistent structures
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `Arc` instead of `Rc`, so snapshots can
//!   cross thread boundaries
//! - `fxhash`: use `rustc-hash` as the map's default hasher
//! - `ahash`: use `ahash` as the map's default hasher
//!
//! ## Example
//!
//! ```rust
//! use evergreen::persistent::PersistentHashMap;
//!
//! let map = PersistentHashMap::new()
//!     .insert("a", 1)
//!     .insert("b", 2);
//! let updated = map.remove("b");
//!
//! assert!(map.contains_key("b"));       // earlier snapshot unchanged
//! assert!(!updated.contains_key("b"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use evergreen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod persistent;
pub mod typeclass;
