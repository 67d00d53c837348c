//! Type class traits for functional programming abstractions.
//!
//! This module provides the small set of type classes the persistent
//! structures plug into:
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining containers
//! - [`Monad`]: Sequencing computations with dependency (monadic bind)
//! - [`Foldable`]: Folding structures to summary values
//!
//! `Option` is the crate's optional/maybe type; together with its
//! [`Monad`] instance it gives the familiar `bind`/`and_then` chaining
//! without a bespoke wrapper. `Result` and `Vec` carry instances as well,
//! as do the persistent structures.
//!
//! # Examples
//!
//! ```rust
//! use evergreen::typeclass::{Applicative, Monad};
//!
//! let result = Some(5)
//!     .flat_map(|n| if n > 0 { Some(n * 2) } else { None })
//!     .flat_map(|n| Some(n + 1));
//! assert_eq!(result, Some(11));
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
