//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` extends [`Applicative`] with `flat_map` (bind), letting the
//! result of one computation choose the next one. `Option` with this
//! instance is the crate's optional/maybe type: absence short-circuits a
//! chain of dependent steps without any sentinel values.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left identity**: `Self::pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(Self::pure) == m`
//! - **Associativity**:
//!   `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use evergreen::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens the result.
    ///
    /// This is Haskell's `>>=` (bind); on `Option` and `Result` it
    /// coincides with the standard library's `and_then`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Monad for Option<A> {
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A, E: Clone> Monad for Result<A, E> {
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
