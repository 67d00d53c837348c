//! Applicative type class - lifting values and combining contexts.

use super::functor::Functor;

/// A type class for contexts a pure value can be lifted into and whose
/// contents can be combined pairwise.
///
/// # Laws
///
/// - **Identity**: `Self::pure(x).map2(other, |x, y| (x, y))` pairs `x`
///   with every value of `other`
/// - **Homomorphism**: `Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))`
///
/// # Examples
///
/// ```rust
/// use evergreen::typeclass::Applicative;
///
/// let sum = Some(1).map2(Some(2), |a, b| a + b);
/// assert_eq!(sum, Some(3));
///
/// let missing = Some(1).map2(None::<i32>, |a, b| a + b);
/// assert_eq!(missing, None);
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into this context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function held in this context to a value held in another.
    ///
    /// This is Haskell's `<*>` with the arguments flipped to read
    /// left-to-right; it is `map2` specialized to application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::typeclass::Applicative;
    ///
    /// let value = Some(21);
    /// assert_eq!(value.apply(Some(|n: i32| n * 2)), Some(42));
    /// assert_eq!(value.apply(None::<fn(i32) -> i32>), None);
    /// ```
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B,
    {
        self.map2(function, |value, function| function(value))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Applicative for Option<A> {
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(first), Some(second)) => Some(function(first, second)),
            _ => None,
        }
    }
}

impl<A, E: Clone> Applicative for Result<A, E> {
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        Ok(function(self?, other?))
    }
}
