//! Functor type class - mapping over values inside a context.

use super::higher::TypeConstructor;

/// A type class for types whose contained values can be mapped over.
///
/// # Laws
///
/// All `Functor` implementations must satisfy:
///
/// - **Identity**: `container.fmap(|x| x) == container`
/// - **Composition**: `container.fmap(f).fmap(g) == container.fmap(|x| g(f(x)))`
///
/// # Examples
///
/// ```rust
/// use evergreen::typeclass::Functor;
///
/// assert_eq!(Some(2).fmap(|n| n * 10), Some(20));
/// assert_eq!(vec![1, 2, 3].fmap(|n| n + 1), vec![2, 3, 4]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every contained value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to every contained value by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evergreen::typeclass::Functor;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let doubled = numbers.fmap_ref(|n| n * 2);
    /// assert_eq!(numbers.len(), 3); // original still usable
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    fn fmap<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(&mut function)
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(&mut function)
    }
}

impl<A, E> Functor for Result<A, E>
where
    E: Clone,
{
    fn fmap<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        self.map(&mut function)
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> Result<B, E>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<A> Functor for Vec<A> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn test_option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|value| value * 2), expected);
    }

    #[rstest]
    fn test_functor_identity_law() {
        let values = vec![1, 2, 3];
        assert_eq!(values.clone().fmap(|value| value), values);
    }

    #[rstest]
    fn test_functor_composition_law() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;
        let composed = Some(3).fmap(add_one).fmap(double);
        let fused = Some(3).fmap(|value| double(add_one(value)));
        assert_eq!(composed, fused);
    }

    #[rstest]
    fn test_result_fmap_ref_clones_error() {
        let failure: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failure.fmap_ref(|value| value + 1), Err("boom".to_string()));
        // original still holds the error
        assert!(failure.is_err());
    }
}
