//! Monad type class - sequencing computations within a container.
//!
//! `Monad` extends [`Applicative`] with
//! [`flat_map`](Monad::flat_map), which lets the result of one
//! computation decide which computation runs next.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use super::higher::TypeConstructor;

/// A type class for containers that support dependent sequencing.
///
/// # Laws
///
/// See the module documentation for the identity and associativity
/// statements; `flatten(pure(x)) == x` follows from them.
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Monad;
///
/// let chained = Some(5).flat_map(|n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(chained, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a container-returning function to the inner value and
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Monad;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.flat_map(|n| Ok(n * 2)), Ok::<i32, String>(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map`, matching the standard library's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// The first computation still happens; only its value is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Flattens one level of container nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(3));
    /// assert_eq!(nested.flatten_container(), Some(3));
    /// ```
    #[inline]
    fn flatten_container<B>(self) -> Self::WithType<B>
    where
        Self: Sized + TypeConstructor,
        Self: TypeConstructor<Inner = <Self as TypeConstructor>::WithType<B>>,
        B: 'static,
    {
        self.flat_map(|inner| inner)
    }
}

impl<A> Monad for Option<A> {
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + 'static,
        B: 'static,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_flat_map_chains() {
        let result = Some(5).flat_map(|n| Some(n + 1)).flat_map(|n| Some(n * 2));
        assert_eq!(result, Some(12));
    }

    #[test]
    fn result_flat_map_short_circuits() {
        let failure: Result<i32, String> = Err("nope".to_string());
        assert_eq!(failure.flat_map(|n| Ok(n + 1)), Err("nope".to_string()));
    }

    #[test]
    fn flatten_container_unnests() {
        let nested: Result<Result<i32, String>, String> = Ok(Ok(2));
        assert_eq!(nested.flatten_container(), Ok(2));
    }
}
