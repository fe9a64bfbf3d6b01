//! Applicative type class - lifting pure values into a container.
//!
//! `Applicative` extends [`Apply`] with [`pure`](Applicative::pure),
//! which wraps an ordinary value in the container without any effect.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::apply::Apply;

/// A type class for containers into which plain values can be lifted.
///
/// # Laws
///
/// `pure` is a two-sided identity for `apply`; see the module docs for
/// the identity, homomorphism, and interchange statements.
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
/// ```
pub trait Applicative: Apply {
    /// Lifts a plain value into the container.
    ///
    /// The value must be `Clone`: a re-runnable effect instance yields
    /// it anew on every invocation, so a single-use value cannot be
    /// lifted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Applicative;
    ///
    /// let x: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(x, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;
}

impl<A> Applicative for Option<A> {
    fn pure<B>(value: B) -> Option<B>
    where
        B: Clone + 'static,
    {
        Some(value)
    }
}

impl<T, E> Applicative for Result<T, E> {
    fn pure<B>(value: B) -> Result<B, E>
    where
        B: Clone + 'static,
    {
        Ok(value)
    }
}
