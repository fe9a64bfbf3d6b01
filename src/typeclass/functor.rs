//! Functor type class - mapping over the value inside a container.
//!
//! A `Functor` is a type whose contained value(s) can be transformed
//! without changing the container's structure. It is the weakest of the
//! contracts in this crate and the supertrait of all the others.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # A note on function bounds
//!
//! The mapped function is bounded `Fn(..) + 'static` rather than
//! `FnOnce`: a re-runnable thunk stores the function and may call it
//! once per invocation, so single-shot closures cannot populate this
//! contract. Plain data instances (`Option`, `Result`, `Either`) simply
//! inherit the stricter bound.

use super::higher::TypeConstructor;

/// A type class for containers whose contents can be mapped over.
///
/// # Laws
///
/// Mapping the identity function is a no-op, and mapping two functions
/// in sequence equals mapping their composition:
///
/// ```text
/// fa.fmap(|x| x)        == fa
/// fa.fmap(f).fmap(g)    == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Functor;
///
/// let present: Option<i32> = Some(5);
/// assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
///
/// let absent: Option<i32> = None;
/// assert_eq!(absent.fmap(|n| n.to_string()), None);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(21);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(42));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// The replacement must be `Clone` because a re-runnable effect
    /// yields it anew on every invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value inside the functor, keeping only the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}
