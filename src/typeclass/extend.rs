//! Extend type class - computations over the whole container.
//!
//! `Extend` is the dual of sequencing: instead of feeding the *value*
//! of a computation into the next step, it feeds the *computation
//! itself*. This lets a step be parameterized over "the rest of the
//! computation" - re-running it, probing it, or summarizing it.
//!
//! # Laws
//!
//! Extending with a function that merely runs the container is a
//! no-op, and nested extensions compose:
//!
//! ```text
//! w.extend(f).extend(g) == w.extend(|x| g(x.extend(f)))
//! ```

use super::functor::Functor;

/// A type class for containers that can map over their own whole.
///
/// # Laws
///
/// Nested extensions compose; see the module documentation.
///
/// # Examples
///
/// ```rust
/// use thunkful::effect::Thunk;
/// use thunkful::typeclass::Extend;
///
/// let base = Thunk::of(41);
/// let extended = base.extend(|whole: Thunk<i32>| whole.run() + 1);
/// assert_eq!(extended.run(), 42);
/// ```
pub trait Extend: Functor + Clone {
    /// Applies a function to the whole container, deferring it inside
    /// a new container of the function's result.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self) -> B + 'static,
        B: 'static;

    /// Nests the container inside itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::effect::Thunk;
    /// use thunkful::typeclass::Extend;
    ///
    /// let nested = Thunk::of(7).duplicated();
    /// assert_eq!(nested.run().run(), 7);
    /// ```
    #[inline]
    fn duplicated(self) -> Self::WithType<Self>
    where
        Self: Sized + 'static,
    {
        self.extend(|whole| whole)
    }
}
