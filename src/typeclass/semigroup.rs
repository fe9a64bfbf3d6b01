//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup witness is how generic code in this crate is told "this
//! is how two values of this type merge" - it is always supplied
//! explicitly, either as a `Semigroup` instance or as a bare combine
//! function (see
//! [`combine_with`](super::apply::combine_with)).
//!
//! # Laws
//!
//! ## Associativity
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// `combine` must be associative:
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Semigroup;
///
/// let greeting = String::from("Hello, ").combine(String::from("World!"));
/// assert_eq!(greeting, "Hello, World!");
///
/// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Option<T> {
    /// Merges the contained values when both sides are present,
    /// otherwise keeps whichever side is.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(first), Some(second)) => Some(first.combine(second)),
            (Some(first), None) => Some(first),
            (None, second) => second,
        }
    }
}
