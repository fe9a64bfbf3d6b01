//! Alt type class - choosing between two values of the same shape.
//!
//! `Alt` captures "try this, and if it failed, use that" without
//! requiring an empty element (unlike a full `Alternative`): the
//! composed effect type has no failure-free empty value, so the weaker
//! contract is the one every type here can satisfy.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! a.alt(b).alt(c) == a.alt(b.alt(c))
//! ```
//!
//! ## Distributivity Law
//!
//! `fmap` distributes over `alt`:
//!
//! ```text
//! a.alt(b).fmap(f) == a.fmap(f).alt(b.fmap(f))
//! ```

use super::functor::Functor;

/// A type class for picking the first non-failing of two values.
///
/// # Laws
///
/// `alt` is associative, and `fmap` distributes over it; see the
/// module documentation.
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Alt;
///
/// assert_eq!(None.alt(Some(2)), Some(2));
/// assert_eq!(Some(1).alt(Some(2)), Some(1));
/// ```
pub trait Alt: Functor {
    /// Returns `self` unless it represents a failure, in which case
    /// the alternative is returned instead.
    fn alt(self, alternative: Self) -> Self;
}

impl<A> Alt for Option<A> {
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }
}
