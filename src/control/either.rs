//! Either type - a closed sum of failure and success.
//!
//! `Either<L, R>` is the crate's unit of "what can go wrong": exactly
//! one of the two arms is populated, `Left` conventionally holding the
//! failure and `Right` the success. It is the value produced by running
//! a [`Fallible`](crate::effect::Fallible) effect.
//!
//! # Examples
//!
//! ```rust
//! use thunkful::control::Either;
//!
//! let parsed: Either<String, i32> = match "42".parse() {
//!     Ok(number) => Either::Right(number),
//!     Err(error) => Either::Left(format!("bad input: {error}")),
//! };
//!
//! let description = parsed.fold(
//!     |error| format!("failed: {error}"),
//!     |number| format!("parsed {number}"),
//! );
//! assert_eq!(description, "parsed 42");
//! ```

use std::fmt;

use crate::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Foldable, Functor, Monad, Semigroup, TypeConstructor,
};

/// A value that is exactly one of two alternatives.
///
/// By convention `Left` carries the failure and `Right` the success;
/// the single-channel type classes (`Functor`, `Monad`, ...) act on
/// the `Right` arm and pass `Left` through untouched.
///
/// # Examples
///
/// ```rust
/// use thunkful::control::Either;
/// use thunkful::typeclass::Functor;
///
/// let success: Either<String, i32> = Either::Right(21);
/// assert_eq!(success.fmap(|n| n * 2), Either::Right(42));
///
/// let failure: Either<String, i32> = Either::Left("broken".to_string());
/// assert_eq!(failure.fmap(|n| n * 2), Either::Left("broken".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure arm.
    Left(L),
    /// The success arm.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Extracts the left value, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    ///
    /// let failure: Either<i32, &str> = Either::Left(404);
    /// assert_eq!(failure.left(), Some(404));
    /// assert_eq!(Either::<i32, &str>::Right("ok").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Extracts the right value, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value, passing `Right` through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("timeout");
    /// assert_eq!(failure.map_left(|e| e.len()), Either::Left(7));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, passing `Left` through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions, one per arm.
    ///
    /// This is the single-shot (`FnOnce`) version; the
    /// [`Bifunctor`] instance provides the re-runnable one.
    #[inline]
    pub fn map_both<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    ///
    /// This is the only pattern-style elimination: exactly one branch
    /// runs, always.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    ///
    /// let outcome: Either<i32, &str> = Either::Right("done");
    /// let text = outcome.fold(|code| format!("error {code}"), |s| s.to_string());
    /// assert_eq!(text, "done");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the arms: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B: 'static> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        self.map_right(function)
    }
}

impl<L, R> Apply for Either<L, R> {
    /// Combines two eithers; when both sides are `Left`, the
    /// left-hand (`self`) failure wins.
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: Fn(R, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
        }
    }

    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: Fn(R, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        match (self, second, third) {
            (Self::Left(error), _, _) => Either::Left(error),
            (_, Either::Left(error), _) => Either::Left(error),
            (_, _, Either::Left(error)) => Either::Left(error),
            (Self::Right(first), Either::Right(second), Either::Right(third)) => {
                Either::Right(function(first, second, third))
            }
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    fn pure<B>(value: B) -> Either<L, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }
}

impl<L, R> Monad for Either<L, R> {
    /// Short-circuits on `Left`, passing the same failure value
    /// through without re-wrapping.
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Alt for Either<L, R> {
    /// Returns the alternative when `self` is `Left`; a `Right` is
    /// kept and the alternative is discarded.
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Left(_) => alternative,
            success @ Self::Right(_) => success,
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }
}

impl<L: 'static, R: 'static> Bifunctor<L, R> for Either<L, R> {
    type Target<C: 'static, D: 'static> = Either<C, D>;

    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: Fn(L) -> C + 'static,
        G: Fn(R) -> D + 'static,
        C: 'static,
        D: 'static,
    {
        self.map_both(first_function, second_function)
    }
}

impl<L: 'static, R: Semigroup + 'static> Semigroup for Either<L, R> {
    /// The applicative-derived merge: both sides must be `Right` for
    /// the values to combine; otherwise the left-hand failure wins.
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_and_right_construction() {
        let failure: Either<i32, String> = Either::Left(42);
        assert!(failure.is_left());
        assert!(!failure.is_right());

        let success: Either<i32, String> = Either::Right("hello".to_string());
        assert!(success.is_right());
        assert_eq!(success.right(), Some("hello".to_string()));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let back: Result<i32, String> = either.into();
        assert_eq!(back, Err("error".to_string()));
    }

    #[test]
    fn fold_runs_exactly_one_branch() {
        let success: Either<i32, i32> = Either::Right(2);
        assert_eq!(success.fold(|l| l - 1, |r| r + 1), 3);

        let failure: Either<i32, i32> = Either::Left(2);
        assert_eq!(failure.fold(|l| l - 1, |r| r + 1), 1);
    }

    #[test]
    fn swap_exchanges_arms() {
        let failure: Either<i32, &str> = Either::Left(1);
        assert_eq!(failure.swap(), Either::Right(1));
    }

    #[test]
    fn semigroup_combine_requires_both_successes() {
        let first: Either<i32, String> = Either::Right("ab".to_string());
        let second: Either<i32, String> = Either::Right("cd".to_string());
        assert_eq!(first.combine(second), Either::Right("abcd".to_string()));

        let first: Either<i32, String> = Either::Left(1);
        let second: Either<i32, String> = Either::Left(2);
        assert_eq!(first.combine(second), Either::Left(1));
    }
}
