//! Apply type class and the combinators derived from it.
//!
//! `Apply` extends [`Functor`] with [`map2`](Apply::map2), the ability
//! to combine two independent values living in the same container. On
//! top of that single operation this module derives, generically:
//!
//! - [`combine_with`]: a semigroup over container-wrapped values, given
//!   a value-combining witness function;
//! - [`sequence_tuple2`] .. [`sequence_tuple5`]: turning a tuple of
//!   containers into a container of a tuple;
//! - [`sequence_struct!`](crate::sequence_struct): turning a struct of
//!   containers into a container of a struct.
//!
//! Every derivation is written against the contract alone - none of
//! them knows which concrete container it is combining.
//!
//! # Laws
//!
//! ## Composition Law
//!
//! `apply` reassociates under function composition:
//!
//! ```text
//! a.map2(b, f).map2(c, g) == a.map2(b.product(c), |x, (y, z)| g(f(x, y), z))
//! ```
//!
//! # Ordering
//!
//! `map2` combines `self` first, `other` second. For effect instances
//! this is an observable contract: the left-hand thunk always runs
//! before the right-hand one, and when both sides carry a failure the
//! left-hand failure wins.

use super::functor::Functor;
use super::higher::TypeConstructor;

/// A type class for combining independent values inside one container.
///
/// # Laws
///
/// ## Composition Law
///
/// ```text
/// a.map2(b, f).map2(c, g) == a.map2(b.product(c), |x, (y, z)| g(f(x, y), z))
/// ```
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::Apply;
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
///
/// let missing = Some(3).map2(None::<i32>, |x, y| x + y);
/// assert_eq!(missing, None);
/// ```
pub trait Apply: Functor {
    /// Combines two container values using a binary function.
    ///
    /// `self` is combined first, `other` second; instances must
    /// preserve that order wherever it is observable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Apply;
    ///
    /// let combined: Result<i32, String> = Ok(3).map2(Ok(4), |x, y| x * y);
    /// assert_eq!(combined, Ok(12));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines three container values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Apply;
    ///
    /// let combined = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(combined, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: Fn(Self::Inner, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static;

    /// Pairs two container values into a container of a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Apply;
    ///
    /// assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Applies a container-wrapped function to a container-wrapped
    /// argument.
    ///
    /// `self` holds the function and is combined first - so when both
    /// sides fail, the function side's failure is the one reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::typeclass::Apply;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|n| n + 1);
    /// assert_eq!(function.apply(Some(41)), Some(42));
    /// ```
    #[inline]
    fn apply<B, C>(self, other: Self::WithType<B>) -> Self::WithType<C>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.map2(other, |function, argument| function(argument))
    }
}

impl<A> Apply for Option<A> {
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Some(first), Some(second)) => Some(function(first, second)),
            _ => None,
        }
    }

    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        match (self, second, third) {
            (Some(first), Some(second), Some(third)) => Some(function(first, second, third)),
            _ => None,
        }
    }
}

impl<T, E> Apply for Result<T, E> {
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: Fn(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
            (Ok(first), Ok(second)) => Ok(function(first, second)),
        }
    }

    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: Fn(T, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        match (self, second, third) {
            (Err(error), _, _) => Err(error),
            (_, Err(error), _) => Err(error),
            (_, _, Err(error)) => Err(error),
            (Ok(first), Ok(second), Ok(third)) => Ok(function(first, second, third)),
        }
    }
}

// =============================================================================
// Derived combinators
// =============================================================================

/// Combines two container-wrapped values with an explicit witness.
///
/// This is a semigroup derived from any [`Apply`] instance: `first` is
/// combined before `second`, and the merged value is produced by the
/// supplied `combine` function. Failure and short-circuit behavior are
/// entirely the underlying instance's `map2`.
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::combine_with;
///
/// let merged = combine_with(Some(2), Some(3), |x, y| x + y);
/// assert_eq!(merged, Some(5));
///
/// let merged: Option<i32> = combine_with(Some(2), None, |x, y| x + y);
/// assert_eq!(merged, None);
/// ```
pub fn combine_with<FA, G>(
    first: FA,
    second: FA::WithType<FA::Inner>,
    combine: G,
) -> FA::WithType<FA::Inner>
where
    FA: Apply,
    FA::Inner: 'static,
    G: Fn(FA::Inner, FA::Inner) -> FA::Inner + 'static,
{
    first.map2(second, combine)
}

/// Sequences a pair of containers into a container of a pair.
///
/// Both positions are combined in index order.
///
/// # Examples
///
/// ```rust
/// use thunkful::typeclass::sequence_tuple2;
///
/// assert_eq!(sequence_tuple2(Some(1), Some('a')), Some((1, 'a')));
/// assert_eq!(sequence_tuple2(None::<i32>, Some('a')), None);
/// ```
pub fn sequence_tuple2<FA, B>(first: FA, second: FA::WithType<B>) -> FA::WithType<(FA::Inner, B)>
where
    FA: Apply,
    FA::Inner: 'static,
    B: 'static,
{
    first.map2(second, |a, b| (a, b))
}

/// Sequences a triple of containers into a container of a triple.
///
/// Positions are combined left to right; for effect instances every
/// position runs, and the first failure in index order decides the
/// overall failure.
///
/// The `where` clause spells out the dictionary this derivation
/// consumes: the intermediate pair container must itself satisfy
/// [`Apply`] within the same constructor.
pub fn sequence_tuple3<FA, B, C>(
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<(FA::Inner, B, C)>
where
    FA: Apply,
    FA::Inner: 'static,
    B: 'static,
    C: 'static,
    FA::WithType<(FA::Inner, B)>: Apply<Inner = (FA::Inner, B)>,
    FA::WithType<(FA::Inner, B)>: TypeConstructor<WithType<C> = FA::WithType<C>>,
    FA::WithType<(FA::Inner, B)>:
        TypeConstructor<WithType<(FA::Inner, B, C)> = FA::WithType<(FA::Inner, B, C)>>,
{
    first
        .map2(second, |a, b| (a, b))
        .map2(third, |(a, b), c| (a, b, c))
}

/// Sequences four containers into a container of a quadruple.
///
/// See [`sequence_tuple3`] for ordering guarantees.
pub fn sequence_tuple4<FA, B, C, D>(
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
    fourth: FA::WithType<D>,
) -> FA::WithType<(FA::Inner, B, C, D)>
where
    FA: Apply,
    FA::Inner: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    FA::WithType<(FA::Inner, B)>: Apply<Inner = (FA::Inner, B)>,
    FA::WithType<(FA::Inner, B)>: TypeConstructor<WithType<C> = FA::WithType<C>>,
    FA::WithType<(FA::Inner, B)>:
        TypeConstructor<WithType<(FA::Inner, B, C)> = FA::WithType<(FA::Inner, B, C)>>,
    FA::WithType<(FA::Inner, B, C)>: Apply<Inner = (FA::Inner, B, C)>,
    FA::WithType<(FA::Inner, B, C)>: TypeConstructor<WithType<D> = FA::WithType<D>>,
    FA::WithType<(FA::Inner, B, C)>:
        TypeConstructor<WithType<(FA::Inner, B, C, D)> = FA::WithType<(FA::Inner, B, C, D)>>,
{
    first
        .map2(second, |a, b| (a, b))
        .map2(third, |(a, b), c| (a, b, c))
        .map2(fourth, |(a, b, c), d| (a, b, c, d))
}

/// Sequences five containers into a container of a quintuple.
///
/// See [`sequence_tuple3`] for ordering guarantees.
pub fn sequence_tuple5<FA, B, C, D, E>(
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
    fourth: FA::WithType<D>,
    fifth: FA::WithType<E>,
) -> FA::WithType<(FA::Inner, B, C, D, E)>
where
    FA: Apply,
    FA::Inner: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    FA::WithType<(FA::Inner, B)>: Apply<Inner = (FA::Inner, B)>,
    FA::WithType<(FA::Inner, B)>: TypeConstructor<WithType<C> = FA::WithType<C>>,
    FA::WithType<(FA::Inner, B)>:
        TypeConstructor<WithType<(FA::Inner, B, C)> = FA::WithType<(FA::Inner, B, C)>>,
    FA::WithType<(FA::Inner, B, C)>: Apply<Inner = (FA::Inner, B, C)>,
    FA::WithType<(FA::Inner, B, C)>: TypeConstructor<WithType<D> = FA::WithType<D>>,
    FA::WithType<(FA::Inner, B, C)>:
        TypeConstructor<WithType<(FA::Inner, B, C, D)> = FA::WithType<(FA::Inner, B, C, D)>>,
    FA::WithType<(FA::Inner, B, C, D)>: Apply<Inner = (FA::Inner, B, C, D)>,
    FA::WithType<(FA::Inner, B, C, D)>: TypeConstructor<WithType<E> = FA::WithType<E>>,
    FA::WithType<(FA::Inner, B, C, D)>:
        TypeConstructor<WithType<(FA::Inner, B, C, D, E)> = FA::WithType<(FA::Inner, B, C, D, E)>>,
{
    first
        .map2(second, |a, b| (a, b))
        .map2(third, |(a, b), c| (a, b, c))
        .map2(fourth, |(a, b, c), d| (a, b, c, d))
        .map2(fifth, |(a, b, c, d), e| (a, b, c, d, e))
}

/// Sequences a struct of containers into a container of the struct.
///
/// Fields are combined in written order, which fixes the combine order
/// (and, for effect instances, the execution order) deterministically.
/// The expansion only calls [`Functor::fmap`] and [`Apply::map2`], so
/// the macro works for any instance of those contracts.
///
/// # Examples
///
/// ```rust
/// use thunkful::sequence_struct;
///
/// #[derive(Debug, PartialEq)]
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// let endpoint = sequence_struct!(Endpoint {
///     host: Some("localhost".to_string()),
///     port: Some(8080_u16),
/// });
/// assert_eq!(
///     endpoint,
///     Some(Endpoint { host: "localhost".to_string(), port: 8080 })
/// );
///
/// let missing = sequence_struct!(Endpoint {
///     host: Some("localhost".to_string()),
///     port: None,
/// });
/// assert_eq!(missing, None);
/// ```
#[macro_export]
macro_rules! sequence_struct {
    ($name:ident { $field:ident : $effect:expr $(,)? }) => {
        $crate::typeclass::Functor::fmap($effect, |$field| $name { $field })
    };
    ($name:ident { $first:ident : $first_effect:expr $(, $field:ident : $effect:expr)+ $(,)? }) => {
        $crate::sequence_struct!(@fold $name,
            $crate::typeclass::Functor::fmap($first_effect, |$first| ($first,)),
            [$first]
            $(, $field : $effect)+)
    };
    (@fold $name:ident, $accumulated:expr, [$($seen:ident),+], $next:ident : $next_effect:expr $(, $field:ident : $effect:expr)+) => {
        $crate::sequence_struct!(@fold $name,
            $crate::typeclass::Apply::map2($accumulated, $next_effect, |($($seen),+ ,), $next| ($($seen),+ , $next)),
            [$($seen),+ , $next]
            $(, $field : $effect)+)
    };
    (@fold $name:ident, $accumulated:expr, [$($seen:ident),+], $last:ident : $last_effect:expr) => {
        $crate::typeclass::Apply::map2($accumulated, $last_effect, |($($seen),+ ,), $last| $name { $($seen),+ , $last })
    };
}
