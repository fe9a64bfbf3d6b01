//! Fallible - a deferred computation that can fail.
//!
//! A [`Fallible<L, R>`] stacks the two core abstractions: it is a
//! [`Thunk`] whose produced value is an [`Either<L, R>`]. Running it
//! either fails with an `L` or succeeds with an `R`, and every
//! combinator here is the corresponding `Either` combinator lifted
//! through the thunk layer.
//!
//! Two ordering rules hold throughout and are tested as contracts:
//!
//! - combining combinators ([`map2`](crate::typeclass::Apply::map2)
//!   and everything derived from it) always run **both** thunks, left
//!   first; failure is decided afterwards at the value level, where
//!   the left-hand failure wins;
//! - sequencing combinators ([`flat_map`](crate::typeclass::Monad::flat_map))
//!   run the continuation's thunk inside the outer run, so its side
//!   effects happen exactly once per outer invocation.
//!
//! # Examples
//!
//! ```rust
//! use thunkful::control::Either;
//! use thunkful::effect::Fallible;
//! use thunkful::typeclass::Monad;
//!
//! fn halve(n: i32) -> Fallible<String, i32> {
//!     if n % 2 == 0 {
//!         Fallible::right(n / 2)
//!     } else {
//!         Fallible::left(format!("{n} is odd"))
//!     }
//! }
//!
//! let even = Fallible::right(42).flat_map(halve);
//! assert_eq!(even.run(), Either::Right(21));
//!
//! let odd = Fallible::right(7).flat_map(halve);
//! assert_eq!(odd.run(), Either::Left("7 is odd".to_string()));
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::Either;
use crate::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Extend, Foldable, Functor, Monad, Semigroup,
    TypeConstructor,
};

use super::panic_message;
use super::thunk::Thunk;

/// A deferred computation that, when run, fails with `L` or succeeds
/// with `R`.
///
/// Like [`Thunk`], a `Fallible` is re-invocable and never memoized;
/// cloning shares the underlying closure. The single-channel contracts
/// (`Functor`, `Monad`, ...) act on the success channel; the failure
/// channel is reached through [`Bifunctor`], [`or_else`](Self::or_else)
/// and [`Alt`].
///
/// # Examples
///
/// ```rust
/// use thunkful::control::Either;
/// use thunkful::effect::Fallible;
/// use thunkful::typeclass::Functor;
///
/// let doubled = Fallible::<String, i32>::right(21).fmap(|n| n * 2);
/// assert_eq!(doubled.run(), Either::Right(42));
/// ```
pub struct Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// The wrapped thunk; its produced `Either` is fresh on every run.
    runner: Thunk<Either<L, R>>,
}

impl<L, R> Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// Wraps a closure producing an `Either` into a fallible effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::effect::Fallible;
    ///
    /// let effect: Fallible<String, i32> = Fallible::new(|| Either::Right(7));
    /// assert_eq!(effect.run(), Either::Right(7));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> Either<L, R> + 'static,
    {
        Self {
            runner: Thunk::new(function),
        }
    }

    /// Lifts a failure value into a constant failing effect.
    pub fn left(error: L) -> Self
    where
        L: Clone,
    {
        Self::new(move || Either::Left(error.clone()))
    }

    /// Lifts a success value into a constant succeeding effect.
    pub fn right(value: R) -> Self
    where
        R: Clone,
    {
        Self::new(move || Either::Right(value.clone()))
    }

    /// Alias for [`left`](Self::left): aborts the success channel with
    /// the given error.
    pub fn fail(error: L) -> Self
    where
        L: Clone,
    {
        Self::left(error)
    }

    /// Lifts an already-computed `Either` into a constant effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::effect::Fallible;
    ///
    /// let effect = Fallible::from_either(Either::<String, i32>::Right(3));
    /// assert_eq!(effect.run(), Either::Right(3));
    /// ```
    pub fn from_either(either: Either<L, R>) -> Self
    where
        L: Clone,
        R: Clone,
    {
        Self::new(move || either.clone())
    }

    /// Lifts an infallible thunk into the success channel.
    ///
    /// The underlying closure still runs anew on every invocation.
    pub fn from_thunk(thunk: Thunk<R>) -> Self {
        Self::new(move || Either::Right(thunk.run()))
    }

    /// Runs the computation, producing its `Either`.
    ///
    /// This is where side effects happen; the effect stays usable and
    /// re-executes on every call.
    pub fn run(&self) -> Either<L, R> {
        self.runner.run()
    }

    /// Unwraps the effect into its underlying thunk.
    pub fn into_thunk(self) -> Thunk<Either<L, R>> {
        self.runner
    }

    /// Captures a fault-prone closure at the sanctioned boundary.
    ///
    /// Normal completion is wrapped as a success; a panic during the
    /// run is converted by `on_error` (which receives the extracted
    /// panic message) into a failure value. Catching is re-armed on
    /// every run. This is the only place where unwinding faults may
    /// enter the failure channel - everywhere else a panic escaping a
    /// user closure is a bug in that closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::effect::Fallible;
    ///
    /// let effect: Fallible<String, i32> =
    ///     Fallible::try_catch(|| "42".parse().unwrap(), |message| message);
    /// assert_eq!(effect.run(), Either::Right(42));
    /// ```
    pub fn try_catch<F, H>(run: F, on_error: H) -> Self
    where
        F: Fn() -> R + 'static,
        H: Fn(String) -> L + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(&run)) {
            Ok(value) => Either::Right(value),
            Err(payload) => Either::Left(on_error(panic_message(&*payload))),
        })
    }

    /// Recovers the failure channel with an effect-returning function.
    ///
    /// A failure is fed to `function` and the produced effect's thunk
    /// runs inside the outer run; a success passes through untouched
    /// and `function` is never consulted. The failure type may change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::effect::Fallible;
    ///
    /// let recovered: Fallible<u8, i32> = Fallible::<String, i32>::left("gone".to_string())
    ///     .or_else(|_| Fallible::right(0));
    /// assert_eq!(recovered.run(), Either::Right(0));
    /// ```
    pub fn or_else<J, F>(self, function: F) -> Fallible<J, R>
    where
        J: 'static,
        F: Fn(L) -> Fallible<J, R> + 'static,
    {
        Fallible::new(move || match self.run() {
            Either::Left(error) => function(error).run(),
            Either::Right(value) => Either::Right(value),
        })
    }
}

impl<L, R> Clone for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
        }
    }
}

impl<L, R> fmt::Debug for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Fallible(<deferred>)")
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<L, R> TypeConstructor for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    type Inner = R;
    type WithType<B: 'static> = Fallible<L, B>;
}

impl<L, R> Functor for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// `Either::map_right` lifted through the thunk layer.
    fn fmap<B, F>(self, function: F) -> Fallible<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        Fallible::new(move || self.run().map_right(&function))
    }
}

impl<L, R> Apply for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// Runs both thunks unconditionally, left first; only then does
    /// the value-level tie-break pick the left-hand failure. There is
    /// no short-circuit at the effect layer.
    fn map2<B, C, F>(self, other: Fallible<L, B>, function: F) -> Fallible<L, C>
    where
        F: Fn(R, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Fallible::new(move || {
            let first = self.run();
            let second = other.run();
            match (first, second) {
                (Either::Left(error), _) => Either::Left(error),
                (_, Either::Left(error)) => Either::Left(error),
                (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            }
        })
    }

    fn map3<B, C, D, F>(
        self,
        second: Fallible<L, B>,
        third: Fallible<L, C>,
        function: F,
    ) -> Fallible<L, D>
    where
        F: Fn(R, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        Fallible::new(move || {
            let first = self.run();
            let middle = second.run();
            let last = third.run();
            match (first, middle, last) {
                (Either::Left(error), _, _) => Either::Left(error),
                (_, Either::Left(error), _) => Either::Left(error),
                (_, _, Either::Left(error)) => Either::Left(error),
                (Either::Right(a), Either::Right(b), Either::Right(c)) => {
                    Either::Right(function(a, b, c))
                }
            }
        })
    }
}

impl<L, R> Applicative for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    fn pure<B>(value: B) -> Fallible<L, B>
    where
        B: Clone + 'static,
    {
        Fallible::right(value)
    }
}

impl<L, R> Monad for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// A failure passes through as the same value; a success feeds
    /// `function` and the produced effect's thunk runs immediately,
    /// inside the outer run, so the continuation's side effects happen
    /// exactly once per outer invocation.
    fn flat_map<B, F>(self, function: F) -> Fallible<L, B>
    where
        F: Fn(R) -> Fallible<L, B> + 'static,
        B: 'static,
    {
        Fallible::new(move || match self.run() {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value).run(),
        })
    }
}

impl<L, R> Alt for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// Runs `self`; on failure the failure value is discarded and the
    /// alternative's thunk runs instead. On success the alternative is
    /// never invoked.
    fn alt(self, alternative: Self) -> Self {
        Fallible::new(move || match self.run() {
            Either::Left(_) => alternative.run(),
            Either::Right(value) => Either::Right(value),
        })
    }
}

impl<L, R> Extend for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// Hands the whole effect to `function` and wraps the result in a
    /// fresh success. The wrapped effect may itself fail when run
    /// inside `function`, but the extension never does.
    fn extend<B, F>(self, function: F) -> Fallible<L, B>
    where
        F: Fn(Self) -> B + 'static,
        B: 'static,
    {
        Fallible::new(move || Either::Right(function(self.clone())))
    }
}

impl<L, R> Foldable for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    /// Eager: runs the thunk exactly once. A failure leaves the seed
    /// untouched; a success is folded in exactly once.
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self.run() {
            Either::Left(_) => init,
            Either::Right(value) => function(init, value),
        }
    }
}

impl<L, R> Bifunctor<L, R> for Fallible<L, R>
where
    L: 'static,
    R: 'static,
{
    type Target<C: 'static, D: 'static> = Fallible<C, D>;

    /// `Either::map_both` lifted through the thunk layer.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Fallible<C, D>
    where
        F: Fn(L) -> C + 'static,
        G: Fn(R) -> D + 'static,
        C: 'static,
        D: 'static,
    {
        Fallible::new(move || self.run().map_both(&first_function, &second_function))
    }
}

impl<L, R> Semigroup for Fallible<L, R>
where
    L: 'static,
    R: Semigroup + 'static,
{
    /// The applicative-derived merge: both thunks run, left first, and
    /// the success values combine; any failure wins by the `map2`
    /// tie-break.
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

static_assertions::assert_not_impl_any!(Fallible<String, i32>: Send, Sync);
