//! Thunk - a re-invocable deferred computation.
//!
//! A [`Thunk`] wraps a zero-argument closure and defers it until
//! [`run`](Thunk::run) is called. Unlike a lazy cell it is **not
//! memoized**: every `run` re-executes the closure, and two runs may
//! observe different results. A thunk models re-executable work, not a
//! cached value.
//!
//! Combinators never execute anything by themselves - the only
//! operations that run the underlying closure are `run` itself and the
//! eager [`fold_left`](crate::typeclass::Foldable::fold_left).
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use thunkful::effect::Thunk;
//!
//! let invocations = Rc::new(Cell::new(0));
//! let tracked = invocations.clone();
//!
//! let thunk = Thunk::new(move || {
//!     tracked.set(tracked.get() + 1);
//!     42
//! });
//!
//! // Nothing has run yet.
//! assert_eq!(invocations.get(), 0);
//!
//! // Every run re-executes the closure.
//! assert_eq!(thunk.run(), 42);
//! assert_eq!(thunk.run(), 42);
//! assert_eq!(invocations.get(), 2);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use crate::typeclass::{
    Applicative, Apply, Extend, Foldable, Functor, Monad, Semigroup, TypeConstructor,
};

use super::panic_message;

/// A re-invocable, zero-argument unit of possibly side-effecting work.
///
/// The closure is stored behind an `Rc`, so cloning a thunk is cheap
/// and both clones re-run the same underlying closure. `A: 'static`
/// because the payload lives inside the shared closure.
///
/// # Non-memoization
///
/// Running a thunk twice executes its closure twice. Callers who want
/// caching must build it into the closure themselves.
///
/// # Examples
///
/// ```rust
/// use thunkful::effect::Thunk;
/// use thunkful::typeclass::{Functor, Monad};
///
/// let pipeline = Thunk::of(10)
///     .fmap(|n| n * 2)
///     .flat_map(|n| Thunk::of(n + 1));
///
/// assert_eq!(pipeline.run(), 21);
/// ```
pub struct Thunk<A>
where
    A: 'static,
{
    /// The wrapped computation. `Rc` so combinators can share it.
    run_thunk: Rc<dyn Fn() -> A>,
}

impl<A> Thunk<A>
where
    A: 'static,
{
    /// Wraps a closure into a deferred computation.
    ///
    /// The closure does not run until [`run`](Self::run) is called,
    /// and runs again on every subsequent call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::effect::Thunk;
    ///
    /// let thunk = Thunk::new(|| 40 + 2);
    /// assert_eq!(thunk.run(), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_thunk: Rc::new(function),
        }
    }

    /// Lifts a plain value into a constant thunk.
    ///
    /// The value is cloned out on every run, which is what makes the
    /// thunk re-invocable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::effect::Thunk;
    ///
    /// let constant = Thunk::of("ready");
    /// assert_eq!(constant.run(), "ready");
    /// assert_eq!(constant.run(), "ready");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the deferred computation and returns its result.
    ///
    /// This is where side effects happen. The thunk stays usable:
    /// calling `run` again re-executes the closure.
    pub fn run(&self) -> A {
        (self.run_thunk)()
    }

    /// Traverses the thunk with a container-returning function.
    ///
    /// Runs the thunk once, applies `function` to the produced value,
    /// and re-wraps the container's content as a constant thunk. Note
    /// that this is eager: the underlying closure runs immediately.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::effect::Thunk;
    ///
    /// let reject_zero = |n: i32| if n == 0 { None } else { Some(n) };
    ///
    /// let missing = Thunk::of(0).traverse(reject_zero);
    /// assert!(missing.is_none());
    ///
    /// let present = Thunk::of(1).traverse(reject_zero);
    /// assert_eq!(present.map(|thunk| thunk.run()), Some(1));
    /// ```
    pub fn traverse<TB, F>(self, function: F) -> TB::WithType<Thunk<TB::Inner>>
    where
        TB: Functor,
        TB::Inner: Clone + 'static,
        F: FnOnce(A) -> TB,
    {
        function(self.run()).fmap(Thunk::of)
    }

    /// Converts a panic during `run` into a recovery value.
    ///
    /// The handler receives the panic message and its result replaces
    /// the panicked run. Catching is re-armed on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::effect::Thunk;
    ///
    /// let fragile: Thunk<String> = Thunk::new(|| panic!("oops"));
    /// let recovered = fragile.catch(|message| format!("recovered: {message}"));
    /// assert_eq!(recovered.run(), "recovered: oops");
    /// ```
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(|| self.run())) {
            Ok(value) => value,
            Err(payload) => handler(panic_message(&*payload)),
        })
    }
}

impl<A> Clone for Thunk<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_thunk: Rc::clone(&self.run_thunk),
        }
    }
}

impl<A> fmt::Debug for Thunk<A>
where
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Thunk(<deferred>)")
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for Thunk<A>
where
    A: 'static,
{
    type Inner = A;
    type WithType<B: 'static> = Thunk<B>;
}

impl<A> Functor for Thunk<A>
where
    A: 'static,
{
    fn fmap<B, F>(self, function: F) -> Thunk<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Thunk::new(move || function(self.run()))
    }
}

impl<A> Apply for Thunk<A>
where
    A: 'static,
{
    /// Runs `self` first, `other` second - the left-to-right order is
    /// observable through side effects and part of the contract.
    fn map2<B, C, F>(self, other: Thunk<B>, function: F) -> Thunk<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Thunk::new(move || {
            let first = self.run();
            let second = other.run();
            function(first, second)
        })
    }

    fn map3<B, C, D, F>(self, second: Thunk<B>, third: Thunk<C>, function: F) -> Thunk<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        Thunk::new(move || {
            let first = self.run();
            let middle = second.run();
            let last = third.run();
            function(first, middle, last)
        })
    }
}

impl<A> Applicative for Thunk<A>
where
    A: 'static,
{
    fn pure<B>(value: B) -> Thunk<B>
    where
        B: Clone + 'static,
    {
        Thunk::of(value)
    }
}

impl<A> Monad for Thunk<A>
where
    A: 'static,
{
    /// The continuation's thunk runs inside the outer run, so its side
    /// effects happen exactly once per outer invocation.
    fn flat_map<B, F>(self, function: F) -> Thunk<B>
    where
        F: Fn(A) -> Thunk<B> + 'static,
        B: 'static,
    {
        Thunk::new(move || function(self.run()).run())
    }
}

impl<A> Extend for Thunk<A>
where
    A: 'static,
{
    /// Defers `function` over the whole thunk: the result is a new
    /// thunk that hands a clone of the original to `function` on every
    /// run.
    fn extend<B, F>(self, function: F) -> Thunk<B>
    where
        F: Fn(Self) -> B + 'static,
        B: 'static,
    {
        Thunk::new(move || function(self.clone()))
    }
}

impl<A> Foldable for Thunk<A>
where
    A: 'static,
{
    /// Eager: runs the thunk exactly once and folds the single
    /// produced value into the seed.
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.run())
    }
}

impl<A> Semigroup for Thunk<A>
where
    A: Semigroup + 'static,
{
    /// The applicative-derived merge: runs both thunks, left first,
    /// and combines the produced values.
    fn combine(self, other: Self) -> Self {
        self.map2(other, Semigroup::combine)
    }
}

static_assertions::assert_not_impl_any!(Thunk<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Thunk<String>: Send, Sync);
