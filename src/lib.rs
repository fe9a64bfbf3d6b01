//! # thunkful
//!
//! A small effect-composition library for Rust: re-runnable deferred
//! computations, a two-armed result type, their stacked composition,
//! and the type classes that give all of them uniform combinators.
//!
//! ## Overview
//!
//! The crate is built from three layers:
//!
//! - **Type Classes**: Functor, Apply, Applicative, Monad, Bifunctor,
//!   Alt, Extend, Foldable, plus the Semigroup/Monoid witness traits.
//!   Generic derivations (`combine_with`, `sequence_tuple*`,
//!   `sequence_struct!`) are written against these contracts alone.
//! - **Control**: [`Either`](control::Either), a closed two-armed sum
//!   type for success-or-failure values.
//! - **Effect**: [`Thunk`](effect::Thunk), a re-invocable deferred
//!   computation, and [`Fallible`](effect::Fallible), a deferred
//!   computation producing an `Either` when run.
//!
//! Execution is synchronous and single-threaded; nothing runs until a
//! thunk is explicitly invoked, and nothing is memoized.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the contract traits and generic derivations
//! - `control`: the `Either` sum type
//! - `effect`: the `Thunk` and `Fallible` effect types
//!
//! ## Example
//!
//! ```rust
//! use thunkful::effect::Fallible;
//! use thunkful::control::Either;
//! use thunkful::typeclass::{Functor, Monad};
//!
//! let pipeline: Fallible<String, i32> = Fallible::right(20)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| Fallible::right(n * 2));
//!
//! assert_eq!(pipeline.run(), Either::Right(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use thunkful::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
