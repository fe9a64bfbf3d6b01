//! Type class traits for effect composition.
//!
//! This module defines the contracts every container in this crate is
//! written against, and the combinators derived generically from them:
//!
//! - [`Functor`]: mapping over a contained value
//! - [`Apply`]: combining independent containers ([`map2`](Apply::map2))
//! - [`Applicative`]: lifting pure values ([`pure`](Applicative::pure))
//! - [`Monad`]: dependent sequencing ([`flat_map`](Monad::flat_map))
//! - [`Bifunctor`]: mapping either arm of a two-armed type
//! - [`Alt`]: first-success choice between two containers
//! - [`Extend`]: computations over the whole container
//! - [`Foldable`]: collapsing a container to a summary value
//! - [`Semigroup`] / [`Monoid`]: the explicit merge witnesses
//!
//! ## Higher-Kinded Types emulation
//!
//! Rust has no native higher-kinded types; [`TypeConstructor`] emulates
//! them with a Generic Associated Type so traits like `Functor` can be
//! stated once for every container.
//!
//! ## Contracts, not checks
//!
//! Each trait documents algebraic laws. Instances promise them; nothing
//! verifies them at construction time. The crate's law tests
//! (`tests/*_laws.rs`) exercise them property-style instead.
//!
//! ## Generic derivations
//!
//! [`combine_with`], [`sequence_tuple2`] .. [`sequence_tuple5`] and
//! [`sequence_struct!`](crate::sequence_struct) are parameterized over
//! the contracts alone and therefore work for every instance, present
//! and future.
//!
//! # Examples
//!
//! ```rust
//! use thunkful::typeclass::{Apply, sequence_tuple3};
//!
//! let combined = sequence_tuple3(Some(1), Some("two"), Some(3.0));
//! assert_eq!(combined, Some((1, "two", 3.0)));
//!
//! let summed = Some(20).map2(Some(22), |x, y| x + y);
//! assert_eq!(summed, Some(42));
//! ```

mod alt;
mod applicative;
mod apply;
mod bifunctor;
mod extend;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alt::Alt;
pub use applicative::Applicative;
pub use apply::{
    Apply, combine_with, sequence_tuple2, sequence_tuple3, sequence_tuple4, sequence_tuple5,
};
pub use bifunctor::Bifunctor;
pub use extend::Extend;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
