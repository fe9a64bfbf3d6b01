//! Deferred, re-invocable effects.
//!
//! This module provides the two effect types of the crate:
//!
//! - [`Thunk`]: a re-invocable deferred computation - the unit of
//!   "when effects happen";
//! - [`Fallible`]: a thunk producing an
//!   [`Either`](crate::control::Either) - the unit of "when effects
//!   happen *and* what can go wrong".
//!
//! Both are synchronous, single-threaded, and never memoized: running
//! an effect twice executes its closure twice. Combinators only ever
//! build new effects; nothing runs until `run` is called (the eager
//! exceptions - `fold_left` and `Thunk::traverse` - say so in their
//! docs).
//!
//! # Examples
//!
//! ```rust
//! use thunkful::control::Either;
//! use thunkful::effect::{Fallible, Thunk};
//! use thunkful::typeclass::{Functor, Monad};
//!
//! let plain = Thunk::of(2).fmap(|n| n * 3);
//! assert_eq!(plain.run(), 6);
//!
//! let guarded: Fallible<String, i32> = Fallible::from_thunk(plain)
//!     .flat_map(|n| {
//!         if n > 0 {
//!             Fallible::right(n)
//!         } else {
//!             Fallible::left("not positive".to_string())
//!         }
//!     });
//! assert_eq!(guarded.run(), Either::Right(6));
//! ```

use std::any::Any;

mod fallible;
mod thunk;

pub use fallible::Fallible;
pub use thunk::Thunk;

/// Extracts a human-readable message from a panic payload.
///
/// Mirrors the payload shapes `std` produces: `&str` for literal
/// panics, `String` for formatted ones, and a fixed fallback for
/// anything else.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
