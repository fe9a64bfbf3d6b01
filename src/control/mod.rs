//! Control structures for success-or-failure values.
//!
//! This module provides [`Either`], the closed two-armed sum type that
//! every fallible computation in this crate ultimately produces.
//!
//! # Examples
//!
//! ```rust
//! use thunkful::control::Either;
//! use thunkful::typeclass::Monad;
//!
//! let chained: Either<String, i32> = Either::Right(20)
//!     .flat_map(|n| Either::Right(n + 1))
//!     .flat_map(|n| Either::Right(n * 2));
//!
//! assert_eq!(chained, Either::Right(42));
//! ```

mod either;

pub use either::Either;
