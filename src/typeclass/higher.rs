//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: there is no way to write a
//! trait that abstracts over `Option<_>` or `Thunk<_>` as bare type
//! constructors. This module emulates HKT with a Generic Associated
//! Type, which is the foundation every contract trait in this crate
//! (Functor, Apply, Monad, ...) builds on.
//!
//! The `B: 'static` bound on [`TypeConstructor::WithType`] exists for
//! the effect types: a re-runnable thunk stores its payload inside an
//! `Rc<dyn Fn() -> A>`, so the payload type must not borrow.

/// A trait representing a type constructor.
///
/// An implementing type is a type constructor already applied to some
/// type `A` (for example `Option<A>` or `Thunk<A>`); the trait exposes
/// both the applied type and the ability to re-apply the constructor
/// to a different type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B` instead.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be the
/// same type as `F` itself.
///
/// # Example
///
/// ```rust
/// use thunkful::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
///
/// assert_inner::<Option<i32>>();
/// assert_inner::<Result<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The inner type this constructor is applied to.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// The `TypeConstructor<Inner = B>` bound keeps re-application
    /// chainable; the `'static` bound is required so that effect types
    /// can store `B` values inside re-invocable closures.
    type WithType<B: 'static>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B: 'static> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B: 'static> = Result<B, E>;
}
