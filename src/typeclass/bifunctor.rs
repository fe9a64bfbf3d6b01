//! Bifunctor type class - mapping over both arms of a two-armed type.
//!
//! Where [`Functor`](super::functor::Functor) maps a single channel, a
//! `Bifunctor` has two independent channels - for the types in this
//! crate, a failure arm and a success arm - each mappable on its own.
//!
//! # Laws
//!
//! `bimap` must agree with mapping one arm at a time, in either order:
//!
//! ```text
//! x.bimap(f, g) == x.first(f).second(g) == x.second(g).first(f)
//! ```

/// A type class for types with two independently mappable channels.
///
/// The two type parameters name the current channel types; `Target`
/// re-applies the constructor to new channel types.
///
/// # Laws
///
/// ```text
/// x.bimap(f, g) == x.first(f).second(g) == x.second(g).first(f)
/// ```
///
/// # Examples
///
/// ```rust
/// use thunkful::control::Either;
/// use thunkful::typeclass::Bifunctor;
///
/// let success: Either<String, i32> = Either::Right(20);
/// let mapped = success.bimap(|error: String| error.len(), |value| value + 1);
/// assert_eq!(mapped, Either::Right(21));
/// ```
pub trait Bifunctor<A: 'static, B: 'static> {
    /// The same two-channel constructor applied to new channel types.
    type Target<C: 'static, D: 'static>;

    /// Applies one function per channel.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: Fn(A) -> C + 'static,
        G: Fn(B) -> D + 'static,
        C: 'static,
        D: 'static;

    /// Maps only the first channel, leaving the second untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::typeclass::Bifunctor;
    ///
    /// let failure: Either<i32, String> = Either::Left(42);
    /// assert_eq!(failure.first(|n| n * 2), Either::Left(84));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: Fn(A) -> C + 'static,
        C: 'static,
    {
        self.bimap(function, |second| second)
    }

    /// Maps only the second channel, leaving the first untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thunkful::control::Either;
    /// use thunkful::typeclass::Bifunctor;
    ///
    /// let success: Either<i32, String> = Either::Right("hi".to_string());
    /// assert_eq!(success.second(|s: String| s.len()), Either::Right(2));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: Fn(B) -> D + 'static,
        D: 'static,
    {
        self.bimap(|first| first, function)
    }
}

impl<T: 'static, E: 'static> Bifunctor<E, T> for Result<T, E> {
    type Target<C: 'static, D: 'static> = Result<D, C>;

    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: Fn(E) -> C + 'static,
        G: Fn(T) -> D + 'static,
        C: 'static,
        D: 'static,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}
