//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, the simplest possible wrapper
//! around a value, together with [`IdentityFunctor`], the descriptor that
//! makes it usable as a [`Functor`]. In the lens encoding, `Identity` is
//! the write-path interpretation: lifting a replacement value into
//! `Identity` lets the lens machinery thread it through to the setter.

use super::higher::{Functor, sealed};

/// The identity functor's container - wraps a value without adding any
/// behavior.
///
/// `Identity` wraps a single value and provides no additional
/// functionality. A `set` or `modify` call constructs one, routes it
/// through lens application, and unwraps it again; it has no independent
/// lifecycle.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

/// Descriptor for the identity functor.
///
/// Its [`fmap`](Functor::fmap) applies the function to the wrapped value
/// and rewraps the result. Instantiating lens application with this
/// descriptor yields the write path: the mapping function the lens
/// installs (which invokes the setter) actually runs.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::{Functor, Identity, IdentityFunctor};
///
/// let shouted = IdentityFunctor::fmap(Identity::new("hi"), str::to_uppercase);
/// assert_eq!(shouted, Identity::new(String::from("HI")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityFunctor;

impl sealed::Sealed for IdentityFunctor {}

impl Functor for IdentityFunctor {
    type Wrapped<T> = Identity<T>;

    #[inline]
    fn fmap<A, B, F>(wrapped: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(wrapped.0))
    }
}

static_assertions::assert_impl_all!(Identity<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(IdentityFunctor: Send, Sync, Copy);
