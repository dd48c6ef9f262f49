//! Const wrapper type - the constant functor.
//!
//! This module provides the `Const` type, a container that carries a value
//! of one type while pretending, at the type level, to hold a payload of
//! another, together with [`ConstFunctor`], its [`Functor`] descriptor.
//! In the lens encoding, `Const` is the read-path interpretation: its
//! degenerate `fmap` ignores the mapping function, so the setter a lens
//! installs during application is never invoked and the getter's result
//! rides through untouched.

use std::marker::PhantomData;

use super::higher::{Functor, sealed};

/// The constant functor's container.
///
/// Carries a value of type `V`; the payload slot `A` is phantom and only
/// exists so `Const` fits the container shape lens application expects.
/// A `view` call constructs one around the getter's result, routes it
/// through lens application, and unwraps it again.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Const;
///
/// let held: Const<i32, char> = Const::new(42);
/// assert_eq!(held.into_value(), 42);
/// ```
pub struct Const<V, A> {
    value: V,
    _payload: PhantomData<A>,
}

impl<V, A> Const<V, A> {
    /// Creates a new `Const` carrying the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::typeclass::Const;
    ///
    /// let held: Const<&str, i32> = Const::new("kept");
    /// assert_eq!(held.into_value(), "kept");
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _payload: PhantomData,
        }
    }

    /// Consumes the `Const` and returns the carried value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns a reference to the carried value.
    #[inline]
    pub const fn as_value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone, A> Clone for Const<V, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: Copy, A> Copy for Const<V, A> {}

impl<V: PartialEq, A> PartialEq for Const<V, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq, A> Eq for Const<V, A> {}

impl<V: std::fmt::Debug, A> std::fmt::Debug for Const<V, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Descriptor for the constant functor carrying a `V`.
///
/// Its [`fmap`](Functor::fmap) ignores the function entirely: the carried
/// value is returned as-is and only the phantom payload type changes.
/// Instantiating lens application with this descriptor yields the read
/// path, because the mapping function the lens installs (which would
/// invoke the setter) is discarded.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::{Const, ConstFunctor, Functor};
///
/// let held: Const<i32, i32> = Const::new(7);
/// // The function is never called.
/// let retagged: Const<i32, String> =
///     ConstFunctor::fmap(held, |_: i32| -> String { unreachable!() });
/// assert_eq!(retagged.into_value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstFunctor<V> {
    _carried: PhantomData<V>,
}

impl<V> sealed::Sealed for ConstFunctor<V> {}

impl<V> Functor for ConstFunctor<V> {
    type Wrapped<T> = Const<V, T>;

    #[inline]
    fn fmap<A, B, F>(wrapped: Const<V, A>, _function: F) -> Const<V, B>
    where
        F: FnOnce(A) -> B,
    {
        Const::new(wrapped.value)
    }
}

static_assertions::assert_impl_all!(Const<i32, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(ConstFunctor<i32>: Send, Sync, Copy);
