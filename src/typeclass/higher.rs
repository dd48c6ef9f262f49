//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation the lens encoding is built on.
//! Rust has no native Higher-Kinded Types: we cannot abstract over
//! `Identity<_>` and `Const<V, _>` as type constructors directly. Instead,
//! each functor is described by a zero-sized *descriptor* type whose
//! [`Wrapped`](Functor::Wrapped) Generic Associated Type maps a payload
//! type to the concrete container, and whose [`fmap`](Functor::fmap)
//! transforms the payload.
//!
//! The trait is sealed: [`IdentityFunctor`](crate::typeclass::IdentityFunctor)
//! and [`ConstFunctor`](crate::typeclass::ConstFunctor) are the only two
//! instances, because they are the only two interpretations a lens needs.
//! `Identity` drives the write path and `Const` the read path. Lens
//! application is written once against this trait and never branches on
//! which of the two it was given.
//!
//! # Example
//!
//! ```rust
//! use focal::typeclass::{Functor, Identity, IdentityFunctor};
//!
//! let doubled = IdentityFunctor::fmap(Identity::new(21), |n: i32| n * 2);
//! assert_eq!(doubled, Identity::new(42));
//! ```

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A type-level description of a single-value functor.
///
/// Implementors are zero-sized descriptor types, not containers: the
/// container for a payload `T` is [`Wrapped<T>`](Functor::Wrapped).
/// This indirection is what allows one generic piece of code to produce
/// both `Wrapped<A>` and `Wrapped<S>` for the *same* functor, which is
/// the shape lens application needs.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// F::fmap(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
/// ```
///
/// Both instances satisfy these laws: `IdentityFunctor` by applying the
/// function, `ConstFunctor` degenerately, by never touching its payload.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Functor: sealed::Sealed {
    /// The container produced by applying this functor to a payload type.
    ///
    /// For `IdentityFunctor`, `Wrapped<T>` is `Identity<T>`; for
    /// `ConstFunctor<V>`, it is `Const<V, T>`.
    type Wrapped<T>;

    /// Applies a function to the payload of the container.
    ///
    /// # Arguments
    ///
    /// * `wrapped` - The container holding a payload of type `A`
    /// * `function` - The function to apply to the payload
    ///
    /// # Returns
    ///
    /// A container of the same functor holding the transformed payload.
    /// `ConstFunctor` ignores `function` entirely and returns its payload
    /// untouched; only the phantom payload type changes.
    fn fmap<A, B, F>(wrapped: Self::Wrapped<A>, function: F) -> Self::Wrapped<B>
    where
        F: FnOnce(A) -> B;
}
