//! The functor layer underpinning the lens encoding.
//!
//! This module provides the two single-value containers that give one lens
//! definition its two behaviors, together with the sealed [`Functor`]
//! trait that lens application is written against:
//!
//! - [`Identity`]: wraps a value and lets `fmap` transform it - the write
//!   path.
//! - [`Const`]: carries a value and ignores `fmap` entirely - the read
//!   path.
//! - [`Functor`]: Higher-Kinded Type emulation via Generic Associated
//!   Types; sealed to exactly the two descriptors above.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior: a zero-sized descriptor type ([`IdentityFunctor`],
//! [`ConstFunctor`]) stands in for the type constructor, and its
//! `Wrapped<T>` associated type maps payloads to concrete containers.
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Const, ConstFunctor, Functor, Identity, IdentityFunctor};
//!
//! // Identity applies the function.
//! let written = IdentityFunctor::fmap(Identity::new(2), |n: i32| n * 10);
//! assert_eq!(written.into_inner(), 20);
//!
//! // Const ignores it.
//! let read: Const<i32, i32> = ConstFunctor::fmap(Const::new(2), |n: i32| n * 10);
//! assert_eq!(read.into_value(), 2);
//! ```

mod constant;
mod higher;
mod identity;

pub use constant::{Const, ConstFunctor};
pub use higher::Functor;
pub use identity::{Identity, IdentityFunctor};
