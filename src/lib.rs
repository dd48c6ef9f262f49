//! # focal
//!
//! A composable functional-optics library built on the van Laarhoven
//! lens encoding.
//!
//! ## Overview
//!
//! A lens focuses on a part `A` of a larger structure `S`, allowing that
//! part to be read and immutably replaced. In the van Laarhoven encoding a
//! lens is not a bare getter/setter pair but a single higher-order
//! application function, generic over a closed family of functors:
//!
//! - instantiated with the [`Const`](typeclass::Const) functor, the
//!   application performs a read ([`view`](optics::Lens::view));
//! - instantiated with the [`Identity`](typeclass::Identity) functor, it
//!   performs a write ([`set`](optics::Lens::set)).
//!
//! Because a lens is just a function shape, lens composition is function
//! composition: composing two lenses yields a lens into the nested
//! structure with no intermediate partial records.
//!
//! ## Feature Flags
//!
//! - `typeclass`: The functor layer (`Functor`, `Identity`, `Const`)
//! - `optics`: The lens layer (`Lens`, `FunctionLens`, composition)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Foo {
//!     bar: (i32, i32),
//!     baz: char,
//! }
//!
//! let bar = lens!(Foo, bar);
//! let foo = Foo { bar: (10, 2), baz: 'a' };
//!
//! assert_eq!(bar.clone().compose(tuple_first()).view(foo.clone()), 10);
//!
//! let updated = bar.compose(tuple_second()).set(foo, 15);
//! assert_eq!(updated, Foo { bar: (10, 15), baz: 'a' });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;
