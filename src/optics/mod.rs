//! Optics for immutable data manipulation.
//!
//! This module provides lenses - composable accessors that focus on a
//! part of a data structure, enabling type-safe reading and immutable
//! updating of deeply nested fields.
//!
//! Everything is built on the van Laarhoven encoding: a lens is a single
//! application operator generic over the sealed functor family in
//! [`crate::typeclass`]. [`Const`](crate::typeclass::Const) instantiates
//! it as a read, [`Identity`](crate::typeclass::Identity) as a write, and
//! lens composition is function composition of applications.
//!
//! # Available pieces
//!
//! - [`Lens`]: The lens trait - `apply`, with derived `view`/`set`/
//!   `modify`/`compose`
//! - [`FunctionLens`]: The primitive getter/setter lens
//! - [`ComposedLens`]: Two lenses focused through each other
//! - [`lens!`](crate::lens): Macro generating a field lens for a struct
//! - [`make_lens`], [`view`], [`set`], [`over`], [`compose`]:
//!   free-function entry points
//! - [`tuple_first`], [`tuple_second`]: predefined pair lenses
//!
//! # Example
//!
//! ```
//! use focal::optics::{Lens, tuple_second};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Foo {
//!     bar: (i32, i32),
//!     baz: char,
//! }
//!
//! let bar_second = lens!(Foo, bar).compose(tuple_second());
//!
//! let foo = Foo { bar: (10, 2), baz: 'a' };
//! let updated = bar_second.set(foo, 15);
//! assert_eq!(updated, Foo { bar: (10, 15), baz: 'a' });
//! ```
//!
//! # Lens Laws
//!
//! Every well-formed lens satisfies:
//!
//! 1. **PutGet**: `lens.view(lens.set(source, value)) == value`
//! 2. **GetPut**: `lens.set(source.clone(), lens.view(source)) == source`
//! 3. **PutPut**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`

mod compose;
mod lens;
mod standard_optics;

pub use compose::{ComposedLens, compose};
pub use lens::{FunctionLens, Lens, make_lens, over, set, view};
pub use standard_optics::{tuple_first, tuple_second};
