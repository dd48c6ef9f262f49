//! Standard lenses that are commonly used.
//!
//! This module provides pre-defined lenses for common shapes, currently
//! the components of a pair.

use super::lens::{FunctionLens, Lens};

/// Creates a lens focusing on the first component of a pair.
///
/// # Type Parameters
///
/// - `A`: The first component type (cloned by the getter)
/// - `B`: The second component type
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, tuple_first};
///
/// let first = tuple_first();
///
/// assert_eq!(first.view((10, 'a')), 10);
/// assert_eq!(first.set((10, 'a'), 42), (42, 'a'));
/// ```
#[must_use]
pub fn tuple_first<A, B>() -> impl Lens<(A, B), A> + Clone
where
    A: Clone,
{
    FunctionLens::new(
        |pair: &(A, B)| pair.0.clone(),
        |pair: (A, B), value: A| (value, pair.1),
    )
}

/// Creates a lens focusing on the second component of a pair.
///
/// # Type Parameters
///
/// - `A`: The first component type
/// - `B`: The second component type (cloned by the getter)
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, tuple_second};
///
/// let second = tuple_second();
///
/// assert_eq!(second.view((10, 'a')), 'a');
/// assert_eq!(second.set((10, 'a'), 'z'), (10, 'z'));
/// ```
#[must_use]
pub fn tuple_second<A, B>() -> impl Lens<(A, B), B> + Clone
where
    B: Clone,
{
    FunctionLens::new(
        |pair: &(A, B)| pair.1.clone(),
        |pair: (A, B), value: B| (pair.0, value),
    )
}
