//! Lens composition.
//!
//! Because a lens in this encoding is just an application function,
//! composing two lenses is function composition: the composed application
//! hands the original lift to the inner lens and uses the inner lens's
//! whole application as the lift for the outer one. No intermediate
//! structure is allocated beyond what the outer getter naturally returns,
//! and composition is associative.

use std::marker::PhantomData;

use crate::typeclass::Functor;

use super::lens::Lens;

/// A lens composed of two lenses.
///
/// Focuses through the outer lens into its focus and then through the
/// inner lens, allowing access to deeply nested parts. Built by
/// [`Lens::compose`] or the free [`compose`] function.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `Mid`: The intermediate type (focus of `L1`, source of `L2`)
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Inner { value: i32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Outer { inner: Inner }
///
/// let inner_lens = lens!(Outer, inner);
/// let value_lens = lens!(Inner, value);
/// let outer_value = inner_lens.compose(value_lens);
///
/// let data = Outer { inner: Inner { value: 42 } };
/// assert_eq!(outer_value.view(data), 42);
/// ```
pub struct ComposedLens<L1, L2, Mid> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<Mid>,
}

impl<L1, L2, Mid> ComposedLens<L1, L2, Mid> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `outer` - The outer lens (focuses on the intermediate structure)
    /// * `inner` - The inner lens (focuses within it)
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, Mid, A, L1, L2> Lens<S, A> for ComposedLens<L1, L2, Mid>
where
    L1: Lens<S, Mid>,
    L2: Lens<Mid, A>,
{
    fn apply<F, L>(&self, lift: L, source: S) -> F::Wrapped<S>
    where
        F: Functor,
        L: FnOnce(A) -> F::Wrapped<A>,
    {
        // The inner application, partially applied to the original lift,
        // is itself lift-shaped over the intermediate type.
        self.outer
            .apply::<F, _>(move |mid| self.inner.apply::<F, _>(lift, mid), source)
    }
}

impl<L1: Clone, L2: Clone, Mid> Clone for ComposedLens<L1, L2, Mid> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, Mid> std::fmt::Debug for ComposedLens<L1, L2, Mid> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Composes two lenses into a lens on the nested structure.
///
/// `outer` focuses on the intermediate part of the whole structure and
/// `inner` focuses within it - the left argument is the outermost lens,
/// matching left-to-right field-access reading order. Free-function
/// spelling of [`Lens::compose`].
///
/// # Example
///
/// ```
/// use focal::optics::{compose, set, view, tuple_first, tuple_second};
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Foo {
///     bar: (i32, i32),
///     baz: char,
/// }
///
/// let foo = Foo { bar: (10, 2), baz: 'a' };
///
/// let bar_first = compose(lens!(Foo, bar), tuple_first());
/// assert_eq!(view(&bar_first, foo.clone()), 10);
///
/// let bar_second = compose(lens!(Foo, bar), tuple_second());
/// assert_eq!(
///     set(&bar_second, 15, foo),
///     Foo { bar: (10, 15), baz: 'a' },
/// );
/// ```
#[must_use]
pub fn compose<S, Mid, A, L1, L2>(outer: L1, inner: L2) -> ComposedLens<L1, L2, Mid>
where
    L1: Lens<S, Mid>,
    L2: Lens<Mid, A>,
{
    ComposedLens::new(outer, inner)
}
