//! Lens optics in the van Laarhoven encoding.
//!
//! A Lens is an optic that provides get/set access to a part of a larger
//! structure. In this encoding a lens is not a bare getter/setter pair but
//! a single higher-order application operator, generic over the sealed
//! [`Functor`] family: applied under [`ConstFunctor`] it reads, applied
//! under [`IdentityFunctor`] it writes. `view`, `set`, and `modify` are
//! all derived from that one operator, and lens composition is function
//! composition of applications.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **PutGet Law**: Setting then viewing yields the set value.
//!    ```text
//!    lens.view(lens.set(source, value)) == value
//!    ```
//!
//! 2. **GetPut Law**: Viewing and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.view(source)) == source
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Lens, FunctionLens};
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! // Using lens! macro
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.view(point.clone()), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Const, ConstFunctor, Functor, Identity, IdentityFunctor};

use super::compose::ComposedLens;

/// A Lens focuses on a single part within a larger structure.
///
/// The one required method is [`apply`](Lens::apply), the van Laarhoven
/// application operator. Everything else - [`view`](Lens::view),
/// [`set`](Lens::set), [`modify`](Lens::modify) - is a provided method
/// that instantiates `apply` with one of the two functors. Implementors
/// never need to distinguish reading from writing.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (the part being accessed)
///
/// # Laws
///
/// 1. **PutGet Law**: `lens.view(lens.set(source, value)) == value`
/// 2. **GetPut Law**: `lens.set(source.clone(), lens.view(source)) == source`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Applies the lens under a functor.
    ///
    /// This is the whole lens: lift the focus into the functor, then map
    /// the "replace the focus in `source`" continuation over the result.
    /// Under [`IdentityFunctor`] that continuation runs and the result is
    /// the updated structure; under [`ConstFunctor`] the degenerate
    /// `fmap` discards it and the lifted focus rides through unchanged.
    /// No implementation branches on which functor it was given.
    ///
    /// # Arguments
    ///
    /// * `lift` - Wraps the focus into the functor's container
    /// * `source` - The source structure (consumed)
    ///
    /// # Returns
    ///
    /// The functor's container over the source type
    fn apply<F, L>(&self, lift: L, source: S) -> F::Wrapped<S>
    where
        F: Functor,
        L: FnOnce(A) -> F::Wrapped<A>;

    /// Extracts the focused part of the structure.
    ///
    /// Instantiates [`apply`](Lens::apply) with the [`Const`] lift: the
    /// getter's result is captured in a `Const` and the setter
    /// continuation is never invoked.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    ///
    /// # Returns
    ///
    /// The focused value
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// assert_eq!(x_lens.view(Point { x: 10, y: 20 }), 10);
    /// ```
    fn view(&self, source: S) -> A {
        self.apply::<ConstFunctor<A>, _>(Const::new, source)
            .into_value()
    }

    /// Replaces the focused part, returning the updated structure.
    ///
    /// Instantiates [`apply`](Lens::apply) with an [`Identity`] lift that
    /// discards the getter's result and always wraps `value` - the
    /// `constant` short-circuit of the encoding. The setter continuation
    /// then runs under `Identity`'s `fmap`, producing the new structure.
    /// Everything outside the focus is preserved as the setter defines.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focus
    ///
    /// # Returns
    ///
    /// A new source with the focus replaced
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let updated = x_lens.set(Point { x: 10, y: 20 }, 100);
    /// assert_eq!(updated, Point { x: 100, y: 20 });
    /// ```
    fn set(&self, source: S, value: A) -> S {
        self.apply::<IdentityFunctor, _>(move |_| Identity::new(value), source)
            .into_inner()
    }

    /// Modifies the focused part by applying a function.
    ///
    /// The read-modify-write path through the same single
    /// [`apply`](Lens::apply): the lift transforms the getter's result
    /// before wrapping it in [`Identity`].
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The function to apply to the focus
    ///
    /// # Returns
    ///
    /// A new source with the focus modified
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.apply::<IdentityFunctor, _>(move |focus| Identity::new(function(focus)), source)
            .into_inner()
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// `self` is the outer lens (closest to the whole structure) and
    /// `inner` focuses within `self`'s focus, matching left-to-right
    /// field-access reading order. Composition is associative.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The focus type of the inner lens
    /// - `L2`: The type of the inner lens
    ///
    /// # Arguments
    ///
    /// * `inner` - The lens to compose with
    ///
    /// # Returns
    ///
    /// A composed lens focusing on the nested part
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let address_lens = lens!(Person, address);
    /// let street_lens = lens!(Address, street);
    /// let person_street = address_lens.compose(street_lens);
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.view(person), "Main St");
    /// ```
    fn compose<B, L2>(self, inner: L2) -> ComposedLens<Self, L2, A>
    where
        Self: Sized,
        L2: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens built from a getter and setter function.
///
/// This is the primitive lens. The `lens!` macro generates a
/// `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
/// - `G`: The getter function type
/// - `P`: The setter function type
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.view(Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A,
    P: Fn(S, A) -> S,
{
    getter: G,
    setter: P,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, P> FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A,
    P: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// The getter must be a pure projection and the setter must replace
    /// the focus while leaving the rest of the source untouched;
    /// otherwise the lens laws do not hold.
    ///
    /// # Arguments
    ///
    /// * `getter` - Extracts the focus from a borrowed source
    /// * `setter` - Consumes the source and returns it with the focus
    ///   replaced
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::{Lens, FunctionLens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = FunctionLens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    /// ```
    #[must_use]
    pub const fn new(getter: G, setter: P) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, P> Lens<S, A> for FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A,
    P: Fn(S, A) -> S,
{
    fn apply<F, L>(&self, lift: L, source: S) -> F::Wrapped<S>
    where
        F: Functor,
        L: FnOnce(A) -> F::Wrapped<A>,
    {
        let focus = (self.getter)(&source);
        F::fmap(lift(focus), move |replacement| {
            (self.setter)(source, replacement)
        })
    }
}

impl<S, A, G, P> Clone for FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A + Clone,
    P: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, P> std::fmt::Debug for FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A,
    P: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Creates a lens from a getter and setter function.
///
/// Free-function spelling of [`FunctionLens::new`].
///
/// # Example
///
/// ```
/// use focal::optics::{make_lens, view};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = make_lens(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
/// assert_eq!(view(&x_lens, Point { x: 1, y: 2 }), 1);
/// ```
#[must_use]
pub const fn make_lens<S, A, G, P>(getter: G, setter: P) -> FunctionLens<S, A, G, P>
where
    G: Fn(&S) -> A,
    P: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Extracts the focused part of a structure through a lens.
///
/// Free-function spelling of [`Lens::view`].
pub fn view<S, A, L>(lens: &L, source: S) -> A
where
    L: Lens<S, A>,
{
    lens.view(source)
}

/// Replaces the focused part of a structure through a lens.
///
/// Free-function spelling of [`Lens::set`]; the replacement value comes
/// before the source, so calls read "set this focus to `value` in
/// `source`".
pub fn set<S, A, L>(lens: &L, value: A, source: S) -> S
where
    L: Lens<S, A>,
{
    lens.set(source, value)
}

/// Modifies the focused part of a structure through a lens.
///
/// Free-function spelling of [`Lens::modify`].
///
/// # Example
///
/// ```
/// use focal::optics::{over, tuple_first};
///
/// let bumped = over(&tuple_first(), |n: i32| n + 1, (10, 'a'));
/// assert_eq!(bumped, (11, 'a'));
/// ```
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
{
    lens.modify(source, function)
}

/// Creates a lens for a struct field.
///
/// This macro generates a [`FunctionLens`](crate::optics::FunctionLens)
/// that focuses on the specified field of the given struct type. The
/// generated getter clones the field, so the field type must implement
/// `Clone` (free for `Copy` fields).
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
///
/// // View
/// assert_eq!(x_lens.view(point.clone()), 10);
/// assert_eq!(y_lens.view(point.clone()), 20);
///
/// // Set
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
///
/// // Modify
/// let doubled = x_lens.modify(updated, |x| x * 2);
/// assert_eq!(doubled.x, 200);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn x_lens() -> impl Lens<Point, i32> {
        FunctionLens::new(|point: &Point| point.x, |point: Point, x: i32| Point {
            x,
            ..point
        })
    }

    #[test]
    fn test_function_lens_view() {
        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens().view(point), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let point = Point { x: 10, y: 20 };
        let updated = x_lens().set(point, 100);
        assert_eq!(updated.x, 100);
        assert_eq!(updated.y, 20);
    }

    #[test]
    fn test_set_lift_ignores_getter_result() {
        // The getter is still evaluated once, but the write path discards
        // its result rather than feeding it to the setter.
        let point = Point { x: 10, y: 20 };
        let updated = x_lens().set(point, 0);
        assert_eq!(updated, Point { x: 0, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 10, y: 20 };
        let doubled = x_lens.modify(point, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_lens_compose() {
        #[derive(Clone, PartialEq, Debug)]
        struct Inner {
            value: i32,
        }

        #[derive(Clone, PartialEq, Debug)]
        struct Outer {
            inner: Inner,
        }

        let inner_lens = lens!(Outer, inner);
        let value_lens = lens!(Inner, value);
        let composed = inner_lens.compose(value_lens);

        let data = Outer {
            inner: Inner { value: 42 },
        };

        assert_eq!(composed.view(data.clone()), 42);

        let updated = composed.set(data, 100);
        assert_eq!(updated.inner.value, 100);
    }

    #[test]
    fn test_lens_macro() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.view(point), 10);
    }

    #[test]
    fn test_free_functions() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 10, y: 20 };

        assert_eq!(view(&x_lens, point.clone()), 10);
        assert_eq!(set(&x_lens, 7, point.clone()), Point { x: 7, y: 20 });
        assert_eq!(over(&x_lens, |x| x - 1, point), Point { x: 9, y: 20 });
    }
}
