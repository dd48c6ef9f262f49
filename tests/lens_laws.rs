//! Property-based tests for Lens laws.
//!
//! This module verifies that lens implementations satisfy the required laws:
//!
//! - **PutGet Law**: `lens.view(lens.set(source, value)) == value`
//! - **GetPut Law**: `lens.set(source.clone(), lens.view(source)) == source`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! Plus composition associativity, view non-mutation, and focus
//! independence. Using proptest, we generate random inputs to verify
//! these laws across a wide range of values.

use focal::lens;
use focal::optics::{Lens, compose, tuple_first, tuple_second};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Foo {
    bar: (i32, i32),
    baz: char,
}

// =============================================================================
// Lens Laws for Point
// =============================================================================

proptest! {
    /// GetPut Law for Point.x: Viewing and setting back yields the original
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let value = x_lens.view(point.clone());
        let result = x_lens.set(point.clone(), value);
        prop_assert_eq!(result, point);
    }

    /// PutGet Law for Point.x: Setting then viewing yields the set value
    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let updated = x_lens.set(point, new_value);
        prop_assert_eq!(x_lens.view(updated), new_value);
    }

    /// PutPut Law for Point.x: Two consecutive sets is equivalent to the last set
    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let left = x_lens.set(x_lens.set(point.clone(), value1), value2);
        let right = x_lens.set(point, value2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for Person with String field
// =============================================================================

proptest! {
    /// GetPut Law for Person.name
    #[test]
    fn prop_person_name_get_put_law(name in ".*", age in any::<u32>()) {
        let name_lens = lens!(Person, name);
        let person = Person { name, age };
        let value = name_lens.view(person.clone());
        let result = name_lens.set(person.clone(), value);
        prop_assert_eq!(result, person);
    }

    /// PutGet Law for Person.name
    #[test]
    fn prop_person_name_put_get_law(name in ".*", age in any::<u32>(), new_name in ".*") {
        let name_lens = lens!(Person, name);
        let person = Person { name, age };
        let updated = name_lens.set(person, new_name.clone());
        prop_assert_eq!(name_lens.view(updated), new_name);
    }

    /// PutPut Law for Person.name
    #[test]
    fn prop_person_name_put_put_law(
        name in ".*",
        age in any::<u32>(),
        name1 in ".*",
        name2 in ".*"
    ) {
        let name_lens = lens!(Person, name);
        let person = Person { name, age };
        let left = name_lens.set(name_lens.set(person.clone(), name1), name2.clone());
        let right = name_lens.set(person, name2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for Tuple Lenses
// =============================================================================

proptest! {
    /// GetPut Law for tuple_first
    #[test]
    fn prop_tuple_first_get_put_law(pair in any::<(i32, i32)>()) {
        let first = tuple_first();
        let value = first.view(pair);
        prop_assert_eq!(first.set(pair, value), pair);
    }

    /// PutGet Law for tuple_first
    #[test]
    fn prop_tuple_first_put_get_law(pair in any::<(i32, i32)>(), new_value in any::<i32>()) {
        let first = tuple_first();
        prop_assert_eq!(first.view(first.set(pair, new_value)), new_value);
    }

    /// PutPut Law for tuple_second
    #[test]
    fn prop_tuple_second_put_put_law(
        pair in any::<(i32, i32)>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let second = tuple_second();
        let left = second.set(second.set(pair, value1), value2);
        let right = second.set(pair, value2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for Composed Lenses
// =============================================================================

proptest! {
    /// GetPut Law through composition
    #[test]
    fn prop_composed_get_put_law(
        first_component in any::<i32>(),
        second_component in any::<i32>(),
        baz in any::<char>()
    ) {
        let bar_second = lens!(Foo, bar).compose(tuple_second());
        let foo = Foo { bar: (first_component, second_component), baz };
        let value = bar_second.view(foo.clone());
        prop_assert_eq!(bar_second.set(foo.clone(), value), foo);
    }

    /// PutGet Law through composition
    #[test]
    fn prop_composed_put_get_law(
        first_component in any::<i32>(),
        second_component in any::<i32>(),
        baz in any::<char>(),
        new_value in any::<i32>()
    ) {
        let bar_second = lens!(Foo, bar).compose(tuple_second());
        let foo = Foo { bar: (first_component, second_component), baz };
        prop_assert_eq!(bar_second.view(bar_second.set(foo, new_value)), new_value);
    }

    /// PutPut Law through composition
    #[test]
    fn prop_composed_put_put_law(
        first_component in any::<i32>(),
        second_component in any::<i32>(),
        baz in any::<char>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let bar_second = lens!(Foo, bar).compose(tuple_second());
        let foo = Foo { bar: (first_component, second_component), baz };
        let left = bar_second.set(bar_second.set(foo.clone(), value1), value2);
        let right = bar_second.set(foo, value2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Composition Associativity
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Level3 {
    value: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Level2 {
    below: Level3,
}

#[derive(Clone, PartialEq, Debug)]
struct Level1 {
    below: Level2,
}

proptest! {
    /// (l1 . l2) . l3 and l1 . (l2 . l3) view and set identically
    #[test]
    fn prop_composition_associativity(initial in any::<i32>(), replacement in any::<i32>()) {
        let source = Level1 {
            below: Level2 {
                below: Level3 { value: initial },
            },
        };

        let left = compose(
            compose(lens!(Level1, below), lens!(Level2, below)),
            lens!(Level3, value),
        );
        let right = compose(
            lens!(Level1, below),
            compose(lens!(Level2, below), lens!(Level3, value)),
        );

        prop_assert_eq!(left.view(source.clone()), right.view(source.clone()));
        prop_assert_eq!(
            left.set(source.clone(), replacement),
            right.set(source, replacement)
        );
    }
}

// =============================================================================
// View Non-Mutation and Independence
// =============================================================================

proptest! {
    /// Repeated views never change later view/set results
    #[test]
    fn prop_view_non_mutation(
        first_component in any::<i32>(),
        second_component in any::<i32>(),
        baz in any::<char>(),
        replacement in any::<i32>()
    ) {
        let bar_first = lens!(Foo, bar).compose(tuple_first());
        let foo = Foo { bar: (first_component, second_component), baz };

        let once = bar_first.view(foo.clone());
        let twice = bar_first.view(foo.clone());
        prop_assert_eq!(once, twice);

        let after_views = bar_first.set(foo.clone(), replacement);
        prop_assert_eq!(after_views, bar_first.set(foo, replacement));
    }

    /// Setting through one composed lens never alters the other foci
    #[test]
    fn prop_set_independence(
        first_component in any::<i32>(),
        second_component in any::<i32>(),
        baz in any::<char>(),
        replacement in any::<i32>()
    ) {
        let bar_first = lens!(Foo, bar).compose(tuple_first());
        let bar_second = lens!(Foo, bar).compose(tuple_second());
        let baz_lens = lens!(Foo, baz);

        let foo = Foo { bar: (first_component, second_component), baz };
        let updated = bar_second.set(foo, replacement);

        prop_assert_eq!(bar_first.view(updated.clone()), first_component);
        prop_assert_eq!(baz_lens.view(updated), baz);
    }
}
