//! Integration tests for the compiled lens pipeline.
//!
//! These exercise the whole path: expression string → compiled
//! [`SetterLens`] → focused [`Setter`] → rebuilt root, including the
//! structural-sharing guarantees and both error tiers:
//!
//! - [`create_setter`]: compilation and its expected failures
//! - [`SetterLens::lens`]: traversal and its shape-mismatch faults
//! - [`Setter::set`]: non-mutating whole-to-whole updates

use pathlens::optics::{
    CompileError, ExtractError, TraversalError, create_setter,
};
use pathlens::value::Value;
use pathlens::{mapping, sequence};
use rstest::rstest;

fn child<'a>(value: &'a Value, key: &str) -> &'a Value {
    value
        .as_mapping()
        .and_then(|mapping| mapping.get(key))
        .unwrap_or_else(|| panic!("expected key `{key}` in {value}"))
}

fn element(value: &Value, index: usize) -> &Value {
    value
        .as_sequence()
        .and_then(|elements| elements.get(index))
        .unwrap_or_else(|| panic!("expected element {index} in {value}"))
}

// =============================================================================
// Single-Step Paths
// =============================================================================

#[rstest]
fn test_single_step_path_in_mapping() {
    let input = mapping! { "a" => 1 };

    let setter = create_setter("?a").unwrap().lens(&input).unwrap();
    let result = setter.set(2);

    assert_eq!(result, mapping! { "a" => 2 });
}

#[rstest]
fn test_single_step_path_in_sequence() {
    let input = sequence![1];

    let setter = create_setter("?1").unwrap().lens(&input).unwrap();
    let result = setter.set(2);

    assert_eq!(result, sequence![2]);
}

#[rstest]
fn test_single_step_leaves_siblings_shared() {
    let empty = mapping! {};
    let input = Value::from(
        [("a", empty.clone()), ("b", Value::Integer(2))]
            .into_iter()
            .collect::<pathlens::value::Mapping>(),
    );

    let setter = create_setter("?b").unwrap().lens(&input).unwrap();
    let result = setter.set(3);

    assert_eq!(child(&result, "b"), &Value::Integer(3));
    // Unchanged subtrees are the same allocation, not copies.
    assert!(child(&result, "a").ptr_eq(&empty));
}

// =============================================================================
// Deep Paths
// =============================================================================

#[rstest]
fn test_deep_path_in_mappings() {
    let input = mapping! {
        "a" => 1,
        "b" => 2,
        "c" => mapping! { "x" => 3, "y" => 4 },
    };

    let setter = create_setter("?c?y").unwrap().lens(&input).unwrap();
    let result = setter.set(5);

    assert_eq!(
        result,
        mapping! { "a" => 1, "b" => 2, "c" => mapping! { "x" => 3, "y" => 5 } }
    );
    // The ancestor along the path is a fresh container.
    assert!(!child(&result, "c").ptr_eq(child(&input, "c")));
    // The original is untouched.
    assert_eq!(child(&input, "c"), &mapping! { "x" => 3, "y" => 4 });
}

#[rstest]
fn test_deep_path_in_sequences() {
    let input = sequence![1, 2, 3, sequence![4, 5, 6]];

    let setter = create_setter("?4?3").unwrap().lens(&input).unwrap();
    let result = setter.set(7);

    assert_eq!(result, sequence![1, 2, 3, sequence![4, 5, 7]]);
}

#[rstest]
fn test_mixed_mappings_and_sequences() {
    let input = mapping! {
        "a" => 1,
        "b" => sequence![1, 2, 3, mapping! { "c" => 4, "d" => 5, "e" => sequence![6] }],
    };

    let setter = create_setter("?b?4?e?1").unwrap().lens(&input).unwrap();
    let result = setter.set(7);

    assert_eq!(
        element(child(&result, "b"), 3),
        &mapping! { "c" => 4, "d" => 5, "e" => sequence![7] }
    );
}

#[rstest]
fn test_deep_path_shares_every_offpath_subtree() {
    let off_path = sequence![9, 9];
    let inner_sibling = mapping! { "deep" => true };
    let input = mapping! {
        "keep" => off_path.clone(),
        "walk" => mapping! { "sibling" => inner_sibling.clone(), "target" => 0 },
    };

    let setter = create_setter("?walk?target").unwrap().lens(&input).unwrap();
    let result = setter.set(1);

    // Ancestors along the path are rebuilt...
    assert!(!result.ptr_eq(&input));
    assert!(!child(&result, "walk").ptr_eq(child(&input, "walk")));
    // ...while everything off the path is shared.
    assert!(child(&result, "keep").ptr_eq(&off_path));
    assert!(child(child(&result, "walk"), "sibling").ptr_eq(&inner_sibling));
}

// =============================================================================
// Read-Back and Round Trips
// =============================================================================

#[rstest]
fn test_current_returns_the_leaf_before_setting() {
    let input = mapping! { "c" => mapping! { "y" => 4 } };

    let setter = create_setter("?c?y").unwrap().lens(&input).unwrap();

    assert_eq!(setter.current(), Some(&Value::Integer(4)));
}

#[rstest]
fn test_setting_the_leaf_back_preserves_the_root() {
    let input = mapping! { "a" => 1, "c" => mapping! { "x" => 3, "y" => 4 } };

    let setter = create_setter("?c?y").unwrap().lens(&input).unwrap();
    let leaf = setter.current().cloned().unwrap();
    let result = setter.set(leaf);

    // Deep-equal, though ancestors along the path are fresh containers.
    assert_eq!(result, input);
    assert!(!result.ptr_eq(&input));
}

#[rstest]
fn test_compiling_twice_yields_identical_results() {
    let input = mapping! { "c" => mapping! { "x" => 3, "y" => 4 } };

    let first = create_setter("?c?y").unwrap();
    let second = create_setter("?c?y").unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.lens(&input).unwrap().set(5),
        second.lens(&input).unwrap().set(5)
    );
}

#[rstest]
fn test_lens_is_reusable_across_roots() {
    let compiled = create_setter("?a").unwrap();

    let first = compiled.lens(&mapping! { "a" => 1 }).unwrap().set(10);
    let second = compiled.lens(&mapping! { "a" => 2, "b" => 3 }).unwrap().set(20);

    assert_eq!(first, mapping! { "a" => 10 });
    assert_eq!(second, mapping! { "a" => 20, "b" => 3 });
}

// =============================================================================
// Set-to-Create and Sparse Writes
// =============================================================================

#[rstest]
fn test_setting_an_absent_key_creates_it() {
    let input = mapping! { "a" => 1 };

    let setter = create_setter("?new").unwrap().lens(&input).unwrap();

    assert_eq!(setter.current(), None);
    assert_eq!(setter.set(2), mapping! { "a" => 1, "new" => 2 });
}

#[rstest]
fn test_setting_past_the_end_grows_the_sequence() {
    let input = sequence![1];

    let setter = create_setter("?3").unwrap().lens(&input).unwrap();

    assert_eq!(setter.set(9), sequence![1, Value::Null, 9]);
}

// =============================================================================
// Compile-Time Failures
// =============================================================================

#[rstest]
#[case("?a/?b", 2)]
#[case(".?a/.?b", 2)]
fn test_multi_step_paths_are_rejected(#[case] path: &str, #[case] count: usize) {
    assert_eq!(
        create_setter(path).err(),
        Some(CompileError::Extract(ExtractError::TooManySteps { count }))
    );
}

#[rstest]
#[case("42")]
#[case("\"text\"")]
fn test_expressions_without_lookups_are_rejected(#[case] path: &str) {
    assert_eq!(
        create_setter(path).err(),
        Some(CompileError::Extract(ExtractError::NoLookups))
    );
}

#[rstest]
fn test_malformed_expressions_surface_parse_errors() {
    assert!(matches!(
        create_setter("?a?").err(),
        Some(CompileError::Parse(_))
    ));
}

// =============================================================================
// Traversal Faults
// =============================================================================

#[rstest]
fn test_name_against_sequence_root() {
    let input = sequence![1, 2, 3];

    let fault = create_setter("?a").unwrap().lens(&input).err();

    assert_eq!(
        fault,
        Some(TraversalError::NotAnIndex {
            identifier: "a".to_string(),
            sequence: input,
        })
    );
}

#[rstest]
fn test_descending_into_a_leaf_names_the_step() {
    let input = mapping! { "a" => 1, "c" => 2 };

    let fault = create_setter("?c?y").unwrap().lens(&input).err();

    let Some(TraversalError::NotAContainer {
        step,
        identifier,
        found,
        ..
    }) = fault
    else {
        panic!("expected a NotAContainer fault");
    };
    assert_eq!(step, 1);
    assert_eq!(identifier, "c");
    assert_eq!(found, Some(Value::Integer(2)));
}

#[rstest]
fn test_descending_through_an_absent_key_is_a_fault() {
    let input = mapping! { "a" => 1 };

    let fault = create_setter("?missing?x").unwrap().lens(&input).err();

    assert!(matches!(
        fault,
        Some(TraversalError::NotAContainer { step: 1, found: None, .. })
    ));
}

#[rstest]
fn test_fault_messages_carry_diagnostics() {
    let input = sequence![1, 2, 3];
    let fault = create_setter("?a").unwrap().lens(&input).unwrap_err();

    assert_eq!(
        fault.to_string(),
        "cannot use the string `a` as a 1-based position into the sequence [1, 2, 3]"
    );
}
