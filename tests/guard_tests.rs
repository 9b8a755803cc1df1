#![cfg(feature = "guard")]
//! Tests for the null-guard wrappers and truthiness helpers.

use combinate::guard::{Truthy, do_when, existy, fnull, fnull_sequence, truthy};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// fnull
// =============================================================================

#[test]
fn test_fnull_multiply_with_defaults() {
    let safe_mult = fnull(|total: i32, element: i32| total * element, (1, 1));

    assert_eq!(safe_mult((Some(1), Some(2))), 2);
    assert_eq!(safe_mult((None, Some(3))), 3);
    assert_eq!(safe_mult((Some(4), None)), 4);
    assert_eq!(safe_mult((None, None)), 1);
}

#[test]
fn test_fnull_fold_over_sparse_values() {
    let safe_mult = fnull(|total: i32, element: i32| total * element, (1, 1));
    let values = [Some(1), Some(2), Some(3), None, Some(5)];
    let product = values
        .into_iter()
        .fold(1, |total, element| safe_mult((Some(total), element)));
    assert_eq!(product, 30);
}

#[test]
fn test_fnull_passes_present_false_through() {
    let both = fnull(|first: bool, second: bool| first && second, (true, true));
    assert!(!both((Some(false), None)));
    assert!(both((None, None)));
}

#[test]
fn test_fnull_three_positions_with_strings() {
    let address = fnull(
        |street: String, city: String, zip: u32| format!("{street}, {city} {zip}"),
        (String::from("Main St"), String::from("Springfield"), 12345),
    );
    assert_eq!(
        address((Some(String::from("Elm St")), None, None)),
        "Elm St, Springfield 12345"
    );
}

#[test]
fn test_fnull_sequence_never_calls_with_absence() {
    let calls = Cell::new(0);
    let counted = fnull_sequence(
        |values: Vec<i32>| {
            calls.set(calls.get() + 1);
            values.len()
        },
        Vec::new(),
    );

    assert_eq!(counted(vec![Some(1), None]), None);
    assert_eq!(calls.get(), 0);
    assert_eq!(counted(vec![Some(1), Some(2)]), Some(2));
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(vec![None, None, None], vec![10, 20, 20])]
#[case(vec![Some(1), None], vec![1, 20])]
#[case(vec![], vec![])]
fn test_fnull_sequence_positions(#[case] arguments: Vec<Option<i32>>, #[case] expected: Vec<i32>) {
    let collect = fnull_sequence(|values: Vec<i32>| values, [10, 20]);
    assert_eq!(collect(arguments), Some(expected));
}

// =============================================================================
// Existy / Truthy
// =============================================================================

#[rstest]
#[case(Some(false), true, false)]
#[case(Some(true), true, true)]
#[case(None, false, false)]
fn test_existy_and_truthy(#[case] value: Option<bool>, #[case] is_existy: bool, #[case] is_truthy: bool) {
    assert_eq!(existy(&value), is_existy);
    assert_eq!(truthy(&value), is_truthy);
}

#[test]
fn test_zero_and_empty_are_truthy() {
    assert!(truthy(&Some(0)));
    assert!(truthy(&Some("")));
    assert!(truthy(&Some(Vec::<i32>::new())));
    assert!(String::new().is_truthy());
}

#[test]
fn test_do_when_skips_action() {
    let ran = Cell::new(false);
    assert_eq!(do_when(false, || ran.set(true)), None);
    assert!(!ran.get());
    assert_eq!(do_when(Some(1), || 2), Some(2));
}
