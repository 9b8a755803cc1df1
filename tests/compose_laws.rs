#![cfg(feature = "compose")]
//! Property-based tests for the arity adapter laws.
//!
//! ## Splat / Unsplat
//! - `splat(f)((a, b)) == f(a, b)`
//! - `unsplat(g)((a, b)) == g(vec![a, b])`
//!
//! ## Curry
//! - `curry2!(f)(b)(a) == f(a, b)`
//! - `curry3!(f)(c)(b)(a) == f(a, b, c)`
//!
//! ## Partial
//! - `partial(f, (a,))((b, c)) == partial(f, (a, b))((c,)) == f(a, b, c)`
//! - `partial!(partial!(f, a, __, __), b, __)(c) == partial!(f, a, b, __)(c)`

use combinate::compose::{partial, splat, unsplat};
use combinate::{curry2, curry3};
use proptest::prelude::*;

fn weighted(first: i64, second: i64, third: i64) -> i64 {
    first * 100 + second * 10 + third
}

fn minus(first: i64, second: i64) -> i64 {
    first - second
}

proptest! {
    #[test]
    fn prop_splat_matches_positional(a in -1000_i64..1000, b in -1000_i64..1000) {
        prop_assert_eq!(splat(minus)((a, b)), minus(a, b));
    }

    #[test]
    fn prop_unsplat_matches_vec(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let collect = unsplat(|values: Vec<i32>| values);
        prop_assert_eq!(collect((a, b, c)), vec![a, b, c]);
    }

    #[test]
    fn prop_curry2_reverse_order(a in -1000_i64..1000, b in -1000_i64..1000) {
        prop_assert_eq!(curry2!(minus)(b)(a), minus(a, b));
    }

    #[test]
    fn prop_curry3_reverse_order(a in -9_i64..10, b in -9_i64..10, c in -9_i64..10) {
        prop_assert_eq!(curry3!(weighted)(c)(b)(a), weighted(a, b, c));
    }

    #[test]
    fn prop_partial_associativity(a in -9_i64..10, b in -9_i64..10, c in -9_i64..10) {
        let one_bound = partial(weighted, (a,));
        let two_bound = partial(weighted, (a, b));
        prop_assert_eq!(one_bound((b, c)), weighted(a, b, c));
        prop_assert_eq!(two_bound((c,)), weighted(a, b, c));
    }

    #[test]
    fn prop_partial_macro_associativity(a in -9_i64..10, b in -9_i64..10, c in -9_i64..10) {
        let at_once = combinate::partial!(weighted, a, b, __);
        let step_by_step = combinate::partial!(combinate::partial!(weighted, a, __, __), b, __);
        prop_assert_eq!(at_once(c), step_by_step(c));
    }
}
