//! Property-based tests for the Functor and Monad laws of `Option` and
//! `Result`, plus the short-circuit behavior of dependent pipelines.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use std::cell::Cell;

use proptest::prelude::*;
use rstest::rstest;
use typedomain::error::{ValidationError, Violation};
use typedomain::typeclass::{Applicative, Functor, Monad};

fn halve(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value / 2)
}

fn checked_increment(value: i32) -> Result<i32, String> {
    value.checked_add(1).ok_or_else(|| "overflow".to_string())
}

fn non_negative(value: i32) -> Result<i32, String> {
    if value >= 0 {
        Ok(value)
    } else {
        Err(format!("{value} is negative"))
    }
}

// =============================================================================
// Option<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(
            value.fmap(function1).fmap(function2),
            value.fmap(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Option<()>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.flat_map(Some), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        prop_assert_eq!(
            value.flat_map(halve).flat_map(halve),
            value.flat_map(|x| halve(x).flat_map(halve))
        );
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![any::<i32>().prop_map(Ok), "[a-z]{1,8}".prop_map(Err)]
}

proptest! {
    #[test]
    fn prop_result_identity_law(value in result_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in result_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(3);
        let function2 = |n: i32| i64::from(n) * 2;

        prop_assert_eq!(
            value.clone().fmap(function1).fmap(function2),
            value.fmap(|x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Result<(), String>>::pure(value).flat_map(checked_increment),
            checked_increment(value)
        );
    }

    #[test]
    fn prop_result_right_identity(value in result_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Ok), value);
    }

    #[test]
    fn prop_result_associativity(value in result_strategy()) {
        prop_assert_eq!(
            value.clone().flat_map(non_negative).flat_map(checked_increment),
            value.flat_map(|x| non_negative(x).flat_map(checked_increment))
        );
    }
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn none_map_never_calls_function() {
    let calls = Cell::new(0);
    let result = None::<i32>.fmap(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(result, None);
    assert_eq!(calls.get(), 0);
}

type Step = fn(i32) -> Result<i32, ValidationError>;

fn counted(calls: &Cell<u32>, check: Step) -> impl FnOnce(i32) -> Result<i32, ValidationError> + '_ {
    move |value| {
        calls.set(calls.get() + 1);
        check(value)
    }
}

#[rstest]
#[case(-1, 1, Err("Quantity: Must not be less than 0"))]
#[case(5, 3, Ok(7))]
fn dependent_steps_stop_at_first_failure(
    #[case] start: i32,
    #[case] expected_calls: u32,
    #[case] expected: Result<i32, &str>,
) {
    let calls = Cell::new(0);
    let result = Ok::<i32, ValidationError>(start)
        .flat_map(counted(&calls, |value| {
            if value >= 0 {
                Ok(value)
            } else {
                Err(ValidationError::new(
                    "Quantity",
                    Violation::BelowMinimum { min: "0".to_string() },
                ))
            }
        }))
        .flat_map(counted(&calls, |value| Ok(value + 1)))
        .flat_map(counted(&calls, |value| Ok(value + 1)));

    assert_eq!(calls.get(), expected_calls);
    assert_eq!(result.map_err(|error| error.to_string()), expected.map_err(str::to_string));
}
