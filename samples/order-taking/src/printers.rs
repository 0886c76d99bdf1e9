//! Describing lists by their shape.

use std::fmt::Display;

use typedomain::sum::{Empty, HeadTail, Pair, Single, match_on};

/// Describes `values` by how many elements it has.
#[must_use]
pub fn describe_list<T: Display>(values: &[T]) -> String {
    match_on(values)
        .with(Empty, |()| "list is empty".to_string())
        .with(Single, |value| format!("list has one element: {value}"))
        .with(Pair, |pair| {
            format!("list has two elements: {} and {}", pair.first, pair.second)
        })
        .otherwise(|_| "list has more than two elements".to_string())
}

/// Describes the first element of `values` and how many follow it.
#[must_use]
pub fn describe_first<T: Display>(values: &[T]) -> String {
    match_on(values)
        .with(HeadTail, |parts| {
            format!("starts with {} followed by {} more", parts.head, parts.tail.len())
        })
        .otherwise(|_| "list is empty".to_string())
}
