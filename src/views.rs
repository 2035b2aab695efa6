//! Output Views
//!
//! Renders bound values for console output. Plain glue over iteration.

use std::fmt::Display;

/// Join values into a single delimited string.
pub fn join_delimited<I>(values: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
