//! Operator semantics for single filter items
//!
//! Decides pass/fail for one item against one record. String comparison
//! is case-insensitive on both sides: the query is the item value,
//! lower-cased and trimmed, and resolved field values are lower-cased
//! before comparing. An empty query passes unconditionally, so "no
//! value entered yet" means "not filtering on this field".
//!
//! Unrecognized operators, and operator/shape pairings with no defined
//! rule, pass explicitly: a filter must never hide records it does not
//! understand.

use serde_json::Value;

use crate::ast::{FilterItem, Operator};

use super::options::EvalOptions;
use super::resolver;

/// Evaluates one filter item against one record
pub struct ItemMatcher;

impl ItemMatcher {
    /// Checks whether `record` satisfies `item`
    pub fn matches(item: &FilterItem, record: &Value, options: &EvalOptions) -> bool {
        let query = item.value.to_lowercase();
        let query = query.trim();

        // Empty query bypass
        if query.is_empty() {
            return true;
        }

        let field = match resolver::resolve(record, &item.field) {
            Some(value) if !value.is_null() => value,
            _ => return Self::matches_absent(&item.operator),
        };

        match (&item.operator, field) {
            (Operator::Is, value) => {
                Self::stringify(value).map_or(false, |text| text == query)
            }
            (Operator::IsNot, value) => {
                Self::stringify(value).map_or(true, |text| text != query)
            }
            (Operator::Contains, Value::Array(elements)) => {
                // Any element present in the comma-split query list
                let tokens = Self::query_tokens(query);
                elements.iter().any(|element| {
                    Self::stringify(element)
                        .map_or(false, |text| tokens.contains(&text.as_str()))
                })
            }
            (Operator::Contains, value) => {
                Self::stringify(value).map_or(false, |text| text.contains(query))
            }
            (Operator::DoesNotContain, Value::Array(elements)) => {
                // Every element absent from the comma-split query list
                let tokens = Self::query_tokens(query);
                elements.iter().all(|element| {
                    Self::stringify(element)
                        .map_or(true, |text| !tokens.contains(&text.as_str()))
                })
            }
            (Operator::DoesNotContain, value) => {
                Self::stringify(value).map_or(true, |text| !text.contains(query))
            }
            // Numeric operators are defined for scalars only; an array
            // field is an unhandled shape and passes.
            (Operator::MoreThan | Operator::LessThan, Value::Array(_)) => true,
            (Operator::MoreThan, value) => {
                Self::compare_numeric(value, query).map_or(false, |ordering| {
                    if options.legacy_numeric_direction {
                        // Historical direction: more-than passes when
                        // the field is below the query.
                        ordering.is_lt()
                    } else {
                        ordering.is_gt()
                    }
                })
            }
            (Operator::LessThan, value) => {
                Self::compare_numeric(value, query).map_or(false, |ordering| {
                    if options.legacy_numeric_direction {
                        ordering.is_gt()
                    } else {
                        ordering.is_lt()
                    }
                })
            }
            // Permissive default for anything this engine does not
            // recognize.
            (Operator::Other(_), _) => true,
        }
    }

    /// Pass/fail when the field is missing or null.
    ///
    /// One explicit table so the behavior is visible and testable: the
    /// negated operators and unknown operators pass, everything else
    /// fails. `is`/`is-not` are therefore independently defined here,
    /// not derived from each other.
    fn matches_absent(operator: &Operator) -> bool {
        match operator {
            Operator::Is
            | Operator::Contains
            | Operator::MoreThan
            | Operator::LessThan => false,
            Operator::IsNot | Operator::DoesNotContain | Operator::Other(_) => true,
        }
    }

    /// Lower-cased text form of a value, if it has one.
    ///
    /// Arrays take the comma-joined form of their elements; null and
    /// objects have no text form.
    fn stringify(value: &Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text.to_lowercase()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Array(elements) => Some(
                elements
                    .iter()
                    .map(|element| Self::stringify(element).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Null | Value::Object(_) => None,
        }
    }

    /// Numeric form of a value, if it has one
    fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Comma-split, trimmed query tokens for the containment operators
    fn query_tokens(query: &str) -> Vec<&str> {
        query
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Orders the field value against the query numerically.
    ///
    /// Either side failing to parse, or comparing against NaN, yields
    /// `None`, which the numeric operators treat as a fail.
    fn compare_numeric(field: &Value, query: &str) -> Option<std::cmp::Ordering> {
        let field_number = Self::as_number(field)?;
        let query_number = query.parse::<f64>().ok()?;
        field_number.partial_cmp(&query_number)
    }
}
