//! Evaluation options
//!
//! The numeric operators historically compare in the direction opposite
//! to their names: `more-than` passes when the field is numerically
//! below the query and `less-than` when it is above. Shipped behavior
//! keeps that direction; callers that want the names to mean what they
//! say flip [`EvalOptions::legacy_numeric_direction`].

/// Tunables for tree evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Keep the historical inverted comparison direction for the
    /// `more-than`/`less-than` operators
    pub legacy_numeric_direction: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            legacy_numeric_direction: true,
        }
    }
}

impl EvalOptions {
    /// Options matching the shipped behavior
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Options where the numeric operators follow their names
    pub fn named_numeric_direction() -> Self {
        Self {
            legacy_numeric_direction: false,
        }
    }
}
