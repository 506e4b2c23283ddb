//! Filter tree structures
//!
//! A node is a discriminated union, distinguished on the wire by the
//! presence of `condition` (group) versus `operator` (item). Groups are
//! boolean combinators, items are leaf comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::TreeResult;
use super::operator::Operator;

/// How a group combines its child results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    And,
    Or,
}

impl Condition {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::And => "and",
            Condition::Or => "or",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single comparison: field, operator, right-hand value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    /// Field name, or dot-separated path into nested objects
    pub field: String,
    /// Comparison operator
    pub operator: Operator,
    /// Right-hand operand, always text; the containment operators read
    /// it as comma-separated alternatives
    pub value: String,
}

impl FilterItem {
    /// Creates a comparison item
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an `is` comparison
    pub fn is(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Is, value)
    }

    /// Creates an `is-not` comparison
    pub fn is_not(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::IsNot, value)
    }

    /// Creates a `contains` comparison
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::Contains, value)
    }

    /// Creates a `does-not-contain` comparison
    pub fn does_not_contain(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::DoesNotContain, value)
    }

    /// Creates a `more-than` comparison
    pub fn more_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::MoreThan, value)
    }

    /// Creates a `less-than` comparison
    pub fn less_than(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Operator::LessThan, value)
    }
}

impl fmt::Display for FilterItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.operator, self.value)
    }
}

/// A node of the filter tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterNode {
    /// Boolean combinator over child nodes
    Group(FilterGroup),
    /// Leaf comparison
    Item(FilterItem),
}

impl From<FilterGroup> for FilterNode {
    fn from(group: FilterGroup) -> Self {
        FilterNode::Group(group)
    }
}

impl From<FilterItem> for FilterNode {
    fn from(item: FilterItem) -> Self {
        FilterNode::Item(item)
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterNode::Group(group) => write!(f, "{}", group),
            FilterNode::Item(item) => write!(f, "{}", item),
        }
    }
}

/// A boolean combinator over child nodes
///
/// The root of every filter tree is a group. `items` may be empty; an
/// empty group matches everything, since an empty filter must not
/// exclude records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// How child results combine
    pub condition: Condition,
    /// Ordered child nodes
    pub items: Vec<FilterNode>,
}

impl FilterGroup {
    /// Creates an empty group with the given condition
    pub fn new(condition: Condition) -> Self {
        Self {
            condition,
            items: Vec::new(),
        }
    }

    /// Creates a group whose children must all pass
    pub fn all() -> Self {
        Self::new(Condition::And)
    }

    /// Creates a group where any passing child suffices
    pub fn any() -> Self {
        Self::new(Condition::Or)
    }

    /// Adds a comparison item
    pub fn with_item(self, item: FilterItem) -> Self {
        self.with_node(FilterNode::Item(item))
    }

    /// Adds a nested group
    pub fn with_group(self, group: FilterGroup) -> Self {
        self.with_node(FilterNode::Group(group))
    }

    /// Adds a child node
    pub fn with_node(mut self, node: FilterNode) -> Self {
        self.items.push(node);
        self
    }

    /// Returns true if this group has no children
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reads a tree from its JSON form
    pub fn from_json(json: &str) -> TreeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes this tree to its JSON form
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match self.condition {
            Condition::And => " AND ",
            Condition::Or => " OR ",
        };

        write!(f, "(")?;
        for (index, node) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", joiner)?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder() {
        let tree = FilterGroup::all()
            .with_item(FilterItem::is("status", "open"))
            .with_group(FilterGroup::any().with_item(FilterItem::more_than("age", "10")));

        assert_eq!(tree.condition, Condition::And);
        assert_eq!(tree.items.len(), 2);
        assert!(!tree.is_empty());
        assert!(FilterGroup::any().is_empty());
    }

    #[test]
    fn test_untagged_discrimination() {
        // A node with `condition` is a group, a node with `operator`
        // is an item.
        let json = r#"{
            "condition": "or",
            "items": [
                {"field": "status", "operator": "is", "value": "open"},
                {"condition": "and", "items": []}
            ]
        }"#;

        let tree = FilterGroup::from_json(json).unwrap();
        assert_eq!(tree.condition, Condition::Or);
        assert!(matches!(tree.items[0], FilterNode::Item(_)));
        assert!(matches!(tree.items[1], FilterNode::Group(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let tree = FilterGroup::any()
            .with_item(FilterItem::contains("tags", "a, b"))
            .with_item(FilterItem::new("kind", Operator::Other("near".into()), "x"));

        let json = tree.to_json().unwrap();
        let parsed = FilterGroup::from_json(&json).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_malformed_tree_is_rejected() {
        // Root must be a group, not a bare item.
        let json = r#"{"field": "status", "operator": "is", "value": "open"}"#;
        assert!(FilterGroup::from_json(json).is_err());

        // Unlike operators, a condition outside and/or changes
        // combination semantics and has no permissive reading.
        let json = r#"{"condition": "nor", "items": []}"#;
        assert!(FilterGroup::from_json(json).is_err());
    }

    #[test]
    fn test_display() {
        let tree = FilterGroup::all()
            .with_item(FilterItem::is("status", "open"))
            .with_item(FilterItem::less_than("age", "30"));

        assert_eq!(
            tree.to_string(),
            "(status is \"open\" AND age less-than \"30\")"
        );
    }
}
