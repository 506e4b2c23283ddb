//! Recursive tree evaluation and collection filtering
//!
//! Walks a filter tree against one record, combining child results per
//! the group condition, and filters whole collections. Evaluation is a
//! pure read of its inputs, so concurrent callers need no coordination.

use serde_json::Value;
use tracing::debug;

use crate::ast::{Condition, FilterGroup, FilterNode};

use super::matcher::ItemMatcher;
use super::options::EvalOptions;

/// Evaluates filter trees against records
pub struct FilterEvaluator;

impl FilterEvaluator {
    /// Checks whether `record` satisfies `tree`, with default options
    pub fn matches(tree: &FilterGroup, record: &Value) -> bool {
        Self::matches_with(tree, record, &EvalOptions::default())
    }

    /// Checks whether `record` satisfies `tree`
    pub fn matches_with(tree: &FilterGroup, record: &Value, options: &EvalOptions) -> bool {
        Self::matches_group(tree, record, options)
    }

    /// Checks a single node, group or item, against `record`
    pub fn matches_node(node: &FilterNode, record: &Value, options: &EvalOptions) -> bool {
        match node {
            FilterNode::Group(group) => Self::matches_group(group, record, options),
            FilterNode::Item(item) => ItemMatcher::matches(item, record, options),
        }
    }

    fn matches_group(group: &FilterGroup, record: &Value, options: &EvalOptions) -> bool {
        // An empty group is vacuously satisfied: an empty filter must
        // not exclude records.
        if group.items.is_empty() {
            return true;
        }

        // Short-circuiting is safe: item evaluation is pure, so
        // evaluation order is not observable.
        match group.condition {
            Condition::And => group
                .items
                .iter()
                .all(|node| Self::matches_node(node, record, options)),
            Condition::Or => group
                .items
                .iter()
                .any(|node| Self::matches_node(node, record, options)),
        }
    }

    /// Filters `records` down to those satisfying `tree`, with default
    /// options.
    ///
    /// Preserves input order and returns a new collection; the input
    /// slice and its records are not mutated.
    pub fn filter(tree: &FilterGroup, records: &[Value]) -> Vec<Value> {
        Self::filter_with(tree, records, &EvalOptions::default())
    }

    /// Filters `records` down to those satisfying `tree`
    pub fn filter_with(
        tree: &FilterGroup,
        records: &[Value],
        options: &EvalOptions,
    ) -> Vec<Value> {
        let matched: Vec<Value> = records
            .iter()
            .filter(|record| Self::matches_with(tree, record, options))
            .cloned()
            .collect();

        debug!(
            total = records.len(),
            matched = matched.len(),
            "filter pass complete"
        );

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FilterItem;
    use serde_json::json;

    #[test]
    fn test_empty_group_matches_everything() {
        let record = json!({"anything": 1});
        assert!(FilterEvaluator::matches(&FilterGroup::all(), &record));
        assert!(FilterEvaluator::matches(&FilterGroup::any(), &record));
        assert!(FilterEvaluator::matches(&FilterGroup::all(), &json!(null)));
    }

    #[test]
    fn test_and_requires_all_children() {
        let tree = FilterGroup::all()
            .with_item(FilterItem::is("status", "open"))
            .with_item(FilterItem::contains("title", "report"));

        assert!(FilterEvaluator::matches(
            &tree,
            &json!({"status": "Open", "title": "Weekly Report"})
        ));
        assert!(!FilterEvaluator::matches(
            &tree,
            &json!({"status": "closed", "title": "Weekly Report"})
        ));
    }

    #[test]
    fn test_or_requires_any_child() {
        let tree = FilterGroup::any()
            .with_item(FilterItem::is("status", "open"))
            .with_item(FilterItem::is("status", "pending"));

        assert!(FilterEvaluator::matches(&tree, &json!({"status": "pending"})));
        assert!(!FilterEvaluator::matches(&tree, &json!({"status": "closed"})));
    }

    #[test]
    fn test_nested_groups_compose() {
        // status is open AND (kind is bug OR kind is task)
        let tree = FilterGroup::all()
            .with_item(FilterItem::is("status", "open"))
            .with_group(
                FilterGroup::any()
                    .with_item(FilterItem::is("kind", "bug"))
                    .with_item(FilterItem::is("kind", "task")),
            );

        assert!(FilterEvaluator::matches(
            &tree,
            &json!({"status": "open", "kind": "task"})
        ));
        assert!(!FilterEvaluator::matches(
            &tree,
            &json!({"status": "open", "kind": "epic"})
        ));
        assert!(!FilterEvaluator::matches(
            &tree,
            &json!({"status": "closed", "kind": "bug"})
        ));
    }

    #[test]
    fn test_filter_preserves_order() {
        let tree = FilterGroup::all().with_item(FilterItem::is("keep", "yes"));
        let records = vec![
            json!({"id": 1, "keep": "yes"}),
            json!({"id": 2, "keep": "no"}),
            json!({"id": 3, "keep": "YES"}),
        ];

        let matched = FilterEvaluator::filter(&tree, &records);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0]["id"], json!(1));
        assert_eq!(matched[1]["id"], json!(3));

        // Input untouched.
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["keep"], json!("no"));
    }
}
