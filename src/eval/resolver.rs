//! Dotted-path field resolution
//!
//! Resolves a field name, or a dot-separated path, against a record by
//! descending through nested objects. Resolution never fails: a missing
//! key, a null intermediate, or a non-object intermediate yields `None`.
//! Array-index segments are not supported; paths address plain nested
//! objects only.

use serde_json::Value;

/// Resolves `field` against `record`, descending on `.`.
///
/// Returns `None` as soon as any path segment is absent.
pub fn resolve<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    if !field.contains('.') {
        return record.get(field);
    }

    let mut current = record;
    for segment in field.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}
