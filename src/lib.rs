//! sift - a declarative filter expression engine for JSON records
//!
//! Evaluates user-authored filter trees (boolean groups of field
//! comparisons) against `serde_json::Value` records. Evaluation is pure
//! and total: absent fields, malformed paths, unparseable numbers, and
//! unknown operators all degrade to a defined boolean outcome, never an
//! error.

pub mod ast;
pub mod eval;
