//! Filter evaluation subsystem for sift
//!
//! Evaluates filter trees against JSON records.
//!
//! # Evaluation Flow (strict order)
//!
//! 1. Normalize the item query (lower-case, trim)
//! 2. An empty query passes unconditionally
//! 3. Resolve the field path against the record
//! 4. Apply operator semantics to the resolved value
//! 5. Combine child results per the group condition
//!
//! # Invariants
//!
//! - Total: defined for every input, never panics or raises
//! - Pure: neither the tree nor the records are mutated
//! - Permissive: unknown operators and unhandled value shapes pass

mod evaluator;
mod matcher;
mod options;
mod resolver;

pub use evaluator::FilterEvaluator;
pub use matcher::ItemMatcher;
pub use options::EvalOptions;
pub use resolver::resolve;
