//! Filter tree subsystem for sift
//!
//! Defines the declarative filter tree: groups combining child nodes
//! with and/or, and items comparing one named field against a text
//! value.
//!
//! # Invariants
//!
//! - A tree has exactly one root, always a group
//! - An empty group is vacuously satisfied
//! - The tree is immutable input to evaluation; nothing mutates it

mod errors;
mod node;
mod operator;

pub use errors::{TreeError, TreeResult};
pub use node::{Condition, FilterGroup, FilterItem, FilterNode};
pub use operator::Operator;
