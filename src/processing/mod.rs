//! Subnet rule processing logic.
//!
//! This module contains the business logic built on the models:
//! - [`matcher`] - matching addresses against rule lists, de-duplication
//! - [`table`] - sorted (address, interface) tracking

mod matcher;
mod table;

// Re-export public functions and types
pub use matcher::{de_duplicate_rules, find_matching_rule, match_any};
pub use table::AddressTable;
