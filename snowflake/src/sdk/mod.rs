//! Parsers for values Snowflake reports in more than one spelling
//!
//! These are the normalizers handed to
//! [`normalize_and_compare`](crate::resources::diff_suppressions::normalize_and_compare).

pub mod identifiers;
pub mod warehouse;

pub use identifiers::{
    parse_account_object_identifier, parse_schema_object_identifier, AccountObjectIdentifier,
    SchemaObjectIdentifier,
};
pub use warehouse::{to_warehouse_size, WarehouseSize};
