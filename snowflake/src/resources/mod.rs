pub mod diff_suppressions;
pub mod query_output;

use std::fmt;

pub use query_output::{ParameterValue, QueryOutputs};

/// Computed attribute holding the resource's `SHOW ...` row
pub const SHOW_OUTPUT_ATTRIBUTE_NAME: &str = "show_output";
/// Computed attribute holding the resource's `DESCRIBE ...` properties
pub const DESCRIBE_OUTPUT_ATTRIBUTE_NAME: &str = "describe_output";
/// Computed attribute holding the resource's `SHOW PARAMETERS ...` rows
pub const RELATED_PARAMETERS_ATTRIBUTE_NAME: &str = "parameters";

/// Resource types known to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Account,
    Database,
    Schema,
    Table,
    User,
    Warehouse,
}

impl Resource {
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Account => "snowflake_account",
            Resource::Database => "snowflake_database",
            Resource::Schema => "snowflake_schema",
            Resource::Table => "snowflake_table",
            Resource::User => "snowflake_user",
            Resource::Warehouse => "snowflake_warehouse",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
