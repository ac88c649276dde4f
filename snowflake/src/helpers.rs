//! Small conversions shared by resources

/// Parse the textual flags Snowflake returns for boolean parameters.
///
/// Snowflake reports parameter values as strings (`"true"`, `"FALSE"`) and
/// some older properties as `0`/`1`. Matching ignores case and surrounding
/// whitespace.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Like [`parse_bool`] but anything unrecognized counts as false
pub fn string_to_bool(value: &str) -> bool {
    parse_bool(value).unwrap_or(false)
}
