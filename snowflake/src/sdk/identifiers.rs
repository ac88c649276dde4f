//! Object identifiers as Snowflake resolves them
//!
//! Unquoted identifiers are case-insensitive and stored upper-cased; quoted
//! identifiers keep their case and may contain any character, with `""`
//! standing for a literal quote. `abc`, `ABC` and `"ABC"` all name the same
//! object, while `"abc"` does not.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static UNQUOTED_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").expect("unquoted identifier regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountObjectIdentifier {
    name: String,
}

impl AccountObjectIdentifier {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AccountObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaObjectIdentifier {
    database: String,
    schema: String,
    name: String,
}

impl SchemaObjectIdentifier {
    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SchemaObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            quote(&self.database),
            quote(&self.schema),
            quote(&self.name)
        )
    }
}

pub fn parse_account_object_identifier(s: &str) -> Result<AccountObjectIdentifier> {
    match split_parts(s)?.as_slice() {
        [name] => Ok(AccountObjectIdentifier {
            name: resolve_part(s, name)?,
        }),
        parts => Err(invalid(s, format!("expected 1 part, got {}", parts.len()))),
    }
}

pub fn parse_schema_object_identifier(s: &str) -> Result<SchemaObjectIdentifier> {
    match split_parts(s)?.as_slice() {
        [database, schema, name] => Ok(SchemaObjectIdentifier {
            database: resolve_part(s, database)?,
            schema: resolve_part(s, schema)?,
            name: resolve_part(s, name)?,
        }),
        parts => Err(invalid(s, format!("expected 3 parts, got {}", parts.len()))),
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> Error {
    Error::InvalidIdentifier {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Split on dots that are not inside quotes
fn split_parts(s: &str) -> Result<Vec<&str>> {
    let s = s.trim();
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '.' if !in_quotes => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if in_quotes {
        return Err(invalid(s, "unterminated quoted identifier"));
    }
    parts.push(&s[start..]);
    Ok(parts)
}

fn resolve_part(input: &str, part: &str) -> Result<String> {
    if let Some(quoted) = part.strip_prefix('"') {
        let inner = quoted
            .strip_suffix('"')
            .ok_or_else(|| invalid(input, format!("malformed quoted part {}", part)))?;
        if inner.is_empty() {
            return Err(invalid(input, "empty quoted identifier"));
        }
        return Ok(inner.replace("\"\"", "\""));
    }

    if !UNQUOTED_IDENTIFIER.is_match(part) {
        return Err(invalid(input, format!("invalid unquoted part {:?}", part)));
    }
    Ok(part.to_ascii_uppercase())
}
