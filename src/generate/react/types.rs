use std::fmt;

use crate::parse::intermediate::SchemaKind;

pub(super) const ANY: &str = "any";

/// (kind, format, typescript type); a `None` format matches any format.
/// Rows are checked in order, so format-specific rows come first.
const PRIMITIVE_TYPES: &[(SchemaKind, Option<&str>, &str)] = &[
    (SchemaKind::String, Some("date-time"), "Date"),
    (SchemaKind::String, None, "string"),
    (SchemaKind::Integer, None, "number"),
    (SchemaKind::Boolean, None, "boolean"),
    (SchemaKind::Array, None, "any[]"),
];

pub(super) fn primitive_type(kind: SchemaKind, format: Option<&str>) -> &'static str {
    PRIMITIVE_TYPES
        .iter()
        .find(|(k, f, _)| *k == kind && (f.is_none() || *f == format))
        .map(|(_, _, ts)| *ts)
        .unwrap_or(ANY)
}

pub(super) type Tt = TsType;
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Builtin(&'static str),
    /// a declared (or dangling) type name
    Named(String),
    List(Box<TsType>),
}

impl fmt::Display for Tt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tt::Builtin(ts) => write!(f, "{}", ts),
            Tt::Named(name) => write!(f, "{}", identifier(name)),
            Tt::List(inner) => write!(f, "{}[]", inner),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// `order-line` -> `orderLine`, `Foo.Bar` -> `FooBar`, `2fa` -> `_2fa`.
/// Separators drop out and the segment after one starts upper case.
pub(super) fn identifier(name: &str) -> String {
    if is_identifier(name) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            if upper_next && !out.is_empty() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    match out.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", out),
        Some(_) => out,
    }
}

/// property keys that are not plain identifiers get quoted
pub(super) fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

/// `item.placedAt`, or `item['created-at']` for keys that need quoting
pub(super) fn property_access(object: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", object, name)
    } else {
        format!("{}[{}]", object, property_key(name))
    }
}
