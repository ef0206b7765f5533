use std::collections::HashSet;

use indexmap::IndexMap;

pub struct IntermediateFormat {
    pub title: String,
    pub version: String,
    pub catalog: SchemaCatalog,
    pub routes: Vec<Route>,
}

/// schema name -> schema, in the order the document declares them
pub type SchemaCatalog = IndexMap<String, SchemaNode>;

/// names already turned into a declaration during one generation run
pub type EmittedSet = HashSet<String>;

/// Intermediate schema tree, one per named or inline schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Primitive {
        kind: SchemaKind,
        format: Option<String>,
    },
    /// properties in authored order
    Object(Vec<(String, SchemaNode)>),
    Array(Box<SchemaNode>),
    /// reference to a catalog entry
    /// ie `Address` for #/components/schemas/Address
    Reference(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    String,
    Integer,
    Boolean,
    Number,
    Array,
    Object,
    Unknown,
}

impl SchemaKind {
    /// case-sensitive, anything unrecognised is `Unknown`
    pub fn from_type_str(typ: &str) -> Self {
        match typ {
            "string" => SchemaKind::String,
            "integer" => SchemaKind::Integer,
            "boolean" => SchemaKind::Boolean,
            "number" => SchemaKind::Number,
            "array" => SchemaKind::Array,
            "object" => SchemaKind::Object,
            _ => SchemaKind::Unknown,
        }
    }
}

pub struct Route {
    pub path: String,
    pub summary: Option<String>,
    pub endpoints: Vec<Endpoint>,
}

pub struct Endpoint {
    pub method: Method,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}
