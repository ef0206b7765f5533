pub mod types;
#[macro_use]
mod macros;

use oas3::spec::PathItem;
use serde_json::Value;
use tracing::{debug, warn};

use crate::load::Document;
pub use types::*;

pub fn parse(document: &Document) -> IntermediateFormat {
    let catalog = build_catalog(&document.raw);
    debug!(schemas = catalog.len(), "built schema catalog");
    IntermediateFormat {
        title: document.spec.info.title.clone(),
        version: document.spec.info.version.clone(),
        catalog,
        routes: parse_routes(&document.spec),
    }
}

/// Reads `components.schemas`; a document without any yields an empty catalog.
pub fn build_catalog(raw: &Value) -> SchemaCatalog {
    let Some(schemas) = raw.pointer("/components/schemas").and_then(Value::as_object) else {
        warn!("document has no components.schemas");
        return SchemaCatalog::new();
    };
    schemas
        .iter()
        .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
        .collect()
}

impl SchemaNode {
    pub fn from_value(value: &Value) -> Self {
        if let Some(ref_path) = value.get("$ref").and_then(Value::as_str) {
            return SchemaNode::Reference(ref_name(ref_path).to_string());
        }
        let properties = value.get("properties").and_then(Value::as_object);
        let kind = match value.get("type") {
            Some(typ) => schema_kind(typ),
            // untyped but with properties is still an object
            None if properties.is_some() => SchemaKind::Object,
            None => SchemaKind::Unknown,
        };
        match (kind, properties, value.get("items")) {
            (SchemaKind::Object, Some(properties), _) if !properties.is_empty() => {
                SchemaNode::Object(
                    properties
                        .iter()
                        .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
                        .collect(),
                )
            }
            (SchemaKind::Array, _, Some(items)) if items.is_object() => {
                SchemaNode::Array(Box::new(SchemaNode::from_value(items)))
            }
            _ => SchemaNode::Primitive {
                kind,
                format: value
                    .get("format")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
        }
    }
}

/// `#/components/schemas/Address` -> `Address`
fn ref_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

// 3.1 allows a list of types; the first non-null one wins
fn schema_kind(typ: &Value) -> SchemaKind {
    match typ {
        Value::String(typ) => SchemaKind::from_type_str(typ),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|typ| *typ != "null")
            .map(SchemaKind::from_type_str)
            .unwrap_or(SchemaKind::Unknown),
        _ => SchemaKind::Unknown,
    }
}

fn parse_routes(spec: &oas3::OpenApiV3Spec) -> Vec<Route> {
    let Some(paths) = spec.paths.as_ref() else {
        return Vec::new();
    };
    paths
        .iter()
        .map(|(path, item)| parse_route(path, item))
        .collect()
}

fn parse_route(path: &str, item: &PathItem) -> Route {
    let mut endpoints = Vec::new();
    handle_endpoint!(endpoints, &item.get, Method::Get);
    handle_endpoint!(endpoints, &item.post, Method::Post);
    handle_endpoint!(endpoints, &item.put, Method::Put);
    handle_endpoint!(endpoints, &item.patch, Method::Patch);
    handle_endpoint!(endpoints, &item.delete, Method::Delete);
    Route {
        path: path.to_string(),
        summary: item.summary.clone(),
        endpoints,
    }
}
