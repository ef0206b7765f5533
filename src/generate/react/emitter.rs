//! Schema graph -> typescript declarations.
//!
//! Every declaration a type depends on is pushed before the type itself,
//! walking properties in authored order. A name is declared at most once per
//! run: the `EmittedSet` threaded through the walk is checked on entry, which
//! is also what stops reference cycles.
//!
//! Output is post-order: sibling dependencies keep first-discovery order
//! (`Shared, Left, Right, Root`) rather than later siblings being prepended
//! ahead of earlier ones.
//!
//! Schema names are only rewritten into identifiers when rendered; the
//! emitted set and catalog lookups use the names as authored.

use std::fmt;

use tracing::{debug, warn};

use super::types::{self, Tt};
use crate::parse::intermediate::{EmittedSet, SchemaCatalog, SchemaKind, SchemaNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub body: DeclarationBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationBody {
    /// object schemas, fields in authored order
    Interface(Vec<Field>),
    /// any other root schema
    Alias(Tt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Tt,
}

impl TypeDeclaration {
    /// `propertyName: mappedType` per field; empty for aliases
    pub fn body_lines(&self) -> Vec<String> {
        match &self.body {
            DeclarationBody::Interface(fields) => fields
                .iter()
                .map(|f| format!("{}: {}", types::property_key(&f.name), f.ty))
                .collect(),
            DeclarationBody::Alias(_) => Vec::new(),
        }
    }
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            DeclarationBody::Interface(_) => {
                writeln!(f, "export interface {} {{", types::identifier(&self.name))?;
                for line in self.body_lines() {
                    writeln!(f, "    {};", line)?;
                }
                writeln!(f, "}}")
            }
            DeclarationBody::Alias(ty) => {
                writeln!(f, "export type {} = {};", types::identifier(&self.name), ty)
            }
        }
    }
}

/// Declarations for the catalog entry `name`, or nothing if there is none.
pub fn emit_root(
    name: &str,
    catalog: &SchemaCatalog,
    emitted: &mut EmittedSet,
) -> Vec<TypeDeclaration> {
    match catalog.get(name) {
        Some(schema) => emit_declarations(name, schema, catalog, emitted),
        None => {
            debug!(schema = name, "no schema with this name");
            Vec::new()
        }
    }
}

/// Declarations for `schema` under `type_name` and everything it references
/// that is not in `emitted` yet, dependencies first.
pub fn emit_declarations(
    type_name: &str,
    schema: &SchemaNode,
    catalog: &SchemaCatalog,
    emitted: &mut EmittedSet,
) -> Vec<TypeDeclaration> {
    let mut out = Vec::new();
    emit_into(type_name, schema, catalog, emitted, &mut out);
    out
}

fn emit_into(
    type_name: &str,
    schema: &SchemaNode,
    catalog: &SchemaCatalog,
    emitted: &mut EmittedSet,
    out: &mut Vec<TypeDeclaration>,
) {
    if !emitted.insert(type_name.to_string()) {
        return;
    }
    let body = match schema {
        SchemaNode::Object(properties) => DeclarationBody::Interface(
            properties
                .iter()
                .map(|(name, property)| Field {
                    name: name.clone(),
                    ty: resolve(property, catalog, emitted, out),
                })
                .collect(),
        ),
        other => DeclarationBody::Alias(resolve(other, catalog, emitted, out)),
    };
    debug!(schema = type_name, "emitted declaration");
    out.push(TypeDeclaration {
        name: type_name.to_string(),
        body,
    });
}

fn resolve(
    node: &SchemaNode,
    catalog: &SchemaCatalog,
    emitted: &mut EmittedSet,
    out: &mut Vec<TypeDeclaration>,
) -> Tt {
    match node {
        SchemaNode::Reference(name) => Tt::Named(reference(name, catalog, emitted, out)),
        SchemaNode::Array(element) => match element.as_ref() {
            SchemaNode::Reference(name) => {
                Tt::List(Box::new(Tt::Named(reference(name, catalog, emitted, out))))
            }
            _ => Tt::Builtin(types::primitive_type(SchemaKind::Array, None)),
        },
        SchemaNode::Primitive { kind, format } => {
            Tt::Builtin(types::primitive_type(*kind, format.as_deref()))
        }
        // inline objects are not lifted into their own declaration
        SchemaNode::Object(_) => Tt::Builtin(types::ANY),
    }
}

fn reference(
    name: &str,
    catalog: &SchemaCatalog,
    emitted: &mut EmittedSet,
    out: &mut Vec<TypeDeclaration>,
) -> String {
    match catalog.get(name) {
        Some(schema) => emit_into(name, schema, catalog, emitted, out),
        None => warn!(schema = name, "dangling reference, no schema in catalog"),
    }
    name.to_string()
}
