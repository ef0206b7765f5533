use super::emitter::{self, DeclarationBody, TypeDeclaration};
use super::types::{self, Tt};
use super::Names;
use crate::generate::File;
use crate::parse::intermediate::{EmittedSet, IntermediateFormat};

/// What the other files need to know about the emitted root types.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct RootTypes {
    /// fields of the root interfaces typed `Date`, which arrive as strings
    pub date_fields: Vec<String>,
}

/// Adds the types file. `None` when no catalog entry matches `type_name`.
pub(super) fn add_types(
    out: &mut Vec<File>,
    intermediate: &IntermediateFormat,
    names: &Names,
    type_name: Option<&str>,
    header: &str,
) -> Option<RootTypes> {
    let roots: Vec<&str> = intermediate
        .catalog
        .keys()
        .map(String::as_str)
        .filter(|name| type_name.map_or(true, |filter| name.eq_ignore_ascii_case(filter)))
        .collect();
    if roots.is_empty() {
        return None;
    }

    // one set for the whole file so shared dependencies appear once
    let mut emitted = EmittedSet::new();
    let declarations: Vec<TypeDeclaration> = roots
        .iter()
        .flat_map(|root| emitter::emit_root(root, &intermediate.catalog, &mut emitted))
        .collect();

    let mut content = String::from(header);
    content.push_str(
        &declarations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    if !declarations
        .iter()
        .any(|d| types::identifier(&d.name) == names.component)
    {
        let union: Vec<String> = roots.iter().map(|root| types::identifier(root)).collect();
        cpf!(content, "");
        cpf!(content, "export type {} = {};", names.component, union.join(" | "));
    }
    out.push(File {
        path: names.types_path(),
        content,
    });

    Some(RootTypes {
        date_fields: date_fields(&declarations, &roots),
    })
}

fn date_fields(declarations: &[TypeDeclaration], roots: &[&str]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for declaration in declarations.iter().filter(|d| roots.contains(&d.name.as_str())) {
        let DeclarationBody::Interface(members) = &declaration.body else {
            continue;
        };
        for member in members {
            if member.ty == Tt::Builtin("Date") && !fields.contains(&member.name) {
                fields.push(member.name.clone());
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::intermediate::build_catalog;
    use serde_json::json;

    fn intermediate() -> IntermediateFormat {
        IntermediateFormat {
            title: "Shop".into(),
            version: "1".into(),
            catalog: build_catalog(&json!({ "components": { "schemas": {
                "Order": {
                    "type": "object",
                    "properties": {
                        "placedAt": { "type": "string", "format": "date-time" },
                        "customer": { "$ref": "#/components/schemas/Customer" }
                    }
                },
                "Customer": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "since": { "type": "string", "format": "date-time" }
                    }
                },
                "Invoice": {
                    "type": "object",
                    "properties": {
                        "customer": { "$ref": "#/components/schemas/Customer" },
                        "dueAt": { "type": "string", "format": "date-time" }
                    }
                }
            } } })),
            routes: Vec::new(),
        }
    }

    #[test]
    fn filtered_root_matches_case_insensitively() {
        let mut out = Vec::new();
        let names = Names::new("Order").unwrap();
        let roots = add_types(&mut out, &intermediate(), &names, Some("ORDER"), "").unwrap();
        assert_eq!(
            out[0].content,
            "export interface Customer {\n    name: string;\n    since: Date;\n}\n\n\
             export interface Order {\n    placedAt: Date;\n    customer: Customer;\n}\n"
        );
        // only the root's own fields
        assert_eq!(roots.date_fields, ["placedAt"]);
    }

    #[test]
    fn component_alias_when_no_declaration_has_its_name() {
        let mut out = Vec::new();
        let names = Names::new("Billing").unwrap();
        add_types(&mut out, &intermediate(), &names, None, "").unwrap();
        let content = &out[0].content;
        assert!(content.ends_with("\nexport type Billing = Order | Customer | Invoice;\n"));
        assert_eq!(content.matches("export interface Customer").count(), 1);
    }

    #[test]
    fn no_match() {
        let mut out = Vec::new();
        let names = Names::new("Order").unwrap();
        assert!(add_types(&mut out, &intermediate(), &names, Some("Nonexistent"), "").is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn component_alias_uses_identifiers() {
        let intermediate = IntermediateFormat {
            title: "Shop".into(),
            version: "1".into(),
            catalog: build_catalog(&json!({ "components": { "schemas": {
                "order-line": { "type": "object", "properties": { "sku": { "type": "string" } } }
            } } })),
            routes: Vec::new(),
        };
        let mut out = Vec::new();
        let names = Names::new("Lines").unwrap();
        add_types(&mut out, &intermediate, &names, None, "").unwrap();
        assert_eq!(
            out[0].content,
            "export interface orderLine {\n    sku: string;\n}\n\nexport type Lines = orderLine;\n"
        );
    }
}
