pub struct ReactGenerator;

use std::path::PathBuf;

use tracing::{info, warn};

use super::{File, GenerateError, Request};
use crate::parse::intermediate::IntermediateFormat;

#[macro_use]
mod macros;
mod components;
pub mod emitter;
mod endpoints;
mod saga;
mod schemes;
mod serializer;
mod slice;
mod types;

impl super::Generator for ReactGenerator {
    fn generate(
        &self,
        intermediate: &IntermediateFormat,
        request: &Request,
    ) -> Result<Vec<File>, GenerateError> {
        let names = Names::new(&request.component)?;
        let header = generated_header(intermediate);
        let mut out = Vec::new();
        info!(component = %names.component, "emitting types");
        let Some(root_types) = schemes::add_types(
            &mut out,
            intermediate,
            &names,
            request.type_name.as_deref(),
            &header,
        ) else {
            warn!(
                filter = request.type_name.as_deref().unwrap_or("*"),
                "no schema matches, nothing generated"
            );
            return Ok(Vec::new());
        };
        let route_filter = request.type_name.as_deref().unwrap_or(&names.component);
        info!(filter = route_filter, "emitting api");
        let fetch_fn = endpoints::add_api(&mut out, intermediate, &names, route_filter, &header);
        serializer::add_serializer(&mut out, &names, &root_types);
        slice::add_slice(&mut out, &names);
        saga::add_saga(&mut out, &names, fetch_fn.as_deref());
        components::add_components(&mut out, &names);
        Ok(out)
    }
}

fn generated_header(intermediate: &IntermediateFormat) -> String {
    format!(
        "// Generated from {} {}. Do not edit by hand.\n\n",
        intermediate.title, intermediate.version
    )
}

/// Naming conventions shared by every generated file.
pub(super) struct Names {
    /// as given, ie `Order`
    pub component: String,
    /// first letter lowered, ie `order`
    pub camel: String,
}

impl Names {
    pub(super) fn new(component: &str) -> Result<Self, GenerateError> {
        let mut chars = component.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if !valid {
            return Err(GenerateError::InvalidComponentName(component.to_string()));
        }
        let mut camel = component[..1].to_ascii_lowercase();
        camel.push_str(&component[1..]);
        Ok(Self {
            component: component.to_string(),
            camel,
        })
    }

    fn types_path(&self) -> PathBuf {
        PathBuf::from(format!("types/{}.types.ts", self.component))
    }

    fn api_path(&self) -> PathBuf {
        PathBuf::from(format!("api/{}.api.ts", self.component))
    }

    fn serializer_path(&self) -> PathBuf {
        PathBuf::from(format!("api/{}.serializer.ts", self.component))
    }

    fn slice_path(&self) -> PathBuf {
        PathBuf::from(format!("slices/{}Slice.ts", self.component))
    }

    fn saga_path(&self) -> PathBuf {
        PathBuf::from(format!("sagas/{}.saga.ts", self.component))
    }

    fn component_dir(&self) -> PathBuf {
        PathBuf::from(format!("components/{}", self.component))
    }

    fn requested_action(&self) -> String {
        format!("fetch{}Requested", self.component)
    }

    fn succeeded_action(&self) -> String {
        format!("fetch{}Succeeded", self.component)
    }

    fn failed_action(&self) -> String {
        format!("fetch{}Failed", self.component)
    }
}
