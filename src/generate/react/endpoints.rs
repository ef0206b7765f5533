use std::collections::HashSet;

use tracing::{debug, warn};

use super::{types, Names};
use crate::generate::File;
use crate::parse::intermediate::{self, Endpoint, IntermediateFormat, Route};

/// Adds the api file for every route whose path contains `filter`.
/// Returns the name of the first GET function, which the saga calls.
pub(super) fn add_api(
    out: &mut Vec<File>,
    intermediate: &IntermediateFormat,
    names: &Names,
    filter: &str,
    header: &str,
) -> Option<String> {
    let c = &names.component;
    let mut content = String::from(header);
    cpf!(content, "import {{ {0} }} from '../types/{0}.types';", c);
    cpf!(content, "import fetchClient from './fetchClient';");
    cpf!(content, "import {{ serialize{0} }} from './{0}.serializer';", c);

    let needle = filter.to_ascii_lowercase();
    let routes: Vec<&Route> = intermediate
        .routes
        .iter()
        .filter(|r| r.path.to_ascii_lowercase().contains(&needle))
        .collect();
    if routes.is_empty() {
        warn!(filter, "no path matches, api file has no functions");
    }

    let mut seen = HashSet::new();
    let mut fetch_fn = None;
    for route in routes {
        let params = path_params(&route.path);
        let url = template_url(&route.path);
        for endpoint in &route.endpoints {
            let fn_name = unique_fn_name(&mut seen, &fn_base_name(endpoint.method, c, &params));
            debug!(function = %fn_name, path = %route.path, "api function");
            content.push('\n');
            add_doc(&mut content, endpoint, route);
            add_function(&mut content, &fn_name, endpoint.method, c, &params, &url);
            if endpoint.method == intermediate::Method::Get && fetch_fn.is_none() {
                fetch_fn = Some(fn_name);
            }
        }
    }

    out.push(File {
        path: names.api_path(),
        content,
    });
    fetch_fn
}

fn add_doc(content: &mut String, endpoint: &Endpoint, route: &Route) {
    let summary = endpoint
        .summary
        .as_deref()
        .or(route.summary.as_deref())
        .unwrap_or("");
    cpf!(content, "/**");
    if !summary.is_empty() {
        cpf!(content, " * {}", summary.replace('\n', "\n * "));
    }
    match &endpoint.operation_id {
        Some(operation_id) => cpf!(content, " * {} {} ({})", endpoint.method.string(), route.path, operation_id),
        None => cpf!(content, " * {} {}", endpoint.method.string(), route.path),
    }
    cpf!(content, " */");
}

fn add_function(
    content: &mut String,
    fn_name: &str,
    method: intermediate::Method,
    c: &str,
    params: &[String],
    url: &str,
) {
    use intermediate::Method;
    let mut args: Vec<String> = params.iter().map(|p| format!("{}: string", p)).collect();
    let verb = method.string();
    match method {
        Method::Get => {
            cpf!(content, "export const {} = async ({}): Promise<{}[]> => {{", fn_name, args.join(", "), c);
            cpf!(content, "  const response = await fetchClient.get<any>(`{}`);", url);
            cpf!(content, "  return serialize{}(response);", c);
        }
        Method::Post | Method::Put | Method::Patch => {
            args.push(format!("payload: {}[]", c));
            cpf!(content, "export const {} = async ({}): Promise<{}[]> => {{", fn_name, args.join(", "), c);
            cpf!(content, "  return await fetchClient.{}<{}[]>(`{}`, payload);", verb, c, url);
        }
        Method::Delete => {
            cpf!(content, "export const {} = async ({}): Promise<void> => {{", fn_name, args.join(", "));
            cpf!(content, "  await fetchClient.delete(`{}`);", url);
        }
    }
    cpf!(content, "}};");
}

/// `/orders/{order-id}/lines/{lineId}` -> `[orderId, lineId]`
fn path_params(path: &str) -> Vec<String> {
    path.split('{')
        .skip(1)
        .filter_map(|piece| piece.split_once('}'))
        .map(|(name, _)| types::identifier(name))
        .collect()
}

/// `/orders/{order-id}` -> `/orders/${orderId}`, names as in `path_params`
fn template_url(path: &str) -> String {
    let mut pieces = path.split('{');
    let mut url = pieces.next().unwrap_or_default().to_string();
    for piece in pieces {
        match piece.split_once('}') {
            Some((name, rest)) => {
                url.push_str("${");
                url.push_str(&types::identifier(name));
                url.push('}');
                url.push_str(rest);
            }
            None => {
                url.push('{');
                url.push_str(piece);
            }
        }
    }
    url
}

fn fn_base_name(method: intermediate::Method, c: &str, params: &[String]) -> String {
    use intermediate::Method;
    let prefix = match method {
        Method::Get => "fetch",
        Method::Post => "set",
        Method::Put => "update",
        Method::Patch => "patch",
        Method::Delete => "delete",
    };
    let mut name = format!("{}{}", prefix, c);
    if !params.is_empty() {
        let by = params.iter().map(|p| upper_first(p)).collect::<Vec<_>>().join("And");
        name.push_str("By");
        name.push_str(&by);
    }
    name
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn unique_fn_name(seen: &mut HashSet<String>, name: &str) -> String {
    if seen.insert(name.to_string()) {
        return name.to_string();
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{name}{counter}");
        if seen.insert(candidate.clone()) {
            warn!(function = name, renamed = %candidate, "duplicate api function name");
            return candidate;
        }
        counter += 1;
    }
}

impl intermediate::Method {
    fn string(&self) -> &str {
        match self {
            intermediate::Method::Get => "get",
            intermediate::Method::Post => "post",
            intermediate::Method::Put => "put",
            intermediate::Method::Patch => "patch",
            intermediate::Method::Delete => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::intermediate::{Method, SchemaCatalog};

    fn endpoint(method: Method) -> Endpoint {
        Endpoint {
            method,
            summary: None,
            operation_id: None,
        }
    }

    fn intermediate(routes: Vec<Route>) -> IntermediateFormat {
        IntermediateFormat {
            title: "Shop".into(),
            version: "1".into(),
            catalog: SchemaCatalog::new(),
            routes,
        }
    }

    fn api(routes: Vec<Route>, filter: &str) -> (String, Option<String>) {
        let mut out = Vec::new();
        let names = Names::new("Order").unwrap();
        let fetch_fn = add_api(&mut out, &intermediate(routes), &names, filter, "");
        (out.remove(0).content, fetch_fn)
    }

    #[test]
    fn get_and_post() {
        let (content, fetch_fn) = api(
            vec![Route {
                path: "/api/orders".into(),
                summary: Some("All orders".into()),
                endpoints: vec![endpoint(Method::Get), endpoint(Method::Post)],
            }],
            "Order",
        );
        assert_eq!(fetch_fn.as_deref(), Some("fetchOrder"));
        assert!(content.starts_with("import { Order } from '../types/Order.types';\n"));
        assert!(content.contains("import { serializeOrder } from './Order.serializer';\n"));
        assert!(content.contains(
            "/**\n * All orders\n * get /api/orders\n */\n\
             export const fetchOrder = async (): Promise<Order[]> => {\n  \
             const response = await fetchClient.get<any>(`/api/orders`);\n  \
             return serializeOrder(response);\n};\n"
        ));
        assert!(content.contains(
            "export const setOrder = async (payload: Order[]): Promise<Order[]> => {\n  \
             return await fetchClient.post<Order[]>(`/api/orders`, payload);\n};\n"
        ));
    }

    #[test]
    fn path_params_become_arguments() {
        let (content, _) = api(
            vec![Route {
                path: "/orders/{orderId}".into(),
                summary: None,
                endpoints: vec![endpoint(Method::Put), endpoint(Method::Delete)],
            }],
            "order",
        );
        assert!(content.contains(
            "export const updateOrderByOrderId = async (orderId: string, payload: Order[]): Promise<Order[]> => {\n  \
             return await fetchClient.put<Order[]>(`/orders/${orderId}`, payload);"
        ));
        assert!(content.contains(
            "export const deleteOrderByOrderId = async (orderId: string): Promise<void> => {\n  \
             await fetchClient.delete(`/orders/${orderId}`);"
        ));
    }

    #[test]
    fn unmatched_routes_are_skipped() {
        let (content, fetch_fn) = api(
            vec![Route {
                path: "/users".into(),
                summary: None,
                endpoints: vec![endpoint(Method::Get)],
            }],
            "Order",
        );
        assert!(fetch_fn.is_none());
        assert!(!content.contains("export const"));
    }

    #[test]
    fn duplicate_names_get_a_counter() {
        let route = |path: &str| Route {
            path: path.into(),
            summary: None,
            endpoints: vec![endpoint(Method::Get)],
        };
        let (content, fetch_fn) = api(vec![route("/orders"), route("/orders/archived")], "orders");
        assert_eq!(fetch_fn.as_deref(), Some("fetchOrder"));
        assert!(content.contains("export const fetchOrder2 = async"));
    }

    #[test]
    fn params() {
        assert_eq!(path_params("/a/{x}/b/{y}"), ["x", "y"]);
        assert_eq!(path_params("/files/{file-name}.json"), ["fileName"]);
        assert!(path_params("/a/b").is_empty());
        assert_eq!(template_url("/files/{file-name}.json"), "/files/${fileName}.json");
        assert_eq!(template_url("/a/b"), "/a/b");
    }

    #[test]
    fn hyphenated_path_params_become_identifiers() {
        let (content, fetch_fn) = api(
            vec![Route {
                path: "/orders/{order-id}".into(),
                summary: None,
                endpoints: vec![endpoint(Method::Get)],
            }],
            "order",
        );
        assert_eq!(fetch_fn.as_deref(), Some("fetchOrderByOrderId"));
        assert!(content.contains(
            "export const fetchOrderByOrderId = async (orderId: string): Promise<Order[]> => {\n  \
             const response = await fetchClient.get<any>(`/orders/${orderId}`);"
        ));
    }
}
