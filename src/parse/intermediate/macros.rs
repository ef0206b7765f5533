// pushes an endpoint for every operation the path item defines
macro_rules! handle_endpoint {
    ($endpoints:expr, $route_part:expr, $method:expr) => {{
        if let Some(endpoint) = $route_part {
            $endpoints.push(Endpoint {
                method: $method,
                summary: endpoint.summary.clone(),
                operation_id: endpoint.operation_id.clone(),
            });
        }
    }};
}
