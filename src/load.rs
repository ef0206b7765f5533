use serde_json::Value;
use tracing::{debug, info};

/// A parsed OpenAPI document.
///
/// `spec` is the typed view; `raw` keeps the authored key order that
/// oas3's sorted maps drop, so schema properties are read from it.
pub struct Document {
    pub spec: oas3::OpenApiV3Spec,
    pub raw: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetching spec from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading spec from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("spec is not valid JSON")]
    Json(#[source] serde_json::Error),
    #[error("spec is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),
    #[error("document is not an OpenAPI 3 spec")]
    Spec(#[source] serde_json::Error),
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_spec_text(url: &str) -> Result<String, reqwest::Error> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    Ok(body)
}

/// Load a spec from a file path or an http(s) url.
pub async fn load(source: &str) -> Result<Document, LoadError> {
    let text = if is_url(source) {
        info!(url = source, "fetching spec");
        fetch_spec_text(source)
            .await
            .map_err(|e| LoadError::Fetch {
                url: source.to_string(),
                source: e,
            })?
    } else {
        info!(path = source, "reading spec");
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| LoadError::Read {
                path: source.to_string(),
                source: e,
            })?
    };
    parse_document(&text)
}

/// JSON when the text opens with `{`, YAML otherwise.
pub fn parse_document(text: &str) -> Result<Document, LoadError> {
    let raw: Value = if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(LoadError::Json)?
    } else {
        serde_yaml::from_str(text)?
    };
    let spec: oas3::OpenApiV3Spec =
        serde_json::from_value(raw.clone()).map_err(LoadError::Spec)?;
    debug!(title = %spec.info.title, version = %spec.info.version, "parsed spec");
    Ok(Document { spec, raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_JSON: &str = r#"{
        "openapi": "3.0.3",
        "info": { "title": "Shop", "version": "1.2.0" },
        "paths": {},
        "components": { "schemas": { "Order": { "type": "object" } } }
    }"#;

    const MINIMAL_YAML: &str = "
openapi: 3.0.3
info:
  title: Shop
  version: 1.2.0
paths: {}
components:
  schemas:
    Zebra:
      type: object
    Apple:
      type: object
";

    #[test]
    fn parses_json() {
        let doc = parse_document(MINIMAL_JSON).unwrap();
        assert_eq!(doc.spec.info.title, "Shop");
        assert_eq!(doc.spec.info.version, "1.2.0");
        assert!(doc.raw.pointer("/components/schemas/Order").is_some());
    }

    #[test]
    fn parses_yaml_keeping_key_order() {
        let doc = parse_document(MINIMAL_YAML).unwrap();
        let names: Vec<&String> = doc
            .raw
            .pointer("/components/schemas")
            .and_then(Value::as_object)
            .unwrap()
            .keys()
            .collect();
        assert_eq!(names, ["Zebra", "Apple"]);
    }

    #[test]
    fn rejects_unparsable_json() {
        let err = parse_document("{ \"openapi\": ").err().unwrap();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn rejects_document_without_info() {
        let err = parse_document(r#"{ "openapi": "3.0.3", "paths": {} }"#)
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Spec(_)));
    }

    #[test]
    fn url_detection() {
        assert!(is_url("https://api.example.com/openapi.json"));
        assert!(is_url("http://localhost:8080/spec"));
        assert!(!is_url("./specs/openapi.yaml"));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_YAML.as_bytes()).unwrap();
        let doc = load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(doc.spec.info.title, "Shop");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load(path.to_str().unwrap()).await.err().unwrap();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
