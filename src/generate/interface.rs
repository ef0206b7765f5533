use crate::parse::intermediate::IntermediateFormat;

pub trait Generator {
    // generate a list of files (relative path, content)
    fn generate(
        &self,
        intermediate: &IntermediateFormat,
        request: &Request,
    ) -> Result<Vec<File>, GenerateError>;
}

/// What to generate: the component everything is named after and an
/// optional schema name restricting which catalog entries become roots.
pub struct Request {
    pub component: String,
    pub type_name: Option<String>,
}

pub struct File {
    pub path: std::path::PathBuf,
    pub content: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("component name `{0}` is not a valid identifier")]
    InvalidComponentName(String),
}
