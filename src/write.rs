use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::generate::File;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("creating directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default)]
pub struct Written {
    pub written: Vec<PathBuf>,
    /// already existed and `force` was off
    pub skipped: Vec<PathBuf>,
}

/// Writes every file below `out_dir`, creating directories as needed.
pub fn write_files(out_dir: &Path, files: &[File], force: bool) -> Result<Written, WriteError> {
    let mut result = Written::default();
    for file in files {
        let path = out_dir.join(&file.path);
        if path.exists() && !force {
            warn!(path = %path.display(), "exists, skipping (use --force to overwrite)");
            result.skipped.push(path);
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        debug!(path = %path.display(), "writing");
        std::fs::write(&path, &file.content).map_err(|e| WriteError::Write {
            path: path.clone(),
            source: e,
        })?;
        result.written.push(path);
    }
    Ok(result)
}
