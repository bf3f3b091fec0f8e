use crate::core::Storage;
use crate::utils::error::{Result, TransferError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory (the working directory for the binaries).
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::info!("Reading file: {}", path);

        fs::read(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TransferError::InputNotFound {
                path: full_path.display().to_string(),
            },
            _ => TransferError::InputRead {
                path: full_path.display().to_string(),
                source,
            },
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(path);
        let output_error = |source| TransferError::OutputWrite {
            path: full_path.display().to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(output_error)?;
        }

        fs::write(&full_path, data).map_err(output_error)?;
        Ok(full_path.display().to_string())
    }
}
