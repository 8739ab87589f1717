use crate::error::{Error, Result};
use crate::models::StoredObject;
use async_trait::async_trait;
use std::path::Path;

/// Trait defining the interface for storage backends
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Human readable backend name used in diagnostics
    fn name(&self) -> &'static str;

    /// Upload a local file under `folder` and return where it landed
    async fn upload_file(&self, path: &Path, folder: &str) -> Result<StoredObject>;
}

/// Final path component of `path` as UTF-8
pub(crate) fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no usable file name", path.display()),
            ))
        })
}

/// Value of a setting the backend cannot upload without
pub(crate) fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(Error::MissingConfig(key))
}
