pub mod backend;
pub mod cloudinary;
#[cfg(feature = "s3")]
pub mod s3;

pub use backend::StorageBackend;
pub use cloudinary::CloudinaryStorage;
#[cfg(feature = "s3")]
pub use s3::S3Storage;

use crate::config::{Config, StorageType};
use crate::error::Result;
use crate::models::{UploadFailure, UploadResult, DEFAULT_FOLDER};
use std::path::Path;
use std::sync::Arc;

/// Factory function to create the configured storage backend
pub async fn create_storage(config: Config) -> Result<Arc<dyn StorageBackend>> {
    match config.storage_type {
        StorageType::Cloudinary => Ok(Arc::new(CloudinaryStorage::new(config))),
        StorageType::S3 => {
            #[cfg(feature = "s3")]
            {
                Ok(Arc::new(S3Storage::new(config).await))
            }
            #[cfg(not(feature = "s3"))]
            {
                Err(crate::error::Error::FeatureDisabled("s3"))
            }
        }
    }
}

/// Upload entry point bound to one backend for the lifetime of the process.
///
/// Backend errors never escape: they are logged and handed back as an
/// [`UploadFailure`].
#[derive(Clone)]
pub struct StorageGateway {
    backend: Arc<dyn StorageBackend>,
}

impl StorageGateway {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        StorageGateway { backend }
    }

    /// Build the configured backend and wrap it.
    ///
    /// Missing credentials only produce a warning here; uploads then fail
    /// with a [`UploadFailure`] naming the setting.
    pub async fn from_config(config: Config) -> Result<Self> {
        let storage_type = config.storage_type;
        tracing::info!("Storage service: {}", storage_type);

        let missing = config.missing_settings();
        if !missing.is_empty() {
            tracing::warn!("{} settings missing: {}", storage_type, missing.join(", "));
        }

        let backend = create_storage(config).await?;
        Ok(Self::new(backend))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Upload into the default folder
    pub async fn upload(&self, path: impl AsRef<Path>) -> UploadResult {
        self.upload_to(path, DEFAULT_FOLDER).await
    }

    pub async fn upload_to(&self, path: impl AsRef<Path>, folder: &str) -> UploadResult {
        let path = path.as_ref();
        let backend = self.backend.name();

        self.backend
            .upload_file(path, folder)
            .await
            .map_err(|e| {
                tracing::error!(backend, path = %path.display(), "{} upload error: {}", backend, e);
                UploadFailure {
                    backend,
                    error: e.to_string(),
                }
            })
    }
}
