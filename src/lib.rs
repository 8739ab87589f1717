//! Upload gateway for the AgriGoo ML service.
//!
//! At startup `STORAGE_SERVICE` selects either Cloudinary or S3 and a single
//! backend is configured for the lifetime of the process. Uploads go through
//! [`storage::StorageGateway`], which always hands back an
//! [`models::UploadResult`] instead of propagating backend errors.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{Config, StorageType};
pub use error::{Error, Result};
pub use models::{UploadResponse, UploadResult, DEFAULT_FOLDER};
pub use storage::StorageGateway;
