use serde::{Deserialize, Serialize};

/// Folder used when the caller does not name one
pub const DEFAULT_FOLDER: &str = "agrigoo-ml";

/// Backend-assigned identifier of an uploaded object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectId {
    /// Cloudinary `public_id`
    PublicId(String),
    /// S3 object key
    Key(String),
}

/// A successfully stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub url: String,
    pub id: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub backend: &'static str,
    pub error: String,
}

impl std::fmt::Display for UploadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} upload error: {}", self.backend, self.error)
    }
}

impl std::error::Error for UploadFailure {}

/// Outcome of a gateway upload. Failures are values, never panics or propagated errors.
pub type UploadResult = std::result::Result<StoredObject, UploadFailure>;

/// Wire shape of an upload outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<UploadResult> for UploadResponse {
    fn from(result: UploadResult) -> Self {
        match result {
            Ok(object) => {
                let (public_id, key) = match object.id {
                    ObjectId::PublicId(id) => (Some(id), None),
                    ObjectId::Key(key) => (None, Some(key)),
                };
                UploadResponse {
                    success: true,
                    url: Some(object.url),
                    public_id,
                    key,
                    error: None,
                }
            }
            Err(failure) => UploadResponse {
                success: false,
                url: None,
                public_id: None,
                key: None,
                error: Some(failure.error),
            },
        }
    }
}
