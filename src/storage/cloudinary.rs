use super::backend::{file_name, required, StorageBackend};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{ObjectId, StoredObject};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Lets the service detect image, video or raw uploads on its own
const RESOURCE_TYPE: &str = "auto";

pub struct CloudinaryStorage {
    client: reqwest::Client,
    api_base: String,
    cloud_name: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponseBody {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CloudinaryStorage {
    pub fn new(config: Config) -> Self {
        CloudinaryStorage {
            client: reqwest::Client::new(),
            api_base: config.cloudinary_api_base,
            cloud_name: config.cloudinary_cloud_name,
            api_key: config.cloudinary_api_key,
            api_secret: config.cloudinary_api_secret,
        }
    }

    fn upload_url(&self) -> Result<String> {
        Ok(format!(
            "{}/{}/{}/upload",
            self.api_base.trim_end_matches('/'),
            required(&self.cloud_name, "CLOUDINARY_CLOUD_NAME")?,
            RESOURCE_TYPE
        ))
    }
}

/// Sign request parameters: `k1=v1&k2=v2` sorted by key, secret appended, SHA-256 hex.
fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl StorageBackend for CloudinaryStorage {
    fn name(&self) -> &'static str {
        "Cloudinary"
    }

    async fn upload_file(&self, path: &Path, folder: &str) -> Result<StoredObject> {
        let upload_url = self.upload_url()?;
        let api_key = required(&self.api_key, "CLOUDINARY_API_KEY")?;
        let api_secret = required(&self.api_secret, "CLOUDINARY_API_SECRET")?;

        let name = file_name(path)?.to_string();
        let bytes = tokio::fs::read(path).await?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[("folder", folder), ("timestamp", timestamp.as_str())],
            api_secret,
        );

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(name))
            .text("folder", folder.to_string())
            .text("timestamp", timestamp)
            .text("api_key", api_key.to_string())
            .text("signature", signature);

        let response = self
            .client
            .post(upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, text));
            return Err(Error::Cloudinary(message));
        }

        let body: UploadResponseBody = response.json().await?;
        tracing::debug!("Uploaded {} to Cloudinary as {}", path.display(), body.public_id);

        Ok(StoredObject {
            url: body.secure_url,
            id: ObjectId::PublicId(body.public_id),
        })
    }
}
