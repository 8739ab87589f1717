use super::backend::{file_name, required, StorageBackend};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{ObjectId, StoredObject};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;

pub struct S3Storage {
    client: Client,
    bucket: Option<String>,
    region: Option<String>,
}

impl S3Storage {
    /// Build the S3 client once; it is reused for every upload.
    ///
    /// Without `AWS_REGION` the region comes from the SDK provider chain
    /// (profile, IMDS); an unresolved region surfaces when uploading.
    pub async fn new(config: Config) -> Self {
        let mut config_loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = config.s3_region {
            config_loader = config_loader.region(Region::new(region));
        }

        // Without a static pair the default provider chain applies
        if let (Some(access_key), Some(secret_key)) = (config.s3_access_key, config.s3_secret_key)
        {
            config_loader = config_loader.credentials_provider(Credentials::new(
                access_key, secret_key, None, None, "static",
            ));
        }

        let sdk_config = config_loader.load().await;
        let region = sdk_config.region().map(|region| region.to_string());

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = config.s3_endpoint {
            s3_config = s3_config.endpoint_url(endpoint).force_path_style(true);
        }

        S3Storage {
            client: Client::from_conf(s3_config.build()),
            bucket: config.s3_bucket,
            region,
        }
    }

    fn object_key(folder: &str, name: &str) -> String {
        format!("{}/{}", folder, name)
    }

    /// Public virtual-hosted-style URL of an object
    fn object_url(bucket: &str, region: &str, key: &str) -> String {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    }
}

#[async_trait]
impl StorageBackend for S3Storage {
    fn name(&self) -> &'static str {
        "S3"
    }

    async fn upload_file(&self, path: &Path, folder: &str) -> Result<StoredObject> {
        let bucket = required(&self.bucket, "AWS_S3_BUCKET_NAME")?;
        let region = required(&self.region, "AWS_REGION")?;

        let key = Self::object_key(folder, file_name(path)?);
        let body = ByteStream::from_path(path)
            .await
            .map_err(std::io::Error::other)?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::S3(DisplayErrorContext(e).to_string()))?;

        tracing::debug!("Uploaded {} to s3://{}/{}", path.display(), bucket, key);

        Ok(StoredObject {
            url: Self::object_url(bucket, region, &key),
            id: ObjectId::Key(key),
        })
    }
}
