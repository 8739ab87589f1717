use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage_type: StorageType,
    pub cloudinary_cloud_name: Option<String>,
    pub cloudinary_api_key: Option<String>,
    pub cloudinary_api_secret: Option<String>,
    pub cloudinary_api_base: String,
    pub s3_bucket: Option<String>,
    /// Unset means the AWS SDK provider chain picks the region
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageType {
    #[default]
    Cloudinary,
    S3,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Cloudinary => "cloudinary",
            StorageType::S3 => "s3",
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cloudinary" => Ok(StorageType::Cloudinary),
            "s3" => Ok(StorageType::S3),
            _ => Err(Error::UnsupportedStorage(s.to_string())),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty settings are treated the same as unset ones, except for
    /// `STORAGE_SERVICE` where only an absent value selects the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let storage_type = match lookup("STORAGE_SERVICE") {
            Some(value) => value.parse()?,
            None => StorageType::default(),
        };

        Ok(Config {
            storage_type,
            cloudinary_cloud_name: var("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: var("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: var("CLOUDINARY_API_SECRET"),
            cloudinary_api_base: var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_BASE.to_string()),
            s3_bucket: var("AWS_S3_BUCKET_NAME"),
            s3_region: var("AWS_REGION"),
            s3_endpoint: var("AWS_S3_ENDPOINT"),
            s3_access_key: var("AWS_ACCESS_KEY_ID"),
            s3_secret_key: var("AWS_SECRET_ACCESS_KEY"),
        })
    }

    /// Settings the selected backend needs but that are not set.
    ///
    /// Missing credentials do not stop startup; uploads report them as failures.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let required = match self.storage_type {
            StorageType::Cloudinary => vec![
                ("CLOUDINARY_CLOUD_NAME", &self.cloudinary_cloud_name),
                ("CLOUDINARY_API_KEY", &self.cloudinary_api_key),
                ("CLOUDINARY_API_SECRET", &self.cloudinary_api_secret),
            ],
            StorageType::S3 => vec![("AWS_S3_BUCKET_NAME", &self.s3_bucket)],
        };

        required
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect()
    }
}
