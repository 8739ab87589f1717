use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported storage service: {0}")]
    UnsupportedStorage(String),

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cloudinary error: {0}")]
    Cloudinary(String),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("{0} feature not enabled")]
    FeatureDisabled(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
