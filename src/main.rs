use agrigoo_storage::{Config, StorageGateway, UploadResponse, DEFAULT_FOLDER};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "agrigoo-storage")]
#[command(about = "Upload a local file to the configured storage service")]
struct CliArgs {
    /// File to upload
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Folder (or key prefix) to place the object under
    #[arg(long, default_value = DEFAULT_FOLDER)]
    folder: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the process environment still applies
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrigoo_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = Config::from_env()?;
    let gateway = StorageGateway::from_config(config).await?;

    let result = gateway.upload_to(&args.path, &args.folder).await;
    let success = result.is_ok();

    println!("{}", serde_json::to_string(&UploadResponse::from(result))?);

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
