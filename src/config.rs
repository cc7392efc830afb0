use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Store endpoint URL, also the base of constructed public links.
    pub store_endpoint: String,
    pub store_region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Bucket used when a request carries no `bucket` override.
    pub default_bucket: String,
    /// Path-style addressing; required for MinIO-style endpoints.
    pub path_style: bool,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "HTTP gateway over an S3-compatible object store")]
pub struct Args {
    /// Host to bind to (overrides OBJECT_GATEWAY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides OBJECT_GATEWAY_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Object store endpoint URL (overrides OBJECT_GATEWAY_STORE_ENDPOINT)
    #[arg(long)]
    pub store_endpoint: Option<String>,

    /// Object store region (overrides OBJECT_GATEWAY_STORE_REGION)
    #[arg(long)]
    pub store_region: Option<String>,

    /// Default bucket for requests without an override (overrides OBJECT_GATEWAY_DEFAULT_BUCKET)
    #[arg(long)]
    pub default_bucket: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    ///
    /// Credentials are environment-only so they never show up in process
    /// listings.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("OBJECT_GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("OBJECT_GATEWAY_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing OBJECT_GATEWAY_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 8002,
            Err(err) => return Err(err).context("reading OBJECT_GATEWAY_PORT"),
        };
        let env_endpoint = env::var("OBJECT_GATEWAY_STORE_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:9000".into());
        let env_region =
            env::var("OBJECT_GATEWAY_STORE_REGION").unwrap_or_else(|_| "us-east-1".into());
        let env_bucket = env::var("OBJECT_GATEWAY_DEFAULT_BUCKET")
            .unwrap_or_else(|_| "public-demo-bucket".into());
        let access_key_id =
            env::var("OBJECT_GATEWAY_ACCESS_KEY_ID").unwrap_or_else(|_| "minioadmin".into());
        let secret_access_key =
            env::var("OBJECT_GATEWAY_SECRET_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".into());
        let path_style = match env::var("OBJECT_GATEWAY_PATH_STYLE") {
            Ok(value) => value
                .parse::<bool>()
                .with_context(|| format!("parsing OBJECT_GATEWAY_PATH_STYLE value `{}`", value))?,
            Err(_) => true,
        };

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            store_endpoint: args.store_endpoint.unwrap_or(env_endpoint),
            store_region: args.store_region.unwrap_or(env_region),
            access_key_id,
            secret_access_key,
            default_bucket: args.default_bucket.unwrap_or(env_bucket),
            path_style,
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
