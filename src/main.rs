use anyhow::Result;
use axum::Router;
use object_gateway::{config, routes, services, store};
use std::{io::ErrorKind, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!(
        endpoint = %cfg.store_endpoint,
        default_bucket = %cfg.default_bucket,
        "Starting object-gateway"
    );

    // --- Build store client ---
    let store = Arc::new(store::S3Store::new(
        &cfg.store_endpoint,
        &cfg.store_region,
        &cfg.access_key_id,
        &cfg.secret_access_key,
        cfg.path_style,
    ));

    // --- Initialize core service ---
    let gateway = services::gateway_service::GatewayService::new(
        store,
        cfg.store_endpoint.clone(),
        cfg.default_bucket.clone(),
    );

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(gateway);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
