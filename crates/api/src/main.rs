use std::sync::Arc;

use ordena_api::app::{build_app, AppServices};
use ordena_store::InMemoryDb;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ordena_observability::init();

    let db = match std::env::var("ORDENA_DB_PATH") {
        Ok(path) => InMemoryDb::open(&path)?,
        Err(_) => {
            tracing::warn!("ORDENA_DB_PATH not set; starting with an empty in-memory store");
            InMemoryDb::new()
        }
    };

    let addr = std::env::var("ORDENA_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let services = Arc::new(AppServices::new(db));
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
