use std::error::Error;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_server::config::Config;
use todo_store::TodoStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    // Any failure here is fatal: no listener is bound until the store is ready.
    let store = TodoStore::open(&config.db_path)?;
    let allowed_origin: HeaderValue = config.allowed_origin.parse()?;

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    todo_server::run(listener, store, allowed_origin).await?;
    Ok(())
}
