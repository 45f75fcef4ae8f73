use clap::Parser;
use shortly_core::RecordStore;
use shortly_gateway::cli::{StoreBackendArg, CLI};
use shortly_gateway::{App, AppState};
use shortly_storage::{InMemoryStore, RedisStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        store_backend = %config.store,
        "starting shortly gateway"
    );

    match config.store {
        StoreBackendArg::InMemory => {
            run_server(&config, Arc::new(InMemoryStore::new())).await?;
        }
        StoreBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("redis url is required when store backend is redis"))?;
            let store = RedisStore::connect(redis_url).await?;
            run_server(&config, Arc::new(store)).await?;
        }
    }

    Ok(())
}

async fn run_server<S: RecordStore>(config: &CLI, store: Arc<S>) -> anyhow::Result<()> {
    let state = AppState::new(store, config.public_base_url.clone());
    let router = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
