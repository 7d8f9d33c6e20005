use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use time_tracking::modules::access_control::adapters::outbound::directory_in_memory::InMemoryAccessDirectory;
use time_tracking::modules::access_control::core::policy::AccessPolicy;
use time_tracking::modules::time_tracking::adapters::outbound::projections_in_memory::InMemoryProjections;
use time_tracking::shared::core::primitives::SystemClock;
use time_tracking::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use time_tracking::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use time_tracking::shell::config::AppConfig;
use time_tracking::shell::http::router;
use time_tracking::shell::state::AppState;

fn load_policy(config: &AppConfig) -> anyhow::Result<AccessPolicy> {
    match &config.access_policy_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading access policy {}", path.display()))?;
            AccessPolicy::from_json(&raw)
                .with_context(|| format!("parsing access policy {}", path.display()))
        }
        None => Ok(AccessPolicy::own_records_only()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let policy = load_policy(&config)?;

    let state = AppState::new(
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryDomainOutbox::new()),
        Arc::new(InMemoryProjections::new()),
        Arc::new(InMemoryAccessDirectory::new(policy)),
        Arc::new(SystemClock),
        &config.outbox_topic,
        config.expose_internal_errors(),
    );

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, env = ?config.app_env, "time tracking api listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
