use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use tasks_api::modules::tasks::adapters::outbound::task_store::TaskStore;
use tasks_api::modules::tasks::core::seed::demo_tasks;
use tasks_api::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use tasks_api::shell::config::AppConfig;
use tasks_api::shell::http::router;
use tasks_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tasks_api=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let snapshots = Arc::new(JsonFileSnapshotStore::new(&config.data_file));
    let store = Arc::new(TaskStore::load(snapshots).await);
    if config.seed_demo && store.seed_if_empty(demo_tasks()).await {
        tracing::info!("seeded demo tasks");
    }

    let app = router(AppState::new(store, config.rules));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        policy = %config.rules.policy,
        upsert_on_miss = config.rules.upsert_on_miss,
        data_file = %config.data_file.display(),
        "tasks server running at http://{addr}"
    );
    tracing::info!("available endpoints:");
    tracing::info!("  GET    /tasks");
    tracing::info!("  GET    /tasks/{{id}}");
    tracing::info!("  POST   /tasks");
    tracing::info!("  PUT    /tasks/{{id}}");
    tracing::info!("  DELETE /tasks/{{id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("tasks server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
