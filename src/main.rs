use bookmarks::config::{Cli, Config};
use bookmarks::handler::AppState;
use bookmarks::router;
use bookmarks::store::BookmarkStore;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookmarks=info,tower_http=info"));
    tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    tracing::info!("bookmarks.svc starting");

    let cfg = Config::resolve(&args).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::process::exit(1);
    });

    let state = AppState::new(BookmarkStore::new());
    let app = router(state);

    let address = cfg.app.address();
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, address = %address, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let port = cfg.app.get_port();
    tracing::info!("bookmarks.svc running on {}", &address);
    tracing::info!("health: http://localhost:{}/api/health", port);
    tracing::info!("bookmarks: http://localhost:{}/api/bookmarks", port);

    let cancellation_token = CancellationToken::new();
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        shutdown_token.cancel();
    });

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancellation_token.cancelled().await })
        .await;

    if let Err(err) = result {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }

    tracing::info!("bookmarks.svc going off, graceful shutdown complete");
}
