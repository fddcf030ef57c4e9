use reviewify_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    reviewify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // Refuses to start without a reachable store: a missing database
    // configuration surfaces here as a fatal error.
    let app = reviewify_backend::build_app(config.clone())
        .await
        .expect("Failed to initialize storage");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
