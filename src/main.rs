mod model;
mod server;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, middleware::cors::cors_layer, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level).map_err(|e| AppError::InternalError(e.to_string()))?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_database {
        startup::seed_database(&db).await?;
    }

    let app = router::app(AppState::new(db.clone()), cors_layer(&config.cors_origin)?);

    let listener = TcpListener::bind(config.socket_addr()).await?;

    tracing::info!("Starting server on http://{}", config.socket_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Closing database connections");
    db.close().await?;

    Ok(())
}
