use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, error::AppError, model::bug::CreateBugParam, service::bug::BugService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts a sample bug when the bug table is empty.
///
/// Running it against a database that already holds bugs is a no-op, so it is safe to
/// leave `SEED_DATABASE` enabled across restarts.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    let service = BugService::new(db);

    if !service.list().await?.is_empty() {
        tracing::info!("Database already contains bugs, skipping seed");
        return Ok(());
    }

    service
        .create(CreateBugParam {
            title: "Seed Bug".to_string(),
            description: Some("This is a seed bug".to_string()),
            status: "Active".to_string(),
        })
        .await?;

    Ok(())
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
