use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the application router with state, CORS & request tracing applied
///
/// Cross-origin requests are accepted from any origin.
pub fn build_app(db: DatabaseConnection) -> Router {
    router::routes()
        .with_state(AppState::from(db))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
