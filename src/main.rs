use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use mockable::DefaultClock;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod repository;
mod routes;
mod service;
#[cfg(test)]
mod test_support;

use config::Config;
use db::init_db;
use repository::SqlStore;
use service::{DirectoryService, TimesheetService};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, timezone = %config.timezone, "Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections).await?;

    let store = Arc::new(SqlStore::new(pool.clone()));
    let directory = Data::new(DirectoryService::new(store.clone(), store.clone()));
    let timesheet = Data::new(TimesheetService::new(
        store.clone(),
        store,
        Arc::new(DefaultClock),
        config.timezone,
    ));
    let limiter = Arc::new(routes::build_limiter(config.rate_per_min)?);

    HttpServer::new(move || {
        App::new()
            .wrap(limiter.clone()) // rate limiting
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(directory.clone())
            .app_data(timesheet.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
