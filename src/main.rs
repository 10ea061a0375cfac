use crate::config::Config;
use crate::db::catalog::import_seed_file;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::router::{respond, App};
use crate::source::{sync_catalog, DataApiClient};
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod requests;
mod responses;
mod router;
mod source;
mod spreadsheets;
mod templates;


fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,automation_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        db = %config.database_path,
        "configuration loaded"
    );

    // 1️⃣ Database handle + schema
    let db = Database::new(config.database_path.clone());
    init_db(&db).context("Database initialization failed")?;

    // 2️⃣ Initial catalog: seed file for an empty store, then the data API if configured
    if let Some(seed) = &config.seed_path {
        import_seed_file(&db, seed).context("Seed import failed")?;
    }
    if let Some(base_url) = &config.data_api_url {
        // The site still serves the stored catalog when the upstream is down.
        let synced = DataApiClient::new(base_url)
            .map_err(ServerError::from)
            .and_then(|client| sync_catalog(&db, &client));
        match synced {
            Ok(catalog) => tracing::info!(
                listings = catalog.listings.len(),
                locations = catalog.locations.len(),
                "startup sync complete"
            ),
            Err(e) => tracing::warn!(error = %e, "startup sync failed, serving stored catalog"),
        }
    }

    // 3️⃣ Serve
    let app = App::new(db, &config);
    tracing::info!("Starting server at http://{}", config.bind_addr);

    Server::bind(&config.bind_addr)
        .max_workers(config.max_workers)
        .serve(move |req, _info| respond(req, &app))
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
