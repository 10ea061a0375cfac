pub mod client;
pub mod source_error;

pub use client::DataApiClient;
pub use source_error::SourceError;

use crate::db::{replace_catalog, Catalog, Database};
use crate::errors::ServerError;

/// Fetch both collections, then replace the stored catalog.
/// Nothing is written unless both fetches succeed.
pub fn sync_catalog(db: &Database, client: &DataApiClient) -> Result<Catalog, ServerError> {
    let locations = client.fetch_locations()?;
    let listings = client.fetch_listings()?;

    let catalog = Catalog {
        listings,
        locations,
    };
    db.with_conn(|conn| replace_catalog(conn, &catalog))?;

    Ok(catalog)
}

/// Run a sync on its own thread so the admin request returns immediately.
pub fn spawn_sync(db: &Database, base_url: String) {
    let db = db.clone(); // cheap clone (path only)

    std::thread::spawn(move || {
        tracing::info!(%base_url, "data API sync started");

        let client = match DataApiClient::new(&base_url) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "data API client init failed");
                return;
            }
        };

        match sync_catalog(&db, &client) {
            Ok(catalog) => tracing::info!(
                listings = catalog.listings.len(),
                locations = catalog.locations.len(),
                "data API sync complete"
            ),
            Err(e) => tracing::error!(error = %e, "data API sync failed"),
        }
    });
}
