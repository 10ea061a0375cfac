use crate::db::connection::Database;
use crate::db::listings::{list_listings, upsert_listing};
use crate::db::locations::{list_locations, upsert_location};
use crate::domain::{Listing, Location};
use crate::errors::ServerError;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fs;

/// A full snapshot of the public catalog. This is also the seed file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

pub fn load_catalog(conn: &Connection) -> Result<Catalog, ServerError> {
    Ok(Catalog {
        listings: list_listings(conn)?,
        locations: list_locations(conn)?,
    })
}

/// Swap the stored catalog for `catalog` in one transaction.
/// Readers see either the old rows or the new ones.
pub fn replace_catalog(conn: &mut Connection, catalog: &Catalog) -> Result<(), ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    tx.execute("delete from listings", [])
        .map_err(|e| ServerError::DbError(format!("clear listings failed: {e}")))?;
    tx.execute("delete from locations", [])
        .map_err(|e| ServerError::DbError(format!("clear locations failed: {e}")))?;

    for location in &catalog.locations {
        upsert_location(&tx, location)?;
    }
    for listing in &catalog.listings {
        upsert_listing(&tx, listing)?;
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    tracing::info!(
        listings = catalog.listings.len(),
        locations = catalog.locations.len(),
        "catalog replaced"
    );
    Ok(())
}

pub fn is_catalog_empty(conn: &Connection) -> Result<bool, ServerError> {
    let count: i64 = conn
        .query_row(
            "select (select count(*) from listings) + (select count(*) from locations)",
            [],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("count catalog failed: {e}")))?;
    Ok(count == 0)
}

/// Import a JSON seed file, but only into an empty catalog.
/// Returns true when the seed was applied.
pub fn import_seed_file(db: &Database, path: &str) -> Result<bool, ServerError> {
    if !db.with_conn(|conn| is_catalog_empty(conn))? {
        tracing::debug!(path, "catalog not empty, skipping seed");
        return Ok(false);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| ServerError::DbError(format!("Failed to read seed file {path}: {e}")))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .map_err(|e| ServerError::DbError(format!("Failed to parse seed file {path}: {e}")))?;

    db.with_conn(|conn| replace_catalog(conn, &catalog))?;
    tracing::info!(path, "seed catalog imported");
    Ok(true)
}
