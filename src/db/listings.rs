use crate::domain::listing::Listing;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

const LISTING_COLUMNS: &str = r#"
    id,             -- 0
    name,           -- 1
    location,       -- 2
    location_ids,   -- 3 (JSON array)
    listing_type,   -- 4
    category,       -- 5
    sub_category,   -- 6
    description,    -- 7
    image,          -- 8
    price           -- 9
"#;

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let location_ids_json: String = row.get(3)?;
    let location_ids = serde_json::from_str(&location_ids_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Listing {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        location_ids,
        listing_type: row.get(4)?,
        category: row.get(5)?,
        sub_category: row.get(6)?,
        description: row.get(7)?,
        image: row.get(8)?,
        price: row.get(9)?,
    })
}

/// All listings in insertion order.
pub fn list_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("select {LISTING_COLUMNS} from listings order by rowid"))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], listing_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }

    Ok(results)
}

pub fn get_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("select {LISTING_COLUMNS} from listings where id = ?"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load listing failed: {e}")))
}

/// Insert a listing, or overwrite every field of an existing one.
/// An update keeps the listing's original position.
pub fn upsert_listing(conn: &Connection, listing: &Listing) -> Result<(), ServerError> {
    if listing.id.trim().is_empty() {
        return Err(ServerError::BadRequest("Listing id must not be empty".into()));
    }

    let location_ids = serde_json::to_string(&listing.location_ids)
        .map_err(|e| ServerError::DbError(e.to_string()))?;
    let now = Utc::now().naive_utc();

    conn.execute(
        r#"
        insert into listings (
            id, name, location, location_ids,
            listing_type, category, sub_category,
            description, image, price, updated_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        on conflict(id) do update set
            name = excluded.name,
            location = excluded.location,
            location_ids = excluded.location_ids,
            listing_type = excluded.listing_type,
            category = excluded.category,
            sub_category = excluded.sub_category,
            description = excluded.description,
            image = excluded.image,
            price = excluded.price,
            updated_at = excluded.updated_at
        "#,
        params![
            listing.id,
            listing.name,
            listing.location,
            location_ids,
            listing.listing_type,
            listing.category,
            listing.sub_category,
            listing.description,
            listing.image,
            listing.price,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("upsert listing failed: {e}")))?;

    Ok(())
}

/// Returns false when no listing had that id.
pub fn delete_listing(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let n = conn
        .execute("delete from listings where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete listing failed: {e}")))?;
    Ok(n > 0)
}
