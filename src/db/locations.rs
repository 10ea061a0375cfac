use crate::domain::location::Location;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn list_locations(conn: &Connection) -> Result<Vec<Location>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name from locations order by rowid")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Location {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn get_location(conn: &Connection, id: &str) -> Result<Option<Location>, ServerError> {
    conn.query_row(
        "select id, name from locations where id = ?",
        params![id],
        |row| {
            Ok(Location {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load location failed: {e}")))
}

pub fn upsert_location(conn: &Connection, location: &Location) -> Result<(), ServerError> {
    if location.id.trim().is_empty() || location.name.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "Location id and name must not be empty".into(),
        ));
    }

    conn.execute(
        r#"
        insert into locations (id, name) values (?1, ?2)
        on conflict(id) do update set name = excluded.name
        "#,
        params![location.id, location.name],
    )
    .map_err(|e| ServerError::DbError(format!("upsert location failed: {e}")))?;

    Ok(())
}

/// Listings keep their `location_ids`; a dangling id simply stops matching
/// by name.
pub fn delete_location(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let n = conn
        .execute("delete from locations where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete location failed: {e}")))?;
    Ok(n > 0)
}
