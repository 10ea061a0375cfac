use crate::domain::lead::{Lead, NewLead};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

/// Stores an enquiry and returns its id.
pub fn create_lead(
    conn: &Connection,
    lead: &NewLead,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (name, email, phone, message, listing_id, created_at)
        values (?, ?, ?, ?, ?, ?)
        "#,
        params![lead.name, lead.email, lead.phone, lead.message, lead.listing_id, now],
    )
    .map_err(|e| ServerError::DbError(format!("create lead failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Newest first.
pub fn list_leads(conn: &Connection) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, name, email, phone, message, listing_id, created_at
            from leads
            order by created_at desc, id desc
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Lead {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                message: row.get(4)?,
                listing_id: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(results)
}
