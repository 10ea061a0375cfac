pub mod admin;
pub mod api;
pub mod public;

use crate::db::{load_catalog, Catalog};
use crate::errors::ServerError;
use crate::router::App;

/// The catalog snapshot a single request works on.
pub(crate) fn snapshot(app: &App) -> Result<Catalog, ServerError> {
    app.db.with_conn(|conn| load_catalog(conn))
}
