pub mod catalog;
pub mod connection;
pub mod leads;
pub mod listings;
pub mod locations;

pub use catalog::{load_catalog, replace_catalog, Catalog};
pub use connection::{init_db, Database};
