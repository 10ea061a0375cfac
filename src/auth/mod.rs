pub mod admin;
pub mod token;

pub use admin::require_admin;
