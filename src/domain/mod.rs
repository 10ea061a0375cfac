pub mod filter;
pub mod lead;
pub mod listing;
pub mod location;

pub use filter::{categories, filter, FilterCriteria};
pub use lead::{Lead, NewLead};
pub use listing::Listing;
pub use location::Location;
