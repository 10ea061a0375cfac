pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod properties;
pub mod property;
pub mod region;

pub use about::about_page;
pub use admin::{admin_page, AdminVm};
pub use contact::{contact_page, thanks_page};
pub use home::home_page;
pub use properties::{properties_page, ListingsVm};
pub use property::property_page;
pub use region::region_page;
