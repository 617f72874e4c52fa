//! Route-level pages. Platform crates map their router onto these.

mod blog;
mod contact;
mod home;
mod not_found;
mod service;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::Home;
pub use not_found::NotFound;
pub use service::ServicesPage;
