pub mod auth;
pub mod customer;
pub mod not_found;
pub mod vendor;

pub use not_found::NotFoundPage;
