pub mod admin;
pub mod auth;
pub mod donor;
pub mod leader;
mod not_found;
pub mod public;

pub use not_found::NotFound;
