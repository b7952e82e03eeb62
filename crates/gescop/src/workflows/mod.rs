pub mod expiration;
pub mod registry;
