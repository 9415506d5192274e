//! Application services orchestrating domain logic over repository traits.

pub mod admin;
pub mod blog;
pub mod chrome;
pub mod contact;
pub mod error;
pub mod home;
pub mod repos;
pub mod resolver;
pub mod settings_cache;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod fakes;

pub use error::AppError;
