//! Core domain model: entities, parsing policies and pure derivations.
//!
//! Nothing in this tree touches the database or the HTTP layer; services in
//! `application` orchestrate these types against repository traits.

pub mod blocks;
pub mod entities;
pub mod error;
pub mod home;
pub mod json;
pub mod navigation;
pub mod posts;
pub mod sections;
pub mod slug;
pub mod types;
pub mod video;

pub use error::DomainError;
