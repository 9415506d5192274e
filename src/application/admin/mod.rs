//! Services behind the admin panel.

pub mod auth;
pub mod banners;
pub mod categories;
pub mod dashboard;
pub mod home_sections;
pub mod media;
pub mod navigation;
pub mod pages;
pub mod posts;
pub mod sections;
