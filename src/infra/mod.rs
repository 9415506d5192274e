pub mod ai;
pub mod db;
pub mod email;
pub mod error;
pub mod http;
pub mod oembed;
pub mod telemetry;
pub mod uploads;

pub use error::InfraError;
