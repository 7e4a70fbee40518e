/// HTTP layer: configuration, wire models, and the paginated fetcher.
pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::ApiError;
pub use models::{Character, Episode, Location, Resource};
