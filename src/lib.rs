pub mod api;
pub mod api_docs;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use infrastructure::server;
pub use modules::integrations::omdb;
pub use modules::integrations::tmdb;
