// Infrastructure layer - External dependencies and adapters
pub mod cache_store;
pub mod config;
pub mod http_backend;
pub mod payload;
