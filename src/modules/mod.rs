//! Integrations with external movie-data providers

pub mod integrations;
