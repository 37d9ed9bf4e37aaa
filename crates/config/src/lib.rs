//! Configuration management for the Grafana client.
//!
//! This crate provides types and loaders for building Grafana connection
//! configuration from `.env` files, environment variables, and explicit
//! overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
