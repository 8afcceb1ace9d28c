//! Shared test utilities for the SHIELD client workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`config`]: temp directory holding a SHIELD config file
//! - [`auth`]: [`ScriptedAuth`] authenticator double
//! - [`env`]: in-memory environment maps
//! - [`logs`]: capture `tracing` output as text

pub mod auth;
pub mod config;
pub mod env;
pub mod logs;

pub use auth::ScriptedAuth;
pub use config::ConfigDir;
pub use env::{env_map, shield_env};
pub use logs::capture_logs;
