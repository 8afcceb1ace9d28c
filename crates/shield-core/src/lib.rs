//! Core endpoint resolution for the SHIELD backup client
//!
//! Resolves exactly one SHIELD core (endpoint plus trust and auth material)
//! from either a persisted multi-core configuration file or `SHIELD_*`
//! environment variables, and extracts plugin inventories from agent
//! metadata returned by a core.
//!
//! # Resolution paths
//!
//! - [`ConfigStore`] loads a YAML registry of named cores, selects one by
//!   alias and turns it into a [`ClientDescriptor`].
//! - [`EnvResolver`] builds a [`ClientDescriptor`] straight from the
//!   environment and authenticates it with the username and password it
//!   finds there.
//! - [`resolve_client`] tries the environment first and falls back to the
//!   configuration file.
//!
//! # Example
//!
//! ```ignore
//! use shield_core::{ConfigStore, default_config_path};
//!
//! let mut store = ConfigStore::load(default_config_path().unwrap())?;
//! let client = store.resolve_client("prod")?;
//! println!("talking to {}", client.url);
//! ```

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod metadata;
pub mod resolve;

pub use client::{AuthError, Authenticate, ClientDescriptor, LocalAuth};
pub use config::{ConfigStore, Core, default_config_path};
pub use env::{EnvResolution, EnvResolver, EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use metadata::{PluginDescriptor, extract_plugins, extract_plugins_str};
pub use resolve::resolve_client;
