//! Named-core configuration registry
//!
//! The SHIELD client keeps every core it knows about in one YAML file,
//! keyed by alias:
//!
//! ```yaml
//! prod:
//!   url: https://shield.example.com
//!   session: 0c5a1e7d-...
//!   skip_verify: false
//!   cacert: ''
//! ```
//!
//! [`ConfigStore`] loads that file (a missing file is an empty registry),
//! selects one alias as current, and builds a
//! [`ClientDescriptor`](crate::ClientDescriptor) from it.

mod endpoint;
mod store;

pub use endpoint::Core;
pub use store::{
    CONFIG_PATH_VAR, ConfigStore, DEFAULT_CONFIG_FILE, default_config_path,
    default_config_path_from,
};
