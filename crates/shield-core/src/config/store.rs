//! Configuration store: load, select, add and persist cores

use super::Core;
use crate::client::ClientDescriptor;
use crate::env::{EnvSource, ProcessEnv};
use crate::{Error, Result};
use shield_fs::document;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_VAR: &str = "SHIELD_CLI_CONFIG";

/// Configuration file name under the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".shield";

/// Default location of the configuration file.
///
/// `$SHIELD_CLI_CONFIG` when set, otherwise `~/.shield`. Returns `None`
/// when neither is available.
pub fn default_config_path() -> Option<PathBuf> {
    default_config_path_from(&ProcessEnv)
}

/// [`default_config_path`] reading the override from `env`.
pub fn default_config_path_from(env: &impl EnvSource) -> Option<PathBuf> {
    if let Some(path) = env.var(CONFIG_PATH_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

/// Registry of named SHIELD cores backed by a YAML file.
///
/// The current selection is held by alias and looked up on each use, so
/// it always reflects what the registry holds now. Removing the selected
/// alias leaves the selection pointing at nothing; [`current`](Self::current)
/// then returns `None` until another alias is selected.
///
/// Not internally synchronized; share behind a lock if needed.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Backing file, fixed at load time
    path: PathBuf,

    /// Alias -> core
    cores: BTreeMap<String, Core>,

    /// Alias of the selected core
    current: Option<String>,
}

impl ConfigStore {
    /// An empty registry that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cores: BTreeMap::new(),
            current: None,
        }
    }

    /// Load the registry stored at `path`.
    ///
    /// A missing file yields an empty registry so first runs work. Any
    /// other read failure, or content that is not an alias -> core
    /// mapping, is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        match document::load_yaml::<BTreeMap<String, Core>>(&store.path)? {
            Some(cores) => {
                tracing::debug!(
                    path = %store.path.display(),
                    cores = cores.len(),
                    "Loaded SHIELD config"
                );
                store.cores = cores;
            }
            None => {
                tracing::debug!(
                    path = %store.path.display(),
                    "No SHIELD config yet, starting empty"
                );
            }
        }
        Ok(store)
    }

    /// Write the whole registry back to the file it was loaded from.
    pub fn persist(&self) -> Result<()> {
        document::save_yaml(&self.path, &self.cores)?;
        tracing::debug!(
            path = %self.path.display(),
            cores = self.cores.len(),
            "Saved SHIELD config"
        );
        Ok(())
    }

    /// Make `alias` the current core.
    ///
    /// Fails with [`Error::UnknownCore`] and leaves the selection untouched
    /// if the alias is not registered.
    pub fn select(&mut self, alias: &str) -> Result<()> {
        if !self.cores.contains_key(alias) {
            return Err(Error::unknown_core(alias));
        }
        self.current = Some(alias.to_string());
        Ok(())
    }

    /// Insert `core` under `alias`, replacing any existing entry.
    pub fn add(&mut self, alias: impl Into<String>, core: Core) {
        let alias = alias.into();
        if self.cores.insert(alias.clone(), core).is_some() {
            tracing::debug!(alias = %alias, "Replaced SHIELD core");
        }
    }

    /// Remove the core under `alias`, returning it.
    ///
    /// The selection is not cleared; see the type-level docs.
    pub fn remove(&mut self, alias: &str) -> Option<Core> {
        self.cores.remove(alias)
    }

    /// Select `alias` and build a client descriptor from it.
    ///
    /// The descriptor copies `url`, `session`, `skip_verify` and `cacert`
    /// and always trusts the system CA bundle.
    pub fn resolve_client(&mut self, alias: &str) -> Result<ClientDescriptor> {
        self.select(alias)?;
        let core = self.current().ok_or_else(|| Error::unknown_core(alias))?;
        tracing::debug!(alias = %alias, url = %core.url, "Resolved SHIELD core from config");
        Ok(ClientDescriptor::from(core))
    }

    /// The currently selected core, if it is still registered.
    pub fn current(&self) -> Option<&Core> {
        self.current
            .as_deref()
            .and_then(|alias| self.cores.get(alias))
    }

    /// Alias of the current selection, even if it has since been removed.
    pub fn current_alias(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Get a core by alias.
    pub fn get(&self, alias: &str) -> Option<&Core> {
        self.cores.get(alias)
    }

    /// Check if an alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.cores.contains_key(alias)
    }

    /// All registered aliases (sorted).
    pub fn aliases(&self) -> Vec<&str> {
        self.cores.keys().map(String::as_str).collect()
    }

    /// Iterate over `(alias, core)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Core)> {
        self.cores.iter().map(|(alias, core)| (alias.as_str(), core))
    }

    /// Get the number of registered cores.
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// The file this registry persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
