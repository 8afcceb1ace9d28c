//! YAML document loading and saving

use crate::{Error, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

const YAML: &str = "YAML";

/// Load a YAML document, returning `None` when the file does not exist.
///
/// A file that exists but is empty or holds only `null` decodes as
/// `T::default()`. Malformed content is always an error.
pub fn load_yaml<T>(path: &Path) -> Result<Option<T>>
where
    T: DeserializeOwned + Default,
{
    let Some(content) = io::read_text_if_exists(path)? else {
        return Ok(None);
    };
    parse_yaml(path, &content).map(Some)
}

/// Parse YAML text that was read from `path`.
pub fn parse_yaml<T>(path: &Path, content: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    let parsed: Option<T> = serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        format: YAML.into(),
        message: e.to_string(),
    })?;
    Ok(parsed.unwrap_or_default())
}

/// Save a value as YAML, replacing the file atomically.
pub fn save_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
        path: path.to_path_buf(),
        format: YAML.into(),
        message: e.to_string(),
    })?;
    io::write_atomic(path, content.as_bytes())
}
