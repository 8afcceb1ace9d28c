//! Plugin inventory extraction from agent metadata
//!
//! SHIELD agents report a loosely-typed metadata document. The only part
//! with a fixed shape is the `plugins` mapping:
//!
//! ```json
//! { "plugins": { "fs": { "name": "Local Filesystem Plugin", ... }, ... }, ... }
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A plugin an agent reports it can run
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Key of the plugin in the metadata `plugins` mapping
    pub id: String,
    /// Human-readable name
    pub name: String,
}

#[derive(Deserialize)]
struct AgentMetadata {
    #[serde(default)]
    plugins: Option<BTreeMap<String, Value>>,
}

#[derive(Deserialize)]
struct PluginEntry {
    #[serde(default)]
    name: Option<String>,
}

/// Extract the plugin list from an agent metadata document.
///
/// The result is sorted by plugin id. A document without a `plugins` key
/// (or with `plugins: null`) is [`Error::PluginsNotDetected`]; an empty
/// `plugins` mapping yields an empty list. If any part of the `plugins`
/// structure has the wrong shape the whole document is rejected.
pub fn extract_plugins(document: &Value) -> Result<Vec<PluginDescriptor>> {
    if !document.is_object() {
        return Err(Error::MetadataDecode(serde::de::Error::custom(
            "agent metadata must be an object",
        )));
    }

    let metadata = AgentMetadata::deserialize(document).map_err(Error::MetadataDecode)?;
    let plugins = metadata.plugins.ok_or(Error::PluginsNotDetected)?;

    // BTreeMap iteration is already byte-wise ordered by id
    let plugins = plugins
        .into_iter()
        .map(|(id, entry)| plugin_from_entry(id, &entry))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(plugins = plugins.len(), "Extracted agent plugins");
    Ok(plugins)
}

/// Entries must be objects or `null`; the derived decoder alone would also
/// accept an array as a positional struct.
fn plugin_from_entry(id: String, entry: &Value) -> Result<PluginDescriptor> {
    if entry.is_null() {
        return Ok(PluginDescriptor {
            id,
            name: String::new(),
        });
    }
    if !entry.is_object() {
        return Err(Error::MetadataDecode(serde::de::Error::custom(format!(
            "plugin '{id}' must be an object"
        ))));
    }

    let entry = PluginEntry::deserialize(entry).map_err(Error::MetadataDecode)?;
    Ok(PluginDescriptor {
        id,
        name: entry.name.unwrap_or_default(),
    })
}

/// [`extract_plugins`] on JSON text.
pub fn extract_plugins_str(json: &str) -> Result<Vec<PluginDescriptor>> {
    let document: Value = serde_json::from_str(json).map_err(Error::MetadataDecode)?;
    extract_plugins(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_plugins_is_not_detected() {
        let err = extract_plugins(&json!({ "plugins": null })).unwrap_err();
        assert!(matches!(err, Error::PluginsNotDetected));
    }

    #[test]
    fn missing_or_null_name_is_empty() {
        let plugins = extract_plugins(&json!({
            "plugins": { "a": {}, "b": { "name": null }, "c": null }
        }))
        .unwrap();

        assert_eq!(plugins.len(), 3);
        assert!(plugins.iter().all(|p| p.name.is_empty()));
    }

    #[test]
    fn non_object_document_is_decode_error() {
        let err = extract_plugins(&json!(["plugins"])).unwrap_err();
        assert!(matches!(err, Error::MetadataDecode(_)));
    }

    #[test]
    fn invalid_json_text_is_decode_error() {
        let err = extract_plugins_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::MetadataDecode(_)));
    }
}
