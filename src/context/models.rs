//! Context configuration data models

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Top-level context document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Name of the currently active context, empty when none is set
    #[serde(rename = "current_context", default)]
    pub current: String,
    /// Map of context name to context
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contexts: BTreeMap<String, Context>,
}

/// A named context pointing at one Nomad cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Context name, mirrors the map key
    pub name: String,
    /// Nomad server address, e.g. https://nomad.service:4646
    pub address: String,
}

impl Context {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl ContextConfig {
    /// Whether a current context name is recorded
    pub fn has_current(&self) -> bool {
        !self.current.is_empty()
    }

    /// Lexicographically smallest context name, or empty when none remain
    pub fn first_name(&self) -> String {
        self.contexts.keys().next().cloned().unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Context>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Context>>::deserialize(deserializer)?.unwrap_or_default())
}
