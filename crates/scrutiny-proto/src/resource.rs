//! Runtime configuration check payloads.
//!
//! `GET /api/resource` runs every configuration check on the server and
//! returns a JSON object keyed by setting name, one [`ResourceConfig`] per
//! setting. A setting with a `suggested_value` is a suggestion; the rest are
//! checks that passed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/resource`, keyed by setting name.
pub type ResourceConfigMap = BTreeMap<String, ResourceConfig>;

/// Result of checking one runtime setting.
///
/// The backend serializes these with `PascalCase` keys and marks every field
/// optional, so all of them are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    /// Name of the setting.
    #[serde(default)]
    pub name: Option<String>,
    /// Current value.
    #[serde(default)]
    pub value: Option<String>,
    /// Value suggested by the check, if it differs from the current one.
    #[serde(default)]
    pub suggested_value: Option<String>,
    /// Unit of measurement (`s`, `ms`, `kB`, `8kB`, ...).
    #[serde(default)]
    pub unit: Option<String>,
    /// Why a value was suggested.
    #[serde(default)]
    pub details: Option<String>,
    /// Value type (`bool`, `integer`, `enum`, ...).
    #[serde(default)]
    pub vartype: Option<String>,
    /// Minimum allowed value.
    #[serde(default)]
    pub min_val: Option<String>,
    /// Maximum allowed value.
    #[serde(default)]
    pub max_val: Option<String>,
    /// Allowed values for enum settings.
    #[serde(default)]
    pub enum_vals: Option<String>,
    /// Whether applying a change requires a server restart.
    #[serde(default)]
    pub requires_restart: Option<bool>,
    /// Whether the check itself failed.
    #[serde(default)]
    pub got_error: Option<bool>,
}

impl ResourceConfig {
    /// True when the check produced a suggestion to apply.
    pub fn is_suggestion(&self) -> bool {
        self.suggested_value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Build the patch that applies this setting's suggestion.
    ///
    /// Returns `None` when there is nothing to apply.
    pub fn to_patch(&self) -> Option<ResourceConfigPatch> {
        if !self.is_suggestion() {
            return None;
        }
        Some(ResourceConfigPatch {
            name: self.name.clone()?,
            suggested_value: self.suggested_value.clone()?,
        })
    }
}

/// One element of the `PATCH /api/resource` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfigPatch {
    /// Name of the setting.
    pub name: String,
    /// Value to apply.
    pub suggested_value: String,
}
