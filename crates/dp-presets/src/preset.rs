//! Preset records.

use dp_engine::RollConfiguration;
use dp_engine::dice::{MAX_AGAIN, MIN_AGAIN};
use serde::{Deserialize, Serialize};

use crate::error::{PresetError, PresetResult};

/// A saved roll configuration with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Opaque unique id.
    pub id: String,
    /// Display name, HTML-escaped.
    pub name: String,
    /// The saved rules.
    #[serde(flatten)]
    pub settings: RollConfiguration,
}

impl Preset {
    /// Check that a stored preset holds settings the roller accepts.
    pub fn validate(&self) -> PresetResult<()> {
        let again = self.settings.again_threshold;
        if !(MIN_AGAIN..=MAX_AGAIN).contains(&again) {
            return Err(PresetError::InvalidPreset(format!(
                "'{}' has again threshold {again}, expected {MIN_AGAIN}-{MAX_AGAIN}",
                self.id
            )));
        }
        Ok(())
    }
}

/// A preset that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDraft {
    /// Display name, raw.
    pub name: String,
    /// The rules to save.
    pub settings: RollConfiguration,
}

impl PresetDraft {
    /// Create a draft from a name and settings.
    pub fn new(name: impl Into<String>, settings: RollConfiguration) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }
}

/// A partial change to a stored preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetUpdate {
    /// New display name, raw.
    pub name: Option<String>,
    /// New rules.
    pub settings: Option<RollConfiguration>,
}

impl PresetUpdate {
    /// An update that only renames.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            settings: None,
        }
    }

    /// An update that only replaces the settings.
    pub fn settings(settings: RollConfiguration) -> Self {
        Self {
            name: None,
            settings: Some(settings),
        }
    }
}

/// Escape markup characters in a user-supplied name.
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
