//! Controller options
//!
//! Options can be built in code, loaded from a RON document, or changed at
//! runtime by name through [`crate::DragControls::set_option`].

use serde::{Deserialize, Serialize};

/// Error changing an option by name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("Unknown option: {0}")]
    Unknown(String),
}

/// Error loading options from a document
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Drag controller options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DragOptions {
    /// Whether dragging repositions the object
    pub moveable: bool,
    /// Whether the controller changes the surface cursor
    pub cursors: bool,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            moveable: true,
            cursors: false,
        }
    }
}

impl DragOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from RON; missing fields keep their defaults
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize options to pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Set an option by name
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), OptionError> {
        match name {
            "moveable" => self.moveable = value,
            "cursors" => self.cursors = value,
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        Ok(())
    }
}
