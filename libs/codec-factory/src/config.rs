// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Environment configuration loaded from YAML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CodecError, Result};

fn default_session_label() -> String {
    "default".to_string()
}

/// Configuration for building an [`Environment`](crate::Environment).
///
/// ```yaml
/// session_label: call-42
/// field_trials: "WebRTC-Foo/Enabled/WebRTC-Bar/Disabled/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentConfig {
    /// Label identifying the session in logs.
    #[serde(default = "default_session_label")]
    pub session_label: String,

    /// Field trial string in `Name/Group/` form.
    #[serde(default)]
    pub field_trials: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            session_label: default_session_label(),
            field_trials: String::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from a YAML file. A file that cannot be read is
    /// [`CodecError::Io`]; one that cannot be parsed is
    /// [`CodecError::Configuration`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = Self::from_yaml_str(&content).map_err(|e| match e {
            CodecError::Configuration(msg) => {
                CodecError::Configuration(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!("Loaded environment config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a YAML file, returning defaults if the file is
    /// missing or unparseable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No environment config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CodecError::Configuration(e.to_string()))
    }
}
