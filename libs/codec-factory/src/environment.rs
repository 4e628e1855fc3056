// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Session environment passed through to created codec implementations.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::error::{CodecError, Result};

/// Parsed WebRTC-style field trials (`Name/Group/Name/Group/`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTrials {
    trials: BTreeMap<String, String>,
}

impl FieldTrials {
    /// Parse a field trial string.
    ///
    /// The trailing `/` is optional. Empty input yields no trials.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let body = s.strip_suffix('/').unwrap_or(s);
        let mut trials = BTreeMap::new();
        if body.is_empty() {
            return Ok(Self { trials });
        }

        let tokens: Vec<&str> = body.split('/').collect();
        if tokens.len() % 2 != 0 {
            return Err(CodecError::Configuration(format!(
                "Field trial string has an odd number of tokens: {:?}",
                s
            )));
        }

        for pair in tokens.chunks(2) {
            let (name, group) = (pair[0], pair[1]);
            if name.is_empty() {
                return Err(CodecError::Configuration(format!(
                    "Field trial with empty name in {:?}",
                    s
                )));
            }
            if group.is_empty() {
                return Err(CodecError::Configuration(format!(
                    "Field trial {} has an empty group in {:?}",
                    name, s
                )));
            }
            if let Some(existing) = trials.get(name) {
                if existing != group {
                    return Err(CodecError::Configuration(format!(
                        "Field trial {} has conflicting groups {:?} and {:?}",
                        name, existing, group
                    )));
                }
            }
            trials.insert(name.to_string(), group.to_string());
        }

        Ok(Self { trials })
    }

    /// Group for a trial, or `None` if the trial is not set.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.trials.get(name).map(String::as_str)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|g| g.starts_with("Enabled"))
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|g| g.starts_with("Disabled"))
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

#[derive(Debug)]
struct EnvironmentInner {
    session_label: String,
    field_trials: FieldTrials,
}

/// Session context handed to every codec implementation a factory creates.
///
/// Immutable and cheap to clone. Factories forward it; they never read it.
#[derive(Debug, Clone)]
pub struct Environment {
    inner: Arc<EnvironmentInner>,
}

impl Environment {
    pub fn new(session_label: impl Into<String>, field_trials: FieldTrials) -> Self {
        Self {
            inner: Arc::new(EnvironmentInner {
                session_label: session_label.into(),
                field_trials,
            }),
        }
    }

    /// Build an environment from loaded configuration.
    pub fn from_config(config: &EnvironmentConfig) -> Result<Self> {
        let field_trials = FieldTrials::parse(&config.field_trials)?;
        Ok(Self::new(config.session_label.clone(), field_trials))
    }

    pub fn session_label(&self) -> &str {
        &self.inner.session_label
    }

    pub fn field_trials(&self) -> &FieldTrials {
        &self.inner.field_trials
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("default", FieldTrials::default())
    }
}
