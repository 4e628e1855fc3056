// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! SDP video format descriptor.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const H264_CODEC_NAME: &str = "H264";
pub const VP8_CODEC_NAME: &str = "VP8";
pub const VP9_CODEC_NAME: &str = "VP9";
pub const AV1_CODEC_NAME: &str = "AV1";

/// `fmtp` parameter keys used by the H.264 descriptors.
pub const H264_FMTP_PROFILE_LEVEL_ID: &str = "profile-level-id";
pub const H264_FMTP_LEVEL_ASYMMETRY_ALLOWED: &str = "level-asymmetry-allowed";
pub const H264_FMTP_PACKETIZATION_MODE: &str = "packetization-mode";

/// VP9 `fmtp` profile key.
pub const VP9_FMTP_PROFILE_ID: &str = "profile-id";

/// ASCII case-insensitive string comparison.
///
/// Codec names in SDP are case-insensitive ("H264", "h264").
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// A video codec variant as it appears in SDP: a codec name plus its
/// format-specific (`fmtp`) parameters.
///
/// Parameters are kept sorted by key so that equal descriptors render the
/// same `fmtp` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SdpVideoFormat {
    /// Codec name, e.g. `H264` or `VP8`.
    pub name: String,
    /// Format-specific parameters.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl SdpVideoFormat {
    /// Create a format with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Create a format from a name and parameter pairs.
    pub fn with_parameters<K, V, I>(name: impl Into<String>, parameters: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            name: name.into(),
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a single parameter value.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// True if `name` names the same codec as this format (case-insensitive).
    ///
    /// Parameters are not compared.
    pub fn is_same_codec_name(&self, name: &str) -> bool {
        equals_ignore_case(&self.name, name)
    }

    /// Render the parameters as an SDP `fmtp` line body
    /// (`key=value;key=value`).
    pub fn fmtp_line(&self) -> String {
        self.parameters
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Parse an `fmtp` line body into a format.
    ///
    /// Returns `None` if any non-empty entry lacks a `=` or has an empty key.
    pub fn from_fmtp(name: impl Into<String>, fmtp: &str) -> Option<Self> {
        let mut parameters = BTreeMap::new();
        for entry in fmtp.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            parameters.insert(key.to_string(), value.trim().to_string());
        }
        Some(Self {
            name: name.into(),
            parameters,
        })
    }
}

impl fmt::Display for SdpVideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codec name: {}, parameters: {{", self.name)?;
        for (i, (k, v)) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}={}", k, v)?;
        }
        write!(f, " }}")
    }
}
