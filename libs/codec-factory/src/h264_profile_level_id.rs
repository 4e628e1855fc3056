// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! H.264 profiles, levels and the SDP `profile-level-id` parameter.
//!
//! `profile-level-id` is three hex bytes: `profile_idc`, `profile_iop`
//! (constraint flags) and `level_idc` (RFC 6184 section 8.1).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sdp_video_format::H264_FMTP_PROFILE_LEVEL_ID;

/// H.264 profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum H264Profile {
    /// Constrained Baseline - the profile every WebRTC endpoint decodes.
    ConstrainedBaseline,
    /// Baseline profile.
    Baseline,
    /// Main profile.
    Main,
    /// Constrained High profile.
    ConstrainedHigh,
    /// High profile.
    High,
    /// Predictive High 4:4:4 profile.
    PredictiveHigh444,
}

impl H264Profile {
    /// Hex `profile_idc` + `profile_iop` prefix used when writing a
    /// `profile-level-id`.
    fn profile_idc_iop(&self) -> &'static str {
        match self {
            H264Profile::ConstrainedBaseline => "42e0",
            H264Profile::Baseline => "4200",
            H264Profile::Main => "4d00",
            H264Profile::ConstrainedHigh => "640c",
            H264Profile::High => "6400",
            H264Profile::PredictiveHigh444 => "f400",
        }
    }
}

/// H.264 level.
///
/// Variants are declared in ascending capability order, so the derived
/// `Ord` is the level ordering. Level 1b sits between 1 and 1.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum H264Level {
    Level1,
    Level1b,
    Level1_1,
    Level1_2,
    Level1_3,
    Level2,
    Level2_1,
    Level2_2,
    Level3,
    Level3_1,
    Level3_2,
    Level4,
    Level4_1,
    Level4_2,
    Level5,
    Level5_1,
    Level5_2,
}

impl H264Level {
    /// `level_idc` as written in the bitstream and SDP.
    ///
    /// Level 1b has no `level_idc` of its own; it is signalled as 1.1 plus
    /// the constraint_set3 flag, so this returns 11 for it.
    pub fn level_idc(&self) -> u8 {
        match self {
            H264Level::Level1 => 10,
            H264Level::Level1b | H264Level::Level1_1 => 11,
            H264Level::Level1_2 => 12,
            H264Level::Level1_3 => 13,
            H264Level::Level2 => 20,
            H264Level::Level2_1 => 21,
            H264Level::Level2_2 => 22,
            H264Level::Level3 => 30,
            H264Level::Level3_1 => 31,
            H264Level::Level3_2 => 32,
            H264Level::Level4 => 40,
            H264Level::Level4_1 => 41,
            H264Level::Level4_2 => 42,
            H264Level::Level5 => 50,
            H264Level::Level5_1 => 51,
            H264Level::Level5_2 => 52,
        }
    }

    /// Map a `level_idc` back to a level. Never returns `Level1b`.
    pub fn from_level_idc(level_idc: u8) -> Option<Self> {
        let level = match level_idc {
            10 => H264Level::Level1,
            11 => H264Level::Level1_1,
            12 => H264Level::Level1_2,
            13 => H264Level::Level1_3,
            20 => H264Level::Level2,
            21 => H264Level::Level2_1,
            22 => H264Level::Level2_2,
            30 => H264Level::Level3,
            31 => H264Level::Level3_1,
            32 => H264Level::Level3_2,
            40 => H264Level::Level4,
            41 => H264Level::Level4_1,
            42 => H264Level::Level4_2,
            50 => H264Level::Level5,
            51 => H264Level::Level5_1,
            52 => H264Level::Level5_2,
            _ => return None,
        };
        Some(level)
    }
}

/// A (profile, level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct H264ProfileLevelId {
    pub profile: H264Profile,
    pub level: H264Level,
}

impl H264ProfileLevelId {
    pub fn new(profile: H264Profile, level: H264Level) -> Self {
        Self { profile, level }
    }

    /// Encode as a six-digit lowercase hex `profile-level-id`.
    ///
    /// Returns `None` for level 1b with a profile that cannot signal it
    /// (anything other than Constrained Baseline, Baseline and Main).
    pub fn to_profile_level_id_string(&self) -> Option<String> {
        if self.level == H264Level::Level1b {
            return match self.profile {
                H264Profile::ConstrainedBaseline => Some("42f00b".to_string()),
                H264Profile::Baseline => Some("42100b".to_string()),
                H264Profile::Main => Some("4d100b".to_string()),
                _ => None,
            };
        }

        Some(format!(
            "{}{:02x}",
            self.profile.profile_idc_iop(),
            self.level.level_idc()
        ))
    }
}

const CONSTRAINT_SET3_FLAG: u8 = 0x10;

/// Matches `profile_iop` against a pattern like `x1xx0000` (MSB first,
/// `x` = don't care).
struct BitPattern {
    mask: u8,
    value: u8,
}

impl BitPattern {
    const fn new(pattern: &[u8; 8]) -> Self {
        let mut mask = 0u8;
        let mut value = 0u8;
        let mut i = 0;
        while i < 8 {
            let bit = 1u8 << (7 - i);
            if pattern[i] != b'x' {
                mask |= bit;
            }
            if pattern[i] == b'1' {
                value |= bit;
            }
            i += 1;
        }
        Self { mask, value }
    }

    fn is_match(&self, profile_iop: u8) -> bool {
        (profile_iop ^ self.value) & self.mask == 0
    }
}

struct ProfilePattern {
    profile_idc: u8,
    profile_iop: BitPattern,
    profile: H264Profile,
}

// First match wins.
const PROFILE_PATTERNS: [ProfilePattern; 9] = [
    ProfilePattern {
        profile_idc: 0x42,
        profile_iop: BitPattern::new(b"x1xx0000"),
        profile: H264Profile::ConstrainedBaseline,
    },
    ProfilePattern {
        profile_idc: 0x4d,
        profile_iop: BitPattern::new(b"1xxx0000"),
        profile: H264Profile::ConstrainedBaseline,
    },
    ProfilePattern {
        profile_idc: 0x58,
        profile_iop: BitPattern::new(b"11xx0000"),
        profile: H264Profile::ConstrainedBaseline,
    },
    ProfilePattern {
        profile_idc: 0x42,
        profile_iop: BitPattern::new(b"x0xx0000"),
        profile: H264Profile::Baseline,
    },
    ProfilePattern {
        profile_idc: 0x58,
        profile_iop: BitPattern::new(b"10xx0000"),
        profile: H264Profile::Baseline,
    },
    ProfilePattern {
        profile_idc: 0x4d,
        profile_iop: BitPattern::new(b"0x0x0000"),
        profile: H264Profile::Main,
    },
    ProfilePattern {
        profile_idc: 0x64,
        profile_iop: BitPattern::new(b"00000000"),
        profile: H264Profile::High,
    },
    ProfilePattern {
        profile_idc: 0x64,
        profile_iop: BitPattern::new(b"00001100"),
        profile: H264Profile::ConstrainedHigh,
    },
    ProfilePattern {
        profile_idc: 0xf4,
        profile_iop: BitPattern::new(b"00000000"),
        profile: H264Profile::PredictiveHigh444,
    },
];

/// Parse a six-hex-digit `profile-level-id` such as `42e01f`.
///
/// Returns `None` for malformed strings, unknown levels and profile/constraint
/// combinations that match no known profile.
pub fn parse_profile_level_id(s: &str) -> Option<H264ProfileLevelId> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let numeric = u32::from_str_radix(s, 16).ok()?;
    if numeric == 0 {
        return None;
    }

    let level_idc = (numeric & 0xff) as u8;
    let profile_iop = ((numeric >> 8) & 0xff) as u8;
    let profile_idc = ((numeric >> 16) & 0xff) as u8;

    let level = if level_idc == 11 && profile_iop & CONSTRAINT_SET3_FLAG != 0 {
        H264Level::Level1b
    } else {
        H264Level::from_level_idc(level_idc)?
    };

    PROFILE_PATTERNS
        .iter()
        .find(|p| p.profile_idc == profile_idc && p.profile_iop.is_match(profile_iop))
        .map(|p| H264ProfileLevelId::new(p.profile, level))
}

/// Read `profile-level-id` from SDP `fmtp` parameters.
///
/// A missing parameter means Constrained Baseline level 3.1 (RFC 6184
/// default). A present but unparseable value returns `None`.
pub fn parse_sdp_profile_level_id(
    parameters: &BTreeMap<String, String>,
) -> Option<H264ProfileLevelId> {
    match parameters.get(H264_FMTP_PROFILE_LEVEL_ID) {
        Some(value) => parse_profile_level_id(value),
        None => Some(H264ProfileLevelId::new(
            H264Profile::ConstrainedBaseline,
            H264Level::Level3_1,
        )),
    }
}
