// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Factory adapters that route H.264 to the hardware codec and everything
//! else to a wrapped base factory.

use crate::builtin::{BuiltinVideoDecoderFactory, BuiltinVideoEncoderFactory};
use crate::codec::{BoxedVideoDecoder, BoxedVideoEncoder};
use crate::environment::Environment;
use crate::error::Result;
use crate::factory::{VideoDecoderFactory, VideoEncoderFactory};
use crate::h264_profile_level_id::{H264Level, H264Profile, H264ProfileLevelId};
use crate::hardware::{H264HwDecoder, H264HwEncoder};
use crate::sdp_video_format::{
    H264_CODEC_NAME, H264_FMTP_LEVEL_ASYMMETRY_ALLOWED, H264_FMTP_PACKETIZATION_MODE,
    H264_FMTP_PROFILE_LEVEL_ID, SdpVideoFormat,
};

/// Level advertised for every hardware H.264 variant.
pub const HW_H264_LEVEL: H264Level = H264Level::Level3_1;

/// Build an H.264 descriptor for a profile, level and packetization mode.
pub fn create_h264_format(
    profile: H264Profile,
    level: H264Level,
    packetization_mode: &str,
) -> SdpVideoFormat {
    let mut format = SdpVideoFormat::with_parameters(
        H264_CODEC_NAME,
        [
            (H264_FMTP_LEVEL_ASYMMETRY_ALLOWED, "1"),
            (H264_FMTP_PACKETIZATION_MODE, packetization_mode),
        ],
    );
    // Level 1b is not representable for the high profiles; leave the id out
    // rather than advertise a wrong one.
    if let Some(id) = H264ProfileLevelId::new(profile, level).to_profile_level_id_string() {
        format
            .parameters
            .insert(H264_FMTP_PROFILE_LEVEL_ID.to_string(), id);
    }
    format
}

/// Append the four hardware H.264 variants to `formats`.
///
/// Order is fixed: Baseline before Constrained Baseline, packetization mode
/// 1 before 0 within each profile.
pub fn add_supported_h264_codecs(formats: &mut Vec<SdpVideoFormat>) {
    for profile in [H264Profile::Baseline, H264Profile::ConstrainedBaseline] {
        for packetization_mode in ["1", "0"] {
            formats.push(create_h264_format(profile, HW_H264_LEVEL, packetization_mode));
        }
    }
}

/// Where a creation request is serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Build the hardware H.264 implementation.
    Hardware,
    /// Forward to the base factory unchanged.
    Base,
}

/// Pick a route from the format name alone.
///
/// Parameters are not consulted: any H.264 request goes to hardware, even a
/// profile/level never advertised.
pub fn route(format: &SdpVideoFormat) -> Route {
    if format.is_same_codec_name(H264_CODEC_NAME) {
        Route::Hardware
    } else {
        Route::Base
    }
}

/// Encoder factory that services H.264 in hardware and delegates all other
/// formats to an owned base factory.
#[derive(Debug)]
pub struct H264HwEncoderFactory<F = BuiltinVideoEncoderFactory> {
    base: F,
}

impl H264HwEncoderFactory {
    /// Wrap the built-in software encoder factory.
    pub fn new() -> Self {
        Self::with_base(BuiltinVideoEncoderFactory::new())
    }
}

impl Default for H264HwEncoderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: VideoEncoderFactory> H264HwEncoderFactory<F> {
    /// Wrap `base`, taking ownership of it.
    pub fn with_base(base: F) -> Self {
        Self { base }
    }

    /// The wrapped base factory.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// Release the adapter, returning the base factory.
    pub fn into_base(self) -> F {
        self.base
    }
}

impl<F: VideoEncoderFactory> VideoEncoderFactory for H264HwEncoderFactory<F> {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        let mut formats = self.base.supported_formats();
        add_supported_h264_codecs(&mut formats);
        formats
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoEncoder> {
        match route(format) {
            Route::Hardware => {
                tracing::debug!(
                    session = env.session_label(),
                    "[H264HwEncoderFactory] Creating hardware encoder for {}",
                    format
                );
                Ok(Box::new(H264HwEncoder::new()))
            }
            Route::Base => {
                tracing::trace!(
                    session = env.session_label(),
                    "[H264HwEncoderFactory] Delegating {} to base factory",
                    format.name
                );
                self.base.create(env, format)
            }
        }
    }
}

/// Decoder factory that services H.264 in hardware and delegates all other
/// formats to an owned base factory.
#[derive(Debug)]
pub struct H264HwDecoderFactory<F = BuiltinVideoDecoderFactory> {
    base: F,
}

impl H264HwDecoderFactory {
    /// Wrap the built-in software decoder factory.
    pub fn new() -> Self {
        Self::with_base(BuiltinVideoDecoderFactory::new())
    }
}

impl Default for H264HwDecoderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: VideoDecoderFactory> H264HwDecoderFactory<F> {
    /// Wrap `base`, taking ownership of it.
    pub fn with_base(base: F) -> Self {
        Self { base }
    }

    /// The wrapped base factory.
    pub fn base(&self) -> &F {
        &self.base
    }

    /// Release the adapter, returning the base factory.
    pub fn into_base(self) -> F {
        self.base
    }
}

impl<F: VideoDecoderFactory> VideoDecoderFactory for H264HwDecoderFactory<F> {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        let mut formats = self.base.supported_formats();
        add_supported_h264_codecs(&mut formats);
        formats
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoDecoder> {
        match route(format) {
            Route::Hardware => {
                tracing::debug!(
                    session = env.session_label(),
                    "[H264HwDecoderFactory] Creating hardware decoder for {}",
                    format
                );
                Ok(Box::new(H264HwDecoder::new()))
            }
            Route::Base => {
                tracing::trace!(
                    session = env.session_label(),
                    "[H264HwDecoderFactory] Delegating {} to base factory",
                    format.name
                );
                self.base.create(env, format)
            }
        }
    }
}
