// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Built-in software codec factories.
//!
//! These are the general-purpose factories the hardware adapters wrap. They
//! advertise VP8, VP9 (profile 0) and AV1, in that preference order.

use crate::codec::{
    BoxedVideoDecoder, BoxedVideoEncoder, ImplementationInfo, VideoDecoder, VideoEncoder,
};
use crate::environment::Environment;
use crate::error::{CodecError, Result};
use crate::factory::{VideoDecoderFactory, VideoEncoderFactory};
use crate::sdp_video_format::{
    AV1_CODEC_NAME, SdpVideoFormat, VP8_CODEC_NAME, VP9_CODEC_NAME, VP9_FMTP_PROFILE_ID,
    equals_ignore_case,
};

/// Default software formats, most preferred first.
pub fn builtin_formats() -> Vec<SdpVideoFormat> {
    vec![
        SdpVideoFormat::new(VP8_CODEC_NAME),
        SdpVideoFormat::with_parameters(VP9_CODEC_NAME, [(VP9_FMTP_PROFILE_ID, "0")]),
        SdpVideoFormat::new(AV1_CODEC_NAME),
    ]
}

fn find_format<'a>(formats: &'a [SdpVideoFormat], requested: &SdpVideoFormat) -> Option<&'a str> {
    formats
        .iter()
        .find(|f| equals_ignore_case(&f.name, &requested.name))
        .map(|f| f.name.as_str())
}

/// Software video encoder.
#[derive(Debug, Clone)]
pub struct SoftwareVideoEncoder {
    codec_name: String,
}

impl SoftwareVideoEncoder {
    pub fn new(codec_name: impl Into<String>) -> Self {
        Self {
            codec_name: codec_name.into(),
        }
    }
}

impl VideoEncoder for SoftwareVideoEncoder {
    fn implementation_info(&self) -> ImplementationInfo {
        let implementation_name = if equals_ignore_case(&self.codec_name, AV1_CODEC_NAME) {
            "libaom"
        } else if equals_ignore_case(&self.codec_name, VP8_CODEC_NAME)
            || equals_ignore_case(&self.codec_name, VP9_CODEC_NAME)
        {
            "libvpx"
        } else {
            "software"
        };
        ImplementationInfo {
            implementation_name: implementation_name.to_string(),
            codec_name: self.codec_name.clone(),
            is_hardware_accelerated: false,
        }
    }
}

/// Software video decoder.
#[derive(Debug, Clone)]
pub struct SoftwareVideoDecoder {
    codec_name: String,
}

impl SoftwareVideoDecoder {
    pub fn new(codec_name: impl Into<String>) -> Self {
        Self {
            codec_name: codec_name.into(),
        }
    }
}

impl VideoDecoder for SoftwareVideoDecoder {
    fn implementation_info(&self) -> ImplementationInfo {
        let implementation_name = if equals_ignore_case(&self.codec_name, AV1_CODEC_NAME) {
            "dav1d"
        } else if equals_ignore_case(&self.codec_name, VP8_CODEC_NAME)
            || equals_ignore_case(&self.codec_name, VP9_CODEC_NAME)
        {
            "libvpx"
        } else {
            "software"
        };
        ImplementationInfo {
            implementation_name: implementation_name.to_string(),
            codec_name: self.codec_name.clone(),
            is_hardware_accelerated: false,
        }
    }
}

/// Built-in software encoder factory.
#[derive(Debug, Clone)]
pub struct BuiltinVideoEncoderFactory {
    formats: Vec<SdpVideoFormat>,
}

impl BuiltinVideoEncoderFactory {
    pub fn new() -> Self {
        Self {
            formats: builtin_formats(),
        }
    }

    /// Restrict the factory to an explicit format list.
    pub fn with_formats(formats: Vec<SdpVideoFormat>) -> Self {
        Self { formats }
    }
}

impl Default for BuiltinVideoEncoderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoEncoderFactory for BuiltinVideoEncoderFactory {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        self.formats.clone()
    }

    fn create(&self, _env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoEncoder> {
        match find_format(&self.formats, format) {
            Some(name) => Ok(Box::new(SoftwareVideoEncoder::new(name))),
            None => Err(CodecError::UnsupportedFormat(format.clone())),
        }
    }
}

/// Built-in software decoder factory.
#[derive(Debug, Clone)]
pub struct BuiltinVideoDecoderFactory {
    formats: Vec<SdpVideoFormat>,
}

impl BuiltinVideoDecoderFactory {
    pub fn new() -> Self {
        Self {
            formats: builtin_formats(),
        }
    }

    /// Restrict the factory to an explicit format list.
    pub fn with_formats(formats: Vec<SdpVideoFormat>) -> Self {
        Self { formats }
    }
}

impl Default for BuiltinVideoDecoderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoDecoderFactory for BuiltinVideoDecoderFactory {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        self.formats.clone()
    }

    fn create(&self, _env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoDecoder> {
        match find_format(&self.formats, format) {
            Some(name) => Ok(Box::new(SoftwareVideoDecoder::new(name))),
            None => Err(CodecError::UnsupportedFormat(format.clone())),
        }
    }
}
