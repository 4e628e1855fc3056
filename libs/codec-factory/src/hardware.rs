// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Hardware-accelerated H.264 encoder and decoder.
//!
//! Construction never fails; device setup happens when the instance is first
//! used, and errors surface through the instance itself.

use crate::codec::{ImplementationInfo, VideoDecoder, VideoEncoder};
use crate::sdp_video_format::H264_CODEC_NAME;

pub const HW_IMPLEMENTATION_NAME: &str = "MediaFoundation";

fn hw_implementation_info() -> ImplementationInfo {
    ImplementationInfo {
        implementation_name: HW_IMPLEMENTATION_NAME.to_string(),
        codec_name: H264_CODEC_NAME.to_string(),
        is_hardware_accelerated: true,
    }
}

/// Hardware H.264 encoder.
#[derive(Debug, Default)]
pub struct H264HwEncoder {
    _private: (),
}

impl H264HwEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoEncoder for H264HwEncoder {
    fn implementation_info(&self) -> ImplementationInfo {
        hw_implementation_info()
    }
}

/// Hardware H.264 decoder.
#[derive(Debug, Default)]
pub struct H264HwDecoder {
    _private: (),
}

impl H264HwDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoDecoder for H264HwDecoder {
    fn implementation_info(&self) -> ImplementationInfo {
        hw_implementation_info()
    }
}
