// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Encoder and decoder instances as seen by the factories.

use serde::Serialize;

/// Describes which backend services a codec instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementationInfo {
    /// Backend name, e.g. `MediaFoundation` or `libvpx`.
    pub implementation_name: String,
    /// Codec the instance handles, e.g. `H264`.
    pub codec_name: String,
    /// True if encoding/decoding runs on dedicated hardware.
    pub is_hardware_accelerated: bool,
}

/// A video encoder instance produced by a [`VideoEncoderFactory`](crate::VideoEncoderFactory).
pub trait VideoEncoder: Send {
    fn implementation_info(&self) -> ImplementationInfo;
}

/// A video decoder instance produced by a [`VideoDecoderFactory`](crate::VideoDecoderFactory).
pub trait VideoDecoder: Send {
    fn implementation_info(&self) -> ImplementationInfo;
}

pub type BoxedVideoEncoder = Box<dyn VideoEncoder>;
pub type BoxedVideoDecoder = Box<dyn VideoDecoder>;
