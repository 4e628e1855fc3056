// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Factory traits for video encoders and decoders.

use crate::codec::{BoxedVideoDecoder, BoxedVideoEncoder};
use crate::environment::Environment;
use crate::error::Result;
use crate::sdp_video_format::SdpVideoFormat;

/// Produces video encoders for the formats it advertises.
pub trait VideoEncoderFactory: Send + Sync {
    /// Formats this factory can encode, most preferred first.
    fn supported_formats(&self) -> Vec<SdpVideoFormat>;

    /// Create an encoder for `format`.
    ///
    /// `format` need not come from [`supported_formats`](Self::supported_formats).
    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoEncoder>;
}

/// Produces video decoders for the formats it advertises.
pub trait VideoDecoderFactory: Send + Sync {
    /// Formats this factory can decode, most preferred first.
    fn supported_formats(&self) -> Vec<SdpVideoFormat>;

    /// Create a decoder for `format`.
    ///
    /// `format` need not come from [`supported_formats`](Self::supported_formats).
    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoDecoder>;
}

// =============================================================================
// Blanket implementations for Box wrappers
// =============================================================================

impl<F: VideoEncoderFactory + ?Sized> VideoEncoderFactory for Box<F> {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        (**self).supported_formats()
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoEncoder> {
        (**self).create(env, format)
    }
}

impl<F: VideoDecoderFactory + ?Sized> VideoDecoderFactory for Box<F> {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        (**self).supported_formats()
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoDecoder> {
        (**self).create(env, format)
    }
}
