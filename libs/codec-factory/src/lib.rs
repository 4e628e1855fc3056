// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Hardware/software codec factory adapters.
//!
//! [`H264HwEncoderFactory`] and [`H264HwDecoderFactory`] wrap a base factory
//! (the built-in software codecs by default). They advertise the base
//! formats followed by four H.264 variants, and build the hardware H.264
//! implementation for any request named `H264`, regardless of case or
//! parameters. Every other request goes to the base factory untouched.
//!
//! ```ignore
//! use codec_factory::{Environment, H264HwEncoderFactory, SdpVideoFormat, VideoEncoderFactory};
//!
//! let factory = H264HwEncoderFactory::new();
//! let formats = factory.supported_formats(); // VP8, VP9, AV1, then 4x H264
//!
//! let env = Environment::default();
//! let encoder = factory.create(&env, &SdpVideoFormat::new("h264"))?;
//! assert!(encoder.implementation_info().is_hardware_accelerated);
//! ```

pub mod builtin;
pub mod codec;
pub mod config;
pub mod environment;
pub mod error;
pub mod factory;
pub mod h264_hw_factory;
pub mod h264_profile_level_id;
pub mod hardware;
pub mod sdp_video_format;

pub use builtin::{
    BuiltinVideoDecoderFactory, BuiltinVideoEncoderFactory, SoftwareVideoDecoder,
    SoftwareVideoEncoder,
};
pub use codec::{BoxedVideoDecoder, BoxedVideoEncoder, ImplementationInfo, VideoDecoder, VideoEncoder};
pub use config::EnvironmentConfig;
pub use environment::{Environment, FieldTrials};
pub use error::{CodecError, Result};
pub use factory::{VideoDecoderFactory, VideoEncoderFactory};
pub use h264_hw_factory::{
    H264HwDecoderFactory, H264HwEncoderFactory, Route, add_supported_h264_codecs,
    create_h264_format, route,
};
pub use h264_profile_level_id::{
    H264Level, H264Profile, H264ProfileLevelId, parse_profile_level_id,
    parse_sdp_profile_level_id,
};
pub use hardware::{H264HwDecoder, H264HwEncoder};
pub use sdp_video_format::{SdpVideoFormat, equals_ignore_case};
