// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use thiserror::Error;

use crate::sdp_video_format::SdpVideoFormat;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unsupported video format: {0}")]
    UnsupportedFormat(SdpVideoFormat),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
