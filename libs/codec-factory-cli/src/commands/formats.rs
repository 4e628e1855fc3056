// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::Result;
use codec_factory::{
    H264HwDecoderFactory, H264HwEncoderFactory, SdpVideoFormat, VideoDecoderFactory,
    VideoEncoderFactory,
};

use crate::FactoryKind;

/// Formats advertised by the adapter of the given kind.
pub fn supported_formats(kind: FactoryKind) -> Vec<SdpVideoFormat> {
    match kind {
        FactoryKind::Encoder => H264HwEncoderFactory::new().supported_formats(),
        FactoryKind::Decoder => H264HwDecoderFactory::new().supported_formats(),
    }
}

/// List supported formats in preference order.
pub fn run(kind: FactoryKind, json: bool) -> Result<()> {
    let formats = supported_formats(kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&formats)?);
        return Ok(());
    }

    println!("Supported {:?} formats ({}):\n", kind, formats.len());
    for (i, format) in formats.iter().enumerate() {
        let fmtp = format.fmtp_line();
        if fmtp.is_empty() {
            println!("  {}. {}", i + 1, format.name);
        } else {
            println!("  {}. {} [{}]", i + 1, format.name, fmtp);
        }
    }

    Ok(())
}
