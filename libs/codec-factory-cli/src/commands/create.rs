// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Result, bail};
use codec_factory::{
    Environment, H264HwDecoderFactory, H264HwEncoderFactory, ImplementationInfo, SdpVideoFormat,
    VideoDecoderFactory, VideoEncoderFactory,
};

use crate::FactoryKind;

/// Build a format from a codec name and `key=value` parameters.
pub fn parse_format(name: &str, params: &[String]) -> Result<SdpVideoFormat> {
    let mut format = SdpVideoFormat::new(name);
    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            bail!("Invalid parameter '{}', expected KEY=VALUE", param);
        };
        if key.is_empty() {
            bail!("Invalid parameter '{}', empty key", param);
        }
        format.parameters.insert(key.to_string(), value.to_string());
    }
    Ok(format)
}

/// Ask the adapter to create an instance and report what it picked.
pub fn run(
    env: &Environment,
    kind: FactoryKind,
    name: &str,
    params: &[String],
    json: bool,
) -> Result<()> {
    let format = parse_format(name, params)?;

    let info: ImplementationInfo = match kind {
        FactoryKind::Encoder => H264HwEncoderFactory::new()
            .create(env, &format)?
            .implementation_info(),
        FactoryKind::Decoder => H264HwDecoderFactory::new()
            .create(env, &format)?
            .implementation_info(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", format);
    println!("  Implementation: {}", info.implementation_name);
    println!("  Codec:          {}", info.codec_name);
    println!(
        "  Hardware:       {}",
        if info.is_hardware_accelerated { "yes" } else { "no" }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let format = parse_format(
            "H264",
            &["profile-level-id=640c34".to_string(), "packetization-mode=1".to_string()],
        )
        .unwrap();
        assert_eq!(format.parameter("profile-level-id"), Some("640c34"));
        assert_eq!(format.parameter("packetization-mode"), Some("1"));
    }

    #[test]
    fn test_parse_format_rejects_bad_params() {
        assert!(parse_format("H264", &["profile-level-id".to_string()]).is_err());
        assert!(parse_format("H264", &["=1".to_string()]).is_err());
    }

    #[test]
    fn test_run_unsupported_format_fails() {
        let env = Environment::default();
        assert!(run(&env, FactoryKind::Encoder, "VP9X", &[], true).is_err());
    }
}
