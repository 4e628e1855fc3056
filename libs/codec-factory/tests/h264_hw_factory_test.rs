// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Integration tests for the H.264 hardware factory adapters.
//!
//! Run with: cargo test -p codec-factory --test h264_hw_factory_test

use codec_factory::{
    BoxedVideoDecoder, BoxedVideoEncoder, BuiltinVideoEncoderFactory, CodecError, Environment,
    FieldTrials, H264HwDecoderFactory, H264HwEncoderFactory, ImplementationInfo, Result,
    SdpVideoFormat, VideoDecoder, VideoDecoderFactory, VideoEncoder, VideoEncoderFactory,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("codec_factory=trace"))
        .with_test_writer()
        .try_init();
}

fn h264(profile_level_id: &str, packetization_mode: &str) -> SdpVideoFormat {
    SdpVideoFormat::with_parameters(
        "H264",
        [
            ("level-asymmetry-allowed", "1"),
            ("packetization-mode", packetization_mode),
            ("profile-level-id", profile_level_id),
        ],
    )
}

fn expected_h264_tail() -> Vec<SdpVideoFormat> {
    vec![
        h264("42001f", "1"),
        h264("42001f", "0"),
        h264("42e01f", "1"),
        h264("42e01f", "0"),
    ]
}

/// Base factory whose instances report the session they were created in, so
/// tests can observe what the adapter forwarded.
struct EchoFactory {
    formats: Vec<SdpVideoFormat>,
}

struct EchoCodec {
    info: ImplementationInfo,
}

impl EchoCodec {
    fn new(env: &Environment, format: &SdpVideoFormat) -> Self {
        Self {
            info: ImplementationInfo {
                implementation_name: format!("echo:{}", env.session_label()),
                codec_name: format.fmtp_line(),
                is_hardware_accelerated: false,
            },
        }
    }
}

impl VideoEncoder for EchoCodec {
    fn implementation_info(&self) -> ImplementationInfo {
        self.info.clone()
    }
}

impl VideoDecoder for EchoCodec {
    fn implementation_info(&self) -> ImplementationInfo {
        self.info.clone()
    }
}

impl EchoFactory {
    fn check(&self, format: &SdpVideoFormat) -> Result<()> {
        if self.formats.iter().any(|f| f.name == format.name) {
            Ok(())
        } else {
            Err(CodecError::UnsupportedFormat(format.clone()))
        }
    }
}

impl VideoEncoderFactory for EchoFactory {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        self.formats.clone()
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoEncoder> {
        self.check(format)?;
        Ok(Box::new(EchoCodec::new(env, format)))
    }
}

impl VideoDecoderFactory for EchoFactory {
    fn supported_formats(&self) -> Vec<SdpVideoFormat> {
        self.formats.clone()
    }

    fn create(&self, env: &Environment, format: &SdpVideoFormat) -> Result<BoxedVideoDecoder> {
        self.check(format)?;
        Ok(Box::new(EchoCodec::new(env, format)))
    }
}

fn echo(names: &[&str]) -> EchoFactory {
    EchoFactory {
        formats: names.iter().map(|n| SdpVideoFormat::new(*n)).collect(),
    }
}

fn session(label: &str) -> Environment {
    Environment::new(label, FieldTrials::default())
}

#[test]
fn test_enumeration_is_deterministic() {
    let encoders = H264HwEncoderFactory::new();
    assert_eq!(encoders.supported_formats(), encoders.supported_formats());

    let decoders = H264HwDecoderFactory::new();
    assert_eq!(decoders.supported_formats(), decoders.supported_formats());
}

#[test]
fn test_enumeration_appends_four_h264_variants() {
    let base = BuiltinVideoEncoderFactory::new();
    let base_formats = base.supported_formats();
    let factory = H264HwEncoderFactory::with_base(base);

    let formats = factory.supported_formats();
    assert_eq!(formats.len(), base_formats.len() + 4);
    assert_eq!(&formats[..base_formats.len()], base_formats.as_slice());
    assert_eq!(&formats[base_formats.len()..], expected_h264_tail().as_slice());
}

#[test]
fn test_enumeration_with_vp8_only_base() {
    let factory = H264HwEncoderFactory::with_base(echo(&["VP8"]));
    let mut expected = vec![SdpVideoFormat::new("VP8")];
    expected.extend(expected_h264_tail());
    assert_eq!(factory.supported_formats(), expected);
}

#[test]
fn test_enumeration_with_empty_base() {
    let factory = H264HwDecoderFactory::with_base(echo(&[]));
    assert_eq!(factory.supported_formats(), expected_h264_tail());
}

#[test]
fn test_base_order_is_preserved() {
    let factory = H264HwDecoderFactory::with_base(echo(&["AV1", "VP9", "VP8"]));
    let names: Vec<String> = factory
        .supported_formats()
        .into_iter()
        .take(3)
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["AV1", "VP9", "VP8"]);
}

#[test]
fn test_any_case_of_h264_creates_hardware_encoder() {
    init_tracing();
    let factory = H264HwEncoderFactory::with_base(echo(&["VP8", "H264"]));
    let env = session("call-1");

    for name in ["H264", "h264"] {
        let encoder = factory.create(&env, &SdpVideoFormat::new(name)).unwrap();
        let info = encoder.implementation_info();
        assert!(info.is_hardware_accelerated, "{} should route to hardware", name);
        assert_eq!(info.implementation_name, "MediaFoundation");
        assert_eq!(info.codec_name, "H264");
    }
}

#[test]
fn test_unadvertised_h264_parameters_still_create_hardware_encoder() {
    let factory = H264HwEncoderFactory::new();
    let format = SdpVideoFormat::with_parameters("h264", [("profile-level-id", "640c34")]);
    assert!(!factory.supported_formats().contains(&format));

    let encoder = factory.create(&Environment::default(), &format).unwrap();
    assert!(encoder.implementation_info().is_hardware_accelerated);
}

#[test]
fn test_hardware_route_never_reaches_base() {
    // The base advertises H264 too; the adapter must still intercept it.
    let factory = H264HwDecoderFactory::with_base(echo(&["H264"]));
    let decoder = factory
        .create(&session("s"), &h264("42e01f", "0"))
        .unwrap();
    assert_eq!(decoder.implementation_info().implementation_name, "MediaFoundation");
}

#[test]
fn test_other_formats_pass_through_to_base() {
    init_tracing();
    let base = echo(&["VP8", "H265"]);
    let env = session("call-7");
    let format = SdpVideoFormat::with_parameters("H265", [("level-id", "93")]);

    let direct = VideoEncoderFactory::create(&base, &env, &format)
        .unwrap()
        .implementation_info();

    let factory = H264HwEncoderFactory::with_base(base);
    let via_adapter = factory.create(&env, &format).unwrap().implementation_info();

    assert_eq!(via_adapter, direct);
    assert_eq!(via_adapter.implementation_name, "echo:call-7");
    assert_eq!(via_adapter.codec_name, "level-id=93");
}

#[test]
fn test_unadvertised_h264_parameters_still_create_hardware_decoder() {
    let factory = H264HwDecoderFactory::with_base(echo(&["VP8"]));
    let format = SdpVideoFormat::with_parameters("h264", [("profile-level-id", "640c34")]);
    assert!(!factory.supported_formats().contains(&format));

    let info = factory
        .create(&session("s"), &format)
        .unwrap()
        .implementation_info();
    assert!(info.is_hardware_accelerated);
    assert_eq!(info.implementation_name, "MediaFoundation");
}

#[test]
fn test_decoder_other_formats_pass_through_to_base() {
    init_tracing();
    let base = echo(&["VP9", "AV1"]);
    let env = session("call-9");
    let format = SdpVideoFormat::with_parameters("VP9", [("profile-id", "2")]);

    let direct = VideoDecoderFactory::create(&base, &env, &format)
        .unwrap()
        .implementation_info();

    let factory = H264HwDecoderFactory::with_base(base);
    let via_adapter = factory.create(&env, &format).unwrap().implementation_info();

    assert_eq!(via_adapter, direct);
    assert_eq!(via_adapter.implementation_name, "echo:call-9");
    assert_eq!(via_adapter.codec_name, "profile-id=2");
}

#[test]
fn test_unsupported_format_error_is_propagated_verbatim() {
    let factory = H264HwEncoderFactory::with_base(echo(&["VP8"]));
    let vp9 = SdpVideoFormat::new("VP9");

    match factory.create(&Environment::default(), &vp9) {
        Err(CodecError::UnsupportedFormat(format)) => assert_eq!(format, vp9),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("VP9 should not be creatable"),
    }
}

#[test]
fn test_decoder_unsupported_format_error_matches_base() {
    let base = echo(&["VP8"]);
    let format = SdpVideoFormat::new("VP9");
    let env = Environment::default();

    let base_error = match VideoDecoderFactory::create(&base, &env, &format) {
        Err(e) => e.to_string(),
        Ok(_) => panic!("base should reject VP9"),
    };

    let factory = H264HwDecoderFactory::with_base(base);
    let adapter_error = match factory.create(&env, &format) {
        Err(e) => e.to_string(),
        Ok(_) => panic!("adapter should reject VP9"),
    };

    assert_eq!(adapter_error, base_error);
}

#[test]
fn test_boxed_base_factory() {
    let base: Box<dyn VideoEncoderFactory> = Box::new(echo(&["VP8"]));
    let factory = H264HwEncoderFactory::with_base(base);
    assert_eq!(factory.supported_formats().len(), 5);
    assert!(factory
        .create(&Environment::default(), &SdpVideoFormat::new("VP8"))
        .is_ok());
}

#[test]
fn test_adapters_nest() {
    // An adapter is itself a factory and can be wrapped again.
    let inner = H264HwEncoderFactory::with_base(echo(&["VP8"]));
    let outer = H264HwEncoderFactory::with_base(inner);
    assert_eq!(outer.supported_formats().len(), 9);
    assert!(outer
        .create(&Environment::default(), &SdpVideoFormat::new("H264"))
        .unwrap()
        .implementation_info()
        .is_hardware_accelerated);
}

#[test]
fn test_factory_is_usable_across_threads() {
    let factory = std::sync::Arc::new(H264HwDecoderFactory::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let factory = factory.clone();
            std::thread::spawn(move || {
                let env = session(&format!("thread-{}", i));
                let decoder = factory
                    .create(&env, &SdpVideoFormat::new("H264"))
                    .unwrap();
                (
                    factory.supported_formats().len(),
                    decoder.implementation_info().is_hardware_accelerated,
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (7, true));
    }
}
