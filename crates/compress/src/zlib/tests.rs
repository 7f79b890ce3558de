use super::*;

use std::cell::Cell;

use flate2::Compression;
use proptest::prelude::*;

use crate::engine::Inflated;
use crate::error::ErrorKind;

fn content_stream() -> Vec<u8> {
    b"q 1 0 0 1 72 720 cm BT /F1 12 Tf (Hello, world) Tj ET Q\n".repeat(64)
}

fn raw_deflate(data: &[u8]) -> Vec<u8> {
    Flate2Engine
        .compress(data, Compression::default())
        .expect("raw deflate")
}

/// Builds a frame by hand from a header, optional DICTID and payload.
fn hand_built_frame(header: [u8; 2], dictionary_id: Option<[u8; 4]>, data: &[u8]) -> Vec<u8> {
    let mut frame = header.to_vec();
    if let Some(id) = dictionary_id {
        frame.extend_from_slice(&id);
    }
    frame.extend_from_slice(&raw_deflate(data));
    frame.extend_from_slice(&adler32(data).to_be_bytes());
    frame
}

#[test]
fn round_trip_all_modes() {
    let data = content_stream();
    for mode in CompressionMode::ALL {
        let frame = encode(&data, mode).expect("encode");
        assert!(frame.len() < data.len(), "{mode} should shrink repetitive input");
        assert_eq!(decode(&frame).expect("decode"), data, "{mode}");
    }
}

#[test]
fn round_trip_empty_input() {
    for mode in CompressionMode::ALL {
        let frame = encode(&[], mode).expect("encode");
        assert!(frame.len() >= HEADER_LEN + TRAILER_LEN);
        assert_eq!(&frame[frame.len() - 4..], &[0, 0, 0, 1]);
        assert!(decode(&frame).expect("decode").is_empty());
    }
}

#[test]
fn encoded_header_is_deflate_with_valid_check_bits() {
    for mode in CompressionMode::ALL {
        let frame = encode(b"header check", mode).expect("encode");
        assert_eq!(frame[0] & 0x0F, 8);
        assert_eq!(u16::from_be_bytes([frame[0], frame[1]]) % 31, 0);
        assert_eq!(frame[1] & FLAG_PRESET_DICTIONARY, 0);
    }
}

#[test]
fn trailer_is_big_endian_adler32_of_input() {
    let data = b"Wikipedia";
    for mode in CompressionMode::ALL {
        let frame = encode(data, mode).expect("encode");
        assert_eq!(&frame[frame.len() - 4..], &[0x11, 0xE6, 0x03, 0x98]);
    }
}

#[test]
fn foreign_level_hints_decode_identically() {
    let data = content_stream();
    for flg in [0x01, 0x5E, 0x9C, 0xDA] {
        let frame = hand_built_frame([0x78, flg], None, &data);
        assert_eq!(decode(&frame).expect("decode"), data, "78 {flg:02x}");
    }
}

#[test]
fn lenient_decoder_accepts_nonconforming_header() {
    let data = b"tolerated";
    let frame = hand_built_frame([0x78, 0x9D], None, data);
    assert_eq!(decode(&frame).expect("decode"), data);
}

#[test]
fn strict_decoder_rejects_nonconforming_header() {
    let frame = hand_built_frame([0x78, 0x9D], None, b"rejected");
    let codec = ZlibCodec::new().with_options(DecodeOptions::default().with_strict_header(true));
    let err = codec.decode(&frame).expect_err("bad check bits");
    assert_eq!(
        err.malformed(),
        Some(&Malformed::InvalidHeader {
            cmf: 0x78,
            flg: 0x9D
        })
    );

    let good = encode(b"accepted", CompressionMode::Default).expect("encode");
    assert_eq!(codec.decode(&good).expect("decode"), b"accepted");
}

#[test]
fn inputs_shorter_than_six_bytes_are_malformed() {
    let frame = encode(b"", CompressionMode::Default).expect("encode");
    for len in 0..6 {
        let err = decode(&frame[..len.min(frame.len())]).expect_err("short frame");
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "len {len}");
    }
    for len in 0..6 {
        let junk = vec![0x78; len];
        let err = decode(&junk).expect_err("short frame");
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "junk len {len}");
    }
}

#[test]
fn dictionary_flag_skips_dictionary_id() {
    let data = content_stream();
    // 0x78BB has FLG bit 5 set and is a multiple of 31. The DICTID starts
    // with a reserved DEFLATE block type so reading it as payload fails.
    let frame = hand_built_frame([0x78, 0xBB], Some([0x07, 0xFF, 0xFF, 0xFF]), &data);
    assert_eq!(decode(&frame).expect("decode"), data);

    let mut unflagged = frame.clone();
    unflagged[0] = 0x78;
    unflagged[1] = 0x9C;
    let err = decode(&unflagged).expect_err("dictionary id read as payload");
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn dictionary_frame_needs_ten_bytes() {
    let err = decode(&[0x78, 0xBB, 0, 0, 0, 1, 0, 0, 0]).expect_err("too short");
    assert_eq!(
        err.malformed(),
        Some(&Malformed::TooShort {
            len: 9,
            required: 10
        })
    );
}

#[test]
fn truncated_deflate_stream_is_malformed() {
    let data = content_stream();
    let frame = encode(&data, CompressionMode::BestCompression).expect("encode");
    let cut = &frame[..HEADER_LEN + (frame.len() - HEADER_LEN - TRAILER_LEN) / 2];
    let err = decode(cut).expect_err("truncated");
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn reserved_block_type_is_malformed() {
    let err = decode(&[0x78, 0x9C, 0x07, 0x00, 0x00, 0x00, 0x00, 0x01]).expect_err("btype 11");
    assert!(matches!(err.malformed(), Some(Malformed::CorruptDeflate(_))));
}

#[test]
fn corrupted_trailer_fails_verification() {
    let data = content_stream();
    let mut frame = encode(&data, CompressionMode::Default).expect("encode");
    let last = frame.len() - 1;
    frame[last] ^= 0xFF;

    let err = decode(&frame).expect_err("checksum mismatch");
    match err.malformed() {
        Some(Malformed::ChecksumMismatch { expected, actual }) => {
            assert_eq!(*actual, adler32(&data));
            assert_ne!(expected, actual);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let lenient =
        ZlibCodec::new().with_options(DecodeOptions::default().with_checksum(ChecksumPolicy::Ignore));
    assert_eq!(lenient.decode(&frame).expect("ignored trailer"), data);
}

#[test]
fn missing_trailer_is_reported() {
    let data = content_stream();
    let frame = encode(&data, CompressionMode::Default).expect("encode");
    let without_trailer = &frame[..frame.len() - 2];

    let err = decode(without_trailer).expect_err("partial trailer");
    assert_eq!(
        err.malformed(),
        Some(&Malformed::MissingTrailer { available: 2 })
    );

    let lenient =
        ZlibCodec::new().with_options(DecodeOptions::default().with_checksum(ChecksumPolicy::Ignore));
    assert_eq!(lenient.decode(without_trailer).expect("ignored trailer"), data);
}

#[test]
fn dictionary_encoding_is_not_implemented() {
    let err = ZlibCodec::new()
        .encode_with_dictionary(b"data", CompressionMode::Default, b"dict")
        .expect_err("unsupported");
    assert_eq!(err.kind(), ErrorKind::NotImplemented);
}

#[test]
fn speed_and_compression_modes_both_round_trip() {
    let data: Vec<u8> = (0..64 * 1024u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8 & 0x3F)
        .collect();
    let fast = encode(&data, CompressionMode::BestSpeed).expect("fast");
    let best = encode(&data, CompressionMode::BestCompression).expect("best");
    assert_eq!(decode(&fast).expect("decode fast"), data);
    assert_eq!(decode(&best).expect("decode best"), data);
    assert_eq!(&fast[fast.len() - 4..], &best[best.len() - 4..]);
}

#[derive(Default)]
struct EffortProbe {
    last: Cell<Option<u32>>,
}

impl DeflateEngine for EffortProbe {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn compress(&self, input: &[u8], effort: Compression) -> Result<Vec<u8>, ZlibError> {
        self.last.set(Some(effort.level()));
        Flate2Engine.compress(input, effort)
    }

    fn decompress(&self, input: &[u8]) -> Result<Inflated, ZlibError> {
        Flate2Engine.decompress(input)
    }
}

#[test]
fn modes_select_engine_effort() {
    let codec = ZlibCodec::with_engine(EffortProbe::default());
    for (mode, level) in [
        (CompressionMode::Default, 9),
        (CompressionMode::BestCompression, 9),
        (CompressionMode::BestSpeed, 1),
    ] {
        let frame = codec.encode(b"effort", mode).expect("encode");
        assert_eq!(codec.engine().last.get(), Some(level), "{mode}");
        assert_eq!(codec.decode(&frame).expect("decode"), b"effort");
    }
}

proptest! {
    #[test]
    fn arbitrary_payloads_round_trip(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        mode_index in 0usize..3,
    ) {
        let mode = CompressionMode::ALL[mode_index];
        let frame = encode(&data, mode).expect("encode");
        prop_assert_eq!(u16::from_be_bytes([frame[0], frame[1]]) % 31, 0);
        prop_assert_eq!(&frame[frame.len() - 4..], &adler32(&data).to_be_bytes()[..]);
        prop_assert_eq!(decode(&frame).expect("decode"), data);
    }
}
