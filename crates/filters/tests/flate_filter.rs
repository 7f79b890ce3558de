//! End-to-end behaviour of the FlateDecode filter as seen by a document model.

use checksums::adler32;
use compress::engine::{DeflateEngine, Flate2Engine};
use compress::{CompressionMode, ErrorKind};
use filters::{Filter, FilterName, FilterParms, FlateDecode, filter_for_name};
use proptest::prelude::*;

/// Builds a zlib frame around a raw DEFLATE body using the given header bytes
/// and optional DICTID.
fn frame_with_header(header: [u8; 2], dictionary_id: Option<u32>, data: &[u8]) -> Vec<u8> {
    let body = Flate2Engine
        .compress(data, CompressionMode::BestSpeed.effort())
        .expect("raw deflate");
    let mut frame = header.to_vec();
    if let Some(id) = dictionary_id {
        frame.extend_from_slice(&id.to_be_bytes());
    }
    frame.extend_from_slice(&body);
    frame.extend_from_slice(&adler32(data).to_be_bytes());
    frame
}

fn page_content() -> Vec<u8> {
    let mut content = Vec::new();
    for line in 0..200 {
        content.extend_from_slice(
            format!("BT /F1 10 Tf 72 {} Td (Line {line}) Tj ET\n", 720 - line * 3).as_bytes(),
        );
    }
    content
}

#[test]
fn every_mode_round_trips_through_the_trait() {
    let data = page_content();
    for mode in CompressionMode::ALL {
        let filter: Box<dyn Filter> = Box::new(FlateDecode::new().with_mode(mode));
        let stored = filter.encode(&data).expect("encode");
        assert_eq!(&stored[..2], &[0x78, 0x9C]);
        assert_eq!(&stored[stored.len() - 4..], &adler32(&data).to_be_bytes());
        assert_eq!(
            filter.decode(&stored, &FilterParms::new()).expect("decode"),
            data,
            "{mode}"
        );
    }
}

#[test]
fn streams_from_other_writers_decode() {
    let data = page_content();
    let filter = filter_for_name("FlateDecode").expect("flate");
    for header in [[0x78, 0x01], [0x78, 0x5E], [0x78, 0xDA], [0x58, 0x85], [0x68, 0x81]] {
        assert_eq!(u16::from_be_bytes(header) % 31, 0);
        let frame = frame_with_header(header, None, &data);
        assert_eq!(
            filter.decode(&frame, &FilterParms::new()).expect("decode"),
            data,
            "{header:02x?}"
        );
    }
}

#[test]
fn preset_dictionary_id_is_skipped() {
    let data = page_content();
    let filter = FlateDecode::new();
    // 0x78 0x20 sets only the dictionary bit on top of a 32 KiB window.
    let frame = frame_with_header([0x78, 0x20], Some(0x0700_0000), &data);
    assert_eq!(
        filter.decode(&frame, &FilterParms::new()).expect("decode"),
        data
    );
}

#[test]
fn short_streams_are_malformed() {
    let filter = FlateDecode::new();
    let cases: [&[u8]; 5] = [
        b"",
        b"\x78",
        b"\x78\x9c",
        b"\x78\x9c\x03\x00",
        b"\x78\x9c\x03\x00\x00",
    ];
    for stored in cases {
        let err = filter
            .decode(stored, &FilterParms::new())
            .expect_err("short stream");
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "{stored:02x?}");
    }
}

#[test]
fn empty_content_round_trips() {
    let filter = FlateDecode::new();
    let stored = filter.encode(&[]).expect("encode");
    assert!(stored.len() >= 6);
    assert!(filter
        .decode(&stored, &FilterParms::new())
        .expect("decode")
        .is_empty());
}

#[test]
fn filter_reports_its_declared_name() {
    assert_eq!(FlateDecode::new().name(), FilterName::FlateDecode);
    assert_eq!(FlateDecode::new().name().to_string(), "FlateDecode");
}

proptest! {
    #[test]
    fn arbitrary_content_round_trips(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        speed in any::<bool>(),
    ) {
        let mode = if speed { CompressionMode::BestSpeed } else { CompressionMode::BestCompression };
        let filter = FlateDecode::new().with_mode(mode);
        let stored = filter.encode(&data).expect("encode");
        prop_assert_eq!(filter.decode(&stored, &FilterParms::new()).expect("decode"), data);
    }
}
