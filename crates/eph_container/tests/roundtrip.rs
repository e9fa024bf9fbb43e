//! Golden round-trip and invariant tests for the `.eph` container (§8).

use eph_container::codec::{BodyInput, CoeffBlock};
use eph_container::{ContainerError, ContainerReader, encode_to_path};

fn block(x0: f64, y0: f64, z0: f64) -> CoeffBlock {
    CoeffBlock {
        x: vec![x0, 0.01, 0.0],
        y: vec![y0, 0.02, 0.0],
        z: vec![z0, 0.03, 0.0],
    }
}

fn write_sample(path: &std::path::Path) {
    let intervals = vec![
        (2_451_545.0, 2_451_561.0),
        (2_451_561.0, 2_451_577.0),
        (2_451_577.0, 2_451_593.0),
    ];
    let bodies = vec![
        BodyInput {
            id: 399,
            name: "Earth".to_string(),
            blocks: vec![block(1.0, 0.0, 0.0), block(1.1, 0.1, 0.0), block(1.2, 0.2, 0.0)],
        },
        BodyInput {
            id: 301,
            name: "Moon".to_string(),
            blocks: vec![block(0.9, 0.0, 0.0), block(0.95, 0.05, 0.0), block(1.0, 0.1, 0.0)],
        },
    ];
    encode_to_path(path, &intervals, 2, bodies).unwrap();
}

#[test]
fn roundtrip_preserves_header_and_blocks() {
    let dir = std::env::temp_dir();
    let path = dir.join("eph_container_roundtrip_test.eph");
    write_sample(&path);

    let mut reader = ContainerReader::open(&path).unwrap();
    assert_eq!(reader.header().num_bodies, 2);
    assert_eq!(reader.header().num_intervals, 3);
    assert_eq!(reader.header().coeff_degree, 2);
    assert_eq!(reader.bodies()[0].id, 301); // body-id-sorted
    assert_eq!(reader.bodies()[1].id, 399);

    let earth_block_1 = reader.read_block(399, 1).unwrap();
    assert_eq!(earth_block_1, block(1.1, 0.1, 0.0));

    let moon_block_0 = reader.read_block(301, 0).unwrap();
    assert_eq!(moon_block_0, block(0.9, 0.0, 0.0));

    std::fs::remove_file(&path).ok();
}

#[test]
fn invariant_layout_matches_file_size() {
    let dir = std::env::temp_dir();
    let path = dir.join("eph_container_inv4_test.eph");
    write_sample(&path);

    let reader = ContainerReader::open(&path).unwrap();
    let expected = reader.header().expected_file_size();
    let actual = std::fs::metadata(&path).unwrap().len();
    assert_eq!(actual, expected);

    std::fs::remove_file(&path).ok();
}

#[test]
fn corrupted_magic_is_rejected() {
    let dir = std::env::temp_dir();
    let path = dir.join("eph_container_bad_magic_test.eph");
    write_sample(&path);

    let mut bytes = std::fs::read(&path).unwrap();
    bytes[0..4].copy_from_slice(b"XPH\0");
    std::fs::write(&path, &bytes).unwrap();

    let result = ContainerReader::open(&path);
    assert!(matches!(result, Err(ContainerError::InvalidMagic(_))));

    std::fs::remove_file(&path).ok();
}

#[test]
fn unknown_body_is_rejected() {
    let dir = std::env::temp_dir();
    let path = dir.join("eph_container_unknown_body_test.eph");
    write_sample(&path);

    let mut reader = ContainerReader::open(&path).unwrap();
    assert_eq!(
        reader.read_block(999, 0),
        Err(ContainerError::UnknownBody(999))
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn out_of_range_interval_is_rejected() {
    let dir = std::env::temp_dir();
    let path = dir.join("eph_container_oor_test.eph");
    write_sample(&path);

    let mut reader = ContainerReader::open(&path).unwrap();
    assert_eq!(
        reader.read_block(399, 10),
        Err(ContainerError::OutOfRange {
            interval_idx: 10,
            num_intervals: 3
        })
    );

    std::fs::remove_file(&path).ok();
}
