// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::crc::{crc32, Crc32, TABLE};

#[test]
fn empty_input() {
    assert_eq!(crc32(&[]), 0x0000_0000);
}

#[test]
fn check_value() {
    assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
}

#[test]
fn known_values() {
    assert_eq!(crc32(b"a"), 0xE8B7_BE43);
    assert_eq!(crc32(b"The quick brown fox jumps over the lazy dog"), 0x414F_A339);
}

#[test]
fn table_entries() {
    assert_eq!(TABLE[0], 0x0000_0000);
    assert_eq!(TABLE[1], 0x7707_3096);
    assert_eq!(TABLE[128], 0xEDB8_8320);
    assert_eq!(TABLE[255], 0x2D02_EF8D);
}

#[test]
fn matches_reference_implementation() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8).collect();

    for len in [0, 1, 7, 8, 255, 256, 1000, 4096] {
        let mut reference = crc32fast::Hasher::new();
        reference.update(&data[..len]);
        assert_eq!(crc32(&data[..len]), reference.finalize(), "for length {len}");
    }
}

#[test]
fn incremental_matches_one_shot() {
    let data = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt...";

    for split in [0, 1, 13, data.len() / 2, data.len()] {
        let mut hasher = Crc32::new();
        hasher.update(&data[..split]);
        hasher.update(&data[split..]);
        assert_eq!(hasher.finalize(), crc32(data), "for split at {split}");
    }
}
