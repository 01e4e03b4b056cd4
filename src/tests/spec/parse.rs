// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::utils::{concat, u16_le, u32_le};

#[test]
fn little_endian_primitives() {
    assert_eq!(u16_le(0), [0x00, 0x00]);
    assert_eq!(u16_le(20), [0x14, 0x00]);
    assert_eq!(u16_le(0xABCD), [0xCD, 0xAB]);
    assert_eq!(u16_le(u16::MAX), [0xFF, 0xFF]);

    assert_eq!(u32_le(0x04034b50), [0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(u32_le(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
    assert_eq!(u32_le(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn concat_preserves_order_and_length() {
    let chunks: [&[u8]; 4] = [b"ab", b"", b"cde", b"f"];
    let joined = concat(&chunks);

    assert_eq!(joined.len(), 6);
    assert_eq!(joined, b"abcdef");
    assert!(concat::<Vec<u8>>(&[]).is_empty());
}

#[test]
fn local_file_header_layout() {
    let header = LocalFileHeader {
        version: 20,
        flags: 0,
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0xD893_2AAC,
        compressed_size: 2,
        uncompressed_size: 2,
        file_name_length: 5,
        extra_field_length: 0,
    };

    #[rustfmt::skip]
    let expected = [
        20, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0xAC, 0x2A, 0x93, 0xD8,
        2, 0, 0, 0,
        2, 0, 0, 0,
        5, 0, 0, 0,
    ];

    assert_eq!(header.as_slice(), expected);
}

#[test]
fn central_directory_record_layout() {
    let header = CentralDirectoryRecord {
        v_made_by: 20,
        v_needed: 20,
        flags: 0,
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0x0102_0304,
        compressed_size: 7,
        uncompressed_size: 7,
        file_name_length: 1,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0x0001_0025,
    };

    let slice = header.as_slice();

    assert_eq!(slice.len(), 42);
    assert_eq!(&slice[0..4], &[20, 0, 20, 0]);
    assert_eq!(&slice[12..16], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&slice[16..24], &[7, 0, 0, 0, 7, 0, 0, 0]);
    assert_eq!(&slice[24..26], &[1, 0]);
    assert_eq!(&slice[26..38], &[0; 12]);
    assert_eq!(&slice[38..42], &[0x25, 0x00, 0x01, 0x00]);
}

#[test]
fn end_of_central_directory_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 2,
        num_of_entries: 2,
        size_cent_dir: 94,
        cent_dir_offset: 64,
        file_comm_length: 0,
    };

    assert_eq!(header.as_slice(), [0, 0, 0, 0, 2, 0, 2, 0, 94, 0, 0, 0, 64, 0, 0, 0, 0, 0]);
}
