// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, LocalFileHeader};
use crate::utils::{u16_le, u32_le};

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

impl LocalFileHeader {
    pub fn as_slice(&self) -> [u8; LFH_LENGTH] {
        let mut array = [0; LFH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, u16_le(self.version));
        array_push!(array, cursor, u16_le(self.flags));
        array_push!(array, cursor, u16_le(self.compression));
        array_push!(array, cursor, u16_le(self.mod_time));
        array_push!(array, cursor, u16_le(self.mod_date));
        array_push!(array, cursor, u32_le(self.crc));
        array_push!(array, cursor, u32_le(self.compressed_size));
        array_push!(array, cursor, u32_le(self.uncompressed_size));
        array_push!(array, cursor, u16_le(self.file_name_length));
        array_push!(array, cursor, u16_le(self.extra_field_length));

        array
    }
}

impl CentralDirectoryRecord {
    pub fn as_slice(&self) -> [u8; CDH_LENGTH] {
        let mut array = [0; CDH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, u16_le(self.v_made_by));
        array_push!(array, cursor, u16_le(self.v_needed));
        array_push!(array, cursor, u16_le(self.flags));
        array_push!(array, cursor, u16_le(self.compression));
        array_push!(array, cursor, u16_le(self.mod_time));
        array_push!(array, cursor, u16_le(self.mod_date));
        array_push!(array, cursor, u32_le(self.crc));
        array_push!(array, cursor, u32_le(self.compressed_size));
        array_push!(array, cursor, u32_le(self.uncompressed_size));
        array_push!(array, cursor, u16_le(self.file_name_length));
        array_push!(array, cursor, u16_le(self.extra_field_length));
        array_push!(array, cursor, u16_le(self.file_comment_length));
        array_push!(array, cursor, u16_le(self.disk_start));
        array_push!(array, cursor, u16_le(self.inter_attr));
        array_push!(array, cursor, u32_le(self.exter_attr));
        array_push!(array, cursor, u32_le(self.lh_offset));

        array
    }
}

impl EndOfCentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; EOCDR_LENGTH] {
        let mut array = [0; EOCDR_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, u16_le(self.disk_num));
        array_push!(array, cursor, u16_le(self.start_cent_dir_disk));
        array_push!(array, cursor, u16_le(self.num_of_entries_disk));
        array_push!(array, cursor, u16_le(self.num_of_entries));
        array_push!(array, cursor, u32_le(self.size_cent_dir));
        array_push!(array, cursor, u32_le(self.cent_dir_offset));
        array_push!(array, cursor, u16_le(self.file_comm_length));

        array
    }
}
