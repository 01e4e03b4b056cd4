// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// Version 2.0 of the specification; the lowest which covers the stored method.
pub const VERSION_NEEDED: u16 = 20;
pub const VERSION_MADE_BY: u16 = 20;

/// The store (no compression) method.
pub const COMPRESSION_STORED: u16 = 0;

/// The largest entry count a non-ZIP64 end of central directory record can carry.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;
