// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! CRC-32/ISO-HDLC as used by ZIP (reflected polynomial 0xEDB88320, init and final XOR 0xFFFFFFFF).

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// The byte-wise lookup table, built at compile time.
pub(crate) static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut index = 0;

    while index < 256 {
        let mut value = index as u32;
        let mut bit = 0;

        while bit < 8 {
            value = if value & 1 == 1 { POLYNOMIAL ^ (value >> 1) } else { value >> 1 };
            bit += 1;
        }

        table[index] = value;
        index += 1;
    }

    table
}

/// An incremental CRC-32 hasher.
///
/// Feeding the same bytes in any chunking produces the same checksum as [`crc32`].
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut running = self.state;

        for &byte in data {
            running = TABLE[((running ^ byte as u32) & 0xFF) as usize] ^ (running >> 8);
        }

        self.state = running;
    }

    pub fn finalize(self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the CRC-32 checksum of the given bytes.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finalize()
}
