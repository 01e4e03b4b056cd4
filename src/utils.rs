// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// Encode a u16 as its two little-endian bytes.
pub(crate) fn u16_le(value: u16) -> [u8; 2] {
    [(value & 0xFF) as u8, (value >> 8) as u8]
}

/// Encode a u32 as its four little-endian bytes.
pub(crate) fn u32_le(value: u32) -> [u8; 4] {
    [(value & 0xFF) as u8, ((value >> 8) & 0xFF) as u8, ((value >> 16) & 0xFF) as u8, (value >> 24) as u8]
}

/// Join ordered byte chunks into one contiguous buffer.
pub(crate) fn concat<C: AsRef<[u8]>>(chunks: &[C]) -> Vec<u8> {
    let length = chunks.iter().map(|chunk| chunk.as_ref().len()).sum();
    let mut buffer = Vec::with_capacity(length);

    for chunk in chunks {
        buffer.extend_from_slice(chunk.as_ref());
    }

    buffer
}
