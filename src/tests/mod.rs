// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod spec;

use std::sync::Once;

static ENV_LOGGER: Once = Once::new();

/// Initialize the env logger for any tests that require it.
/// Safe to call multiple times.
pub(crate) fn init_logger() {
    ENV_LOGGER.call_once(|| env_logger::Builder::from_default_env().format_module_path(true).init());
}

/// Read a little-endian u16 at the given position of an archive.
pub(crate) fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

/// Read a little-endian u32 at the given position of an archive.
pub(crate) fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
