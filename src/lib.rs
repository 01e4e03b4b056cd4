// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # store_zip
//!
//! A small ZIP archive writer which packages named text content into a store-only (uncompressed) archive,
//! computing CRC-32 checksums and encoding every record by hand.
//!
//! ## Features
//! - Archives are assembled entirely in memory; the output is either complete or not produced at all.
//! - Sizes, offsets and counts are checked against their field widths rather than silently truncated.
//! - Optional helpers for writing a finished archive to `futures` or `tokio` (`tokio` feature) writers.
//! - Aims for resonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ZIP64, compression and encryption are not supported, so an archive holds at most 65,535 entries and no
//! entry or offset may exceed 4 GiB.
//!
//! ```
//! # use store_zip::{ArchiveEntry, build_archive};
//! # fn run() -> store_zip::error::Result<()> {
//! let bytes = build_archive(&[ArchiveEntry::new("a.txt", "hi")])?;
//! assert_eq!(bytes.len(), 37 + 51 + 22);
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub(crate) mod entry;
pub mod error;
pub mod spec;
pub(crate) mod utils;
pub mod write;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::entry::ArchiveEntry;
pub use crate::spec::crc::{crc32, Crc32};
pub use crate::write::{build_archive, ZipFileWriter};

/// The conventional media type of the produced archives.
pub const MEDIA_TYPE: &str = "application/zip";

/// The conventional file extension of the produced archives.
pub const FILE_EXTENSION: &str = "zip";
