// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing store-only ZIP files.
//!
//! The whole archive is assembled in memory; bytes are only handed back once every record has been built.
//!
//! # Example
//! ### One-shot
//! ```
//! # use store_zip::{ArchiveEntry, write::build_archive};
//! # use store_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let entries = vec![ArchiveEntry::new("openapi.yaml", "openapi: 3.0.0"), ArchiveEntry::new("README.md", "# Tools")];
//! let bytes = build_archive(&entries)?;
//! #   Ok(())
//! # }
//! ```
//! ### Entry by entry
//! ```
//! # use store_zip::{ArchiveEntry, write::ZipFileWriter};
//! # use store_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new();
//!
//! writer.write_entry_whole(&ArchiveEntry::new("report.md", "All checks passed."))?;
//! writer.comment(String::from("Generated report bundle"));
//!
//! let bytes = writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod entry_whole;
pub(crate) mod io;

pub use io::write_archive;
#[cfg(feature = "tokio")]
pub use io::write_archive_tokio;

use crate::entry::ArchiveEntry;
use crate::error::{LimitErrorCase, Result, ZipError};
use crate::spec::consts::{EOCDR_SIGNATURE, NON_ZIP64_MAX_NUM_FILES};
use crate::spec::header::EndOfCentralDirectoryHeader;
use crate::utils::{concat, u32_le};

use entry_whole::EntryWholeWriter;

/// An in-memory ZIP file writer which only ever uses the stored method.
///
/// # Note
/// - [`ZipFileWriter::close()`] must be called to obtain the archive bytes.
#[derive(Debug, Default)]
pub struct ZipFileWriter {
    pub(crate) local_records: Vec<Vec<u8>>,
    pub(crate) cd_records: Vec<Vec<u8>>,
    /// The total length of all local file records written so far.
    pub(crate) offset: u64,
    comment_opt: Option<String>,
}

impl ZipFileWriter {
    /// Construct a new, empty ZIP file writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a new ZIP entry with the stored method.
    ///
    /// If an error is returned, nothing from this entry has been recorded and the writer remains usable.
    #[tracing::instrument(skip(self, entry), fields(name = %entry.name()))]
    pub fn write_entry_whole(&mut self, entry: &ArchiveEntry) -> Result<()> {
        EntryWholeWriter::from_raw(self, entry).write()
    }

    /// Set the ZIP file comment.
    pub fn comment(&mut self, comment: String) {
        self.comment_opt = Some(comment);
    }

    /// Returns the byte offset at which the next local file record would begin.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of entries written so far.
    pub fn entry_count(&self) -> usize {
        self.cd_records.len()
    }

    /// Consumes this ZIP writer and returns the complete archive.
    ///
    /// This includes:
    /// - All local file records, in the order they were written.
    /// - All central directory records, in the same order.
    /// - The end of central directory record and the file comment.
    #[tracing::instrument(skip(self))]
    pub fn close(self) -> Result<Vec<u8>> {
        let comment = self.comment_opt.unwrap_or_default();
        let local_section = concat(&self.local_records);
        let central_section = concat(&self.cd_records);

        let end_record =
            end_of_central_directory_record(self.cd_records.len(), central_section.len(), local_section.len(), &comment)?;

        tracing::debug!(
            entries = self.cd_records.len(),
            cd_size = central_section.len(),
            cd_offset = local_section.len(),
            "closing archive"
        );

        Ok(concat(&[local_section, central_section, end_record]))
    }
}

/// Builds a complete store-only archive from an ordered list of entries.
///
/// Either the whole archive is returned or an error is; no partial output is ever produced.
#[tracing::instrument(skip(entries), fields(entries = entries.len()))]
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    if entries.len() > NON_ZIP64_MAX_NUM_FILES as usize {
        return Err(ZipError::ArchiveTooLarge(LimitErrorCase::TooManyFiles));
    }

    let mut writer = ZipFileWriter::new();

    for entry in entries {
        writer.write_entry_whole(entry)?;
    }

    writer.close()
}

/// Assembles the end of central directory record (plus the trailing file comment).
///
/// Every count and size is checked against its field width before anything is encoded.
pub(crate) fn end_of_central_directory_record(
    num_entries: usize,
    cd_size: usize,
    cd_offset: usize,
    comment: &str,
) -> Result<Vec<u8>> {
    let num_of_entries: u16 =
        num_entries.try_into().map_err(|_| ZipError::ArchiveTooLarge(LimitErrorCase::TooManyFiles))?;

    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: num_of_entries,
        num_of_entries,
        size_cent_dir: cd_size.try_into().map_err(|_| ZipError::ArchiveTooLarge(LimitErrorCase::LargeArchive))?,
        cent_dir_offset: cd_offset.try_into().map_err(|_| ZipError::ArchiveTooLarge(LimitErrorCase::LargeArchive))?,
        file_comm_length: comment.len().try_into().map_err(|_| ZipError::CommentTooLarge)?,
    };

    Ok(concat(&[&u32_le(EOCDR_SIGNATURE)[..], &header.as_slice()[..], comment.as_bytes()]))
}
