// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ArchiveEntry;
use crate::error::{LimitErrorCase, Result, ZipError};
use crate::spec::consts::{
    CDH_SIGNATURE, COMPRESSION_STORED, LFH_SIGNATURE, NON_ZIP64_MAX_NUM_FILES, VERSION_MADE_BY, VERSION_NEEDED,
};
use crate::spec::crc::crc32;
use crate::spec::header::{CentralDirectoryRecord, LocalFileHeader};
use crate::utils::{concat, u32_le};
use crate::write::ZipFileWriter;

pub struct EntryWholeWriter<'b, 'c> {
    writer: &'b mut ZipFileWriter,
    entry: &'c ArchiveEntry,
}

impl<'b, 'c> EntryWholeWriter<'b, 'c> {
    pub fn from_raw(writer: &'b mut ZipFileWriter, entry: &'c ArchiveEntry) -> Self {
        Self { writer, entry }
    }

    pub fn write(self) -> Result<()> {
        if self.writer.cd_records.len() >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::ArchiveTooLarge(LimitErrorCase::TooManyFiles));
        }

        let file_name = self.entry.name.as_bytes();
        let data = self.entry.content.as_bytes();

        let (file_name_length, size) = entry_field_widths(file_name.len(), data.len())?;

        let lf_header = LocalFileHeader {
            version: VERSION_NEEDED,
            flags: 0,
            compression: COMPRESSION_STORED,
            mod_time: 0,
            mod_date: 0,
            crc: crc32(data),
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        };

        let header = CentralDirectoryRecord {
            v_made_by: VERSION_MADE_BY,
            v_needed: lf_header.version,
            flags: lf_header.flags,
            compression: lf_header.compression,
            mod_time: lf_header.mod_time,
            mod_date: lf_header.mod_date,
            crc: lf_header.crc,
            compressed_size: lf_header.compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length: lf_header.file_name_length,
            extra_field_length: 0,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset: self
                .writer
                .offset
                .try_into()
                .map_err(|_| ZipError::ArchiveTooLarge(LimitErrorCase::LargeArchive))?,
        };

        let local_record = local_file_record(&lf_header, file_name, data);
        let cd_record = central_directory_record(&header, file_name);

        tracing::debug!(
            name = %self.entry.name,
            size = lf_header.uncompressed_size,
            crc = lf_header.crc,
            offset = header.lh_offset,
            "writing stored entry"
        );

        self.writer.offset += local_record.len() as u64;
        self.writer.local_records.push(local_record);
        self.writer.cd_records.push(cd_record);

        Ok(())
    }
}

/// Narrows an entry's name and content lengths to their header field widths.
///
/// Stored data is never transformed, so the returned size serves as both the compressed and uncompressed size.
pub(crate) fn entry_field_widths(file_name_length: usize, data_length: usize) -> Result<(u16, u32)> {
    let size: u32 = data_length.try_into().map_err(|_| ZipError::ArchiveTooLarge(LimitErrorCase::LargeFile))?;
    let file_name_length: u16 = file_name_length.try_into().map_err(|_| ZipError::FileNameTooLarge)?;

    Ok((file_name_length, size))
}

/// Assembles a local file record: signature, fixed header, file name, then the stored data.
pub(crate) fn local_file_record(header: &LocalFileHeader, file_name: &[u8], data: &[u8]) -> Vec<u8> {
    concat(&[&u32_le(LFH_SIGNATURE)[..], &header.as_slice()[..], file_name, data])
}

/// Assembles a central directory record: signature, fixed header, then the file name.
pub(crate) fn central_directory_record(header: &CentralDirectoryRecord, file_name: &[u8]) -> Vec<u8> {
    concat(&[&u32_le(CDH_SIGNATURE)[..], &header.as_slice()[..], file_name])
}
