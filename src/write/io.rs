// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ArchiveEntry;
use crate::error::Result;
use crate::write::build_archive;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};

/// Builds an archive from the given entries and writes it to an [`AsyncWrite`] implementer.
///
/// The archive is fully assembled before the first byte is written, so a size limit failure never leaves a
/// truncated archive behind in the writer.
#[tracing::instrument(skip(writer, entries), fields(entries = entries.len()))]
pub async fn write_archive<W: AsyncWrite + Unpin>(writer: &mut W, entries: &[ArchiveEntry]) -> Result<()> {
    let bytes = build_archive(entries)?;

    writer.write_all(&bytes).await?;
    writer.flush().await?;

    tracing::debug!(bytes = bytes.len(), "archive written");
    Ok(())
}

/// As [`write_archive`], but over a tokio [`AsyncWrite`](tokio::io::AsyncWrite) implementer.
#[cfg(feature = "tokio")]
pub async fn write_archive_tokio<W>(writer: &mut W, entries: &[ArchiveEntry]) -> Result<()>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    use tokio_util::compat::TokioAsyncWriteCompatExt;

    write_archive(&mut writer.compat_write(), entries).await
}
