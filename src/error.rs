// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

#[derive(Debug, PartialEq, Eq)]
pub enum LimitErrorCase {
    TooManyFiles,
    LargeFile,
    LargeArchive,
}

impl Display for LimitErrorCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyFiles => write!(f, "More than 65535 files in archive"),
            Self::LargeFile => write!(f, "File is larger than 4 GiB"),
            Self::LargeArchive => write!(f, "Archive offsets exceed 4 GiB"),
        }
    }
}

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("archive too large: {0}")]
    ArchiveTooLarge(LimitErrorCase),
    #[error("file name too large (more than 65535 bytes)")]
    FileNameTooLarge,
    #[error("archive comment too large (more than 65535 bytes)")]
    CommentTooLarge,

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}

impl ZipError {
    /// Returns true if this error reports a size or count which doesn't fit a non-ZIP64 field.
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::ArchiveTooLarge(_) | Self::FileNameTooLarge | Self::CommentTooLarge)
    }
}
