// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// A named piece of text content to be stored in an archive.
///
/// Names are written as their UTF-8 bytes and are not checked for uniqueness or path safety.
/// The UTF-8 flag is never set, so readers may decode non-ASCII names as CP437.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub(crate) name: String,
    pub(crate) content: String,
}

impl ArchiveEntry {
    /// Constructs a new entry from a name and its content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    /// Returns the entry's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<N: Into<String>, C: Into<String>> From<(N, C)> for ArchiveEntry {
    fn from((name, content): (N, C)) -> Self {
        Self::new(name, content)
    }
}
