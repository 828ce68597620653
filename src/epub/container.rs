//! Container-level validation.
//!
//! Checks a collected file list against the Open Container Format rules
//! before any archive bytes are produced.

use crate::error::{Error, Result};

/// Name of the media-type member every container carries first.
pub const MIMETYPE_NAME: &str = "mimetype";

/// Canonical content of the media-type member.
pub const MIMETYPE_CONTENT: &[u8] = b"application/epub+zip";

/// Path of the container descriptor that must exist in every package.
pub const CONTAINER_DESCRIPTOR: &str = "META-INF/container.xml";

/// A file list that passed container validation.
///
/// Holding this type proves two things about the list: a root-level
/// `mimetype` is absent (the packer fabricates its own canonical copy
/// instead of shipping whatever the source tree held), and the container
/// descriptor `META-INF/container.xml` is present. The original collection
/// order is preserved.
#[derive(Debug, Clone)]
pub struct ContainerLayout {
    files: Vec<String>,
}

impl ContainerLayout {
    /// Validate a collected file list against the container rules.
    ///
    /// A root-level `mimetype` entry is dropped from the list; its on-disk
    /// content plays no part in the package. Its absence only warrants a
    /// warning, since the canonical member is fabricated either way. A
    /// missing `META-INF/container.xml` is fatal.
    pub fn validate(mut files: Vec<String>) -> Result<Self> {
        match files.iter().position(|file| file == MIMETYPE_NAME) {
            Some(index) => {
                files.remove(index);
            }
            None => {
                log::warn!("'{MIMETYPE_NAME}' file is missing in the root directory");
            }
        }

        if !files.iter().any(|file| file == CONTAINER_DESCRIPTOR) {
            return Err(Error::MissingContainerEntry(CONTAINER_DESCRIPTOR.into()));
        }

        Ok(Self { files })
    }

    /// The validated files, in collection order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Consume the layout, yielding the validated files.
    pub fn into_files(self) -> Vec<String> {
        self.files
    }
}
