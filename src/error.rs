//! Error types for packaging operations.
//!
//! All fallible operations in this crate return [`Result<T>`]. Variants fall
//! into three groups: caller mistakes ([`Error::SourceDirMissing`]),
//! container-structure violations ([`Error::MissingContainerEntry`]), and
//! I/O or resource failures hit while scanning the source tree, reading file
//! contents, or assembling the archive.
//!
//! Every error is fatal to the packaging run that raised it. No partial
//! archive buffer is ever returned alongside an error.

use std::io;
use std::path::PathBuf;

/// The error type for packaging operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No source directory was given.
    #[error("source directory must be specified")]
    SourceDirMissing,

    /// A file required by the container format is absent from the source tree.
    #[error("required container entry missing: '{0}'")]
    MissingContainerEntry(String),

    /// A directory listing or metadata lookup failed during traversal.
    #[error("failed to scan '{}': {source}", .path.display())]
    Scan {
        /// The path that could not be scanned.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading the contents of a collected file failed.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An entry name below the source root is not valid UTF-8.
    ///
    /// Archive member names are written with the UTF-8 name flag, so every
    /// name in the source tree must be valid UTF-8.
    #[error("file name is not valid UTF-8: '{}'", .path.display())]
    NonUtf8Name {
        /// The path with the offending name.
        path: PathBuf,
    },

    /// Directory nesting exceeded the configured traversal limit.
    ///
    /// The limit also stops traversal of symlink cycles that point back into
    /// an ancestor directory.
    #[error("directory nesting exceeds {max_depth} levels at '{}'", .path.display())]
    MaxDepthExceeded {
        /// The directory that sits past the limit.
        path: PathBuf,
        /// The configured limit.
        max_depth: usize,
    },

    /// The archive would exceed a structural limit of the classic zip format.
    ///
    /// Entry sizes and offsets are 32-bit and entry counts 16-bit; anything
    /// larger is rejected rather than written truncated.
    #[error("archive limit exceeded: {0}")]
    ArchiveLimit(String),

    /// An I/O error occurred while assembling the archive.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;
