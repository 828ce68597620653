//! EPUB container rules and package assembly.
//!
//! ## Package Layout
//!
//! An EPUB package is a zip archive with two structural obligations:
//!
//! 1. The first entry is named `mimetype`, is stored uncompressed, and holds
//!    exactly `application/epub+zip`. Reading systems sniff it at a fixed
//!    byte offset without parsing any zip structures.
//! 2. The container descriptor `META-INF/container.xml` is present; it is
//!    how readers locate the publication inside the archive.
//!
//! [`container`] enforces these rules on a collected file list; [`packer`]
//! turns a source directory into the finished archive buffer.

mod container;
mod packer;

pub use container::{CONTAINER_DESCRIPTOR, ContainerLayout, MIMETYPE_CONTENT, MIMETYPE_NAME};
pub use packer::{pack, pack_with_options};
