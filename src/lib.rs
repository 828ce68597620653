//! # epubpack
//!
//! Package an EPUB directory tree into an OCF container archive.
//!
//! This library turns a source directory holding a publication into a single
//! in-memory zip-based container: it walks the tree, filters out desktop
//! artifacts, validates the container structure, and assembles an archive
//! whose first entry is the uncompressed `mimetype` member that reading
//! systems sniff at a fixed offset.
//!
//! ## Features
//!
//! - Depth-first traversal with artifact exclusion and subtree pruning
//! - Container validation: `META-INF/container.xml` required, a source-tree
//!   `mimetype` replaced by the canonical member
//! - STORED `mimetype` first, DEFLATE for everything else
//! - Deterministic archive output (fixed entry timestamps)
//! - Bounded-concurrency file reads with order-preserving assembly
//!
//! ## Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> epubpack::Result<()> {
//!     let buffer = epubpack::pack("./book").await?;
//!     tokio::fs::write("book.epub", &buffer).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collect;
pub mod epub;
pub mod error;
pub mod options;
pub mod zip;

pub use cli::Cli;
pub use collect::collect_files;
pub use epub::{ContainerLayout, pack, pack_with_options};
pub use error::{Error, Result};
pub use options::PackOptions;
pub use self::zip::{CompressionMethod, ZipWriter};
