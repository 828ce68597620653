//! ZIP archive assembly.
//!
//! This module provides functionality for writing ZIP archives into an
//! in-memory buffer, in the shape container formats built on zip expect.
//!
//! ## Architecture
//!
//! The module is organized into two components:
//!
//! - [`structures`]: Data structures representing ZIP format elements (file
//!   headers, EOCD) with their little-endian serialization
//! - [`writer`]: The entry-by-entry writer API for end users
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation writes front to back in that order. The first entry's
//! local header lands at offset 0, which is what lets container formats pin
//! a sniffable member at the very start of the file.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) method
//! - DEFLATE compression method
//! - UTF-8 entry names
//! - Deterministic output (fixed entry timestamps)
//!
//! ## Limitations
//!
//! - No ZIP64 extensions; 32-bit size/offset and 16-bit entry-count limits
//!   are enforced and overflow is an error
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod structures;
mod writer;

pub use structures::*;
pub use writer::ZipWriter;
