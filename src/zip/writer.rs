//! In-memory ZIP archive writer.
//!
//! This module assembles a complete archive in a single growable buffer,
//! writing from any caller that can hand over entry bytes.
//!
//! ## Write Strategy
//!
//! ZIP files are written front to back:
//! 1. Each entry's Local File Header followed by its (possibly compressed)
//!    data, at the moment the entry is added
//! 2. The Central Directory with metadata for all entries, on finish
//! 3. The End of Central Directory (EOCD) record last
//!
//! Entry metadata is retained between adds so the Central Directory can be
//! emitted in one pass. Because everything lands in one buffer, offsets are
//! known exactly as entries are appended and no backpatching is needed.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};

use crate::error::{Error, Result};

use super::structures::{
    CentralDirectoryHeader, CompressionMethod, EndOfCentralDirectory, LocalFileHeader,
};

/// Buffer-backed ZIP writer.
///
/// Entries are appended with [`add_entry`](Self::add_entry) and the archive
/// is sealed with [`finish`](Self::finish), which yields the complete
/// buffer. Entries appear in the archive, and in its member index, in
/// insertion order; the first entry's local header starts at offset 0.
///
/// Classic zip only: sizes and offsets past the 32-bit limits, or more than
/// 65535 entries, are rejected with [`Error::ArchiveLimit`].
#[derive(Default)]
pub struct ZipWriter {
    buf: Vec<u8>,
    central: Vec<CentralDirectoryHeader>,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    ///
    /// `name` is the archive member path, forward-slash separated. The data
    /// is compressed according to `method` and written immediately, preceded
    /// by its local file header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveLimit`] if the name, the entry data, the
    /// running archive size, or the entry count leaves the range the classic
    /// zip format can express.
    pub fn add_entry(&mut self, name: &str, data: &[u8], method: CompressionMethod) -> Result<()> {
        if name.len() > u16::MAX as usize {
            return Err(Error::ArchiveLimit(format!(
                "entry name exceeds {} bytes",
                u16::MAX
            )));
        }
        if self.central.len() >= u16::MAX as usize {
            return Err(Error::ArchiveLimit(format!(
                "archive cannot hold more than {} entries",
                u16::MAX
            )));
        }

        let lfh_offset = to_u32(self.buf.len(), "archive size")?;
        let uncompressed_size = to_u32(data.len(), "entry size")?;

        let mut crc = Crc::new();
        crc.update(data);
        let crc32 = crc.sum();

        let (payload, compressed_size) = match method {
            CompressionMethod::Stored => (data.to_vec(), uncompressed_size),
            CompressionMethod::Deflate => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                let compressed = encoder.finish()?;
                let size = to_u32(compressed.len(), "compressed entry size")?;
                (compressed, size)
            }
        };

        LocalFileHeader {
            compression_method: method,
            crc32,
            compressed_size,
            uncompressed_size,
            file_name: name,
        }
        .write_to(&mut self.buf)?;
        self.buf.extend_from_slice(&payload);

        self.central.push(CentralDirectoryHeader {
            compression_method: method,
            crc32,
            compressed_size,
            uncompressed_size,
            lfh_offset,
            file_name: name.to_string(),
        });

        Ok(())
    }

    /// Seal the archive and return the finished buffer.
    ///
    /// Writes the Central Directory and the EOCD record after the entry
    /// data. The writer is consumed; the buffer holds the whole archive.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let cd_offset = to_u32(self.buf.len(), "archive size")?;

        for header in &self.central {
            header.write_to(&mut self.buf)?;
        }
        let cd_size = to_u32(self.buf.len() - cd_offset as usize, "central directory size")?;

        EndOfCentralDirectory {
            // Entry count is capped at u16::MAX in add_entry.
            total_entries: self.central.len() as u16,
            cd_size,
            cd_offset,
        }
        .write_to(&mut self.buf)?;

        Ok(self.buf)
    }
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::ArchiveLimit(format!("{what} exceeds the 4 GiB limit")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_archive_is_bare_eocd() {
        let buf = ZipWriter::new().finish().unwrap();
        assert_eq!(buf.len(), 22);
        assert_eq!(&buf[0..4], b"PK\x05\x06");
        // Zero entries, zero-size central directory at offset zero.
        assert!(buf[4..20].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_first_entry_starts_at_offset_zero() {
        let mut writer = ZipWriter::new();
        writer
            .add_entry("mimetype", b"application/epub+zip", CompressionMethod::Stored)
            .unwrap();
        let buf = writer.finish().unwrap();

        assert_eq!(&buf[0..4], b"PK\x03\x04");
        assert_eq!(&buf[30..38], b"mimetype");
        // Stored data follows the header and name verbatim.
        assert_eq!(&buf[38..58], b"application/epub+zip");
    }

    #[test]
    fn test_deflate_payload_round_trips() {
        use std::io::Read;

        let data = b"hello hello hello hello";
        let mut writer = ZipWriter::new();
        writer
            .add_entry("a.txt", data, CompressionMethod::Deflate)
            .unwrap();
        let buf = writer.finish().unwrap();

        // Raw deflate payload sits after the 30-byte header and 5-byte name.
        let compressed_size = u32::from_le_bytes([buf[18], buf[19], buf[20], buf[21]]) as usize;
        let payload = &buf[35..35 + compressed_size];

        let mut decoder = flate2::read::DeflateDecoder::new(payload);
        let mut restored = Vec::new();
        decoder.read_to_end(&mut restored).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn test_central_directory_counts_entries() {
        let mut writer = ZipWriter::new();
        writer
            .add_entry("a", b"1", CompressionMethod::Stored)
            .unwrap();
        writer
            .add_entry("b", b"2", CompressionMethod::Stored)
            .unwrap();
        let buf = writer.finish().unwrap();

        let eocd = &buf[buf.len() - 22..];
        assert_eq!(&eocd[0..4], b"PK\x05\x06");
        assert_eq!(&eocd[10..12], &2u16.to_le_bytes());
    }

    #[test]
    fn test_oversized_name_is_rejected() {
        let name = "a".repeat(u16::MAX as usize + 1);
        let mut writer = ZipWriter::new();
        let err = writer
            .add_entry(&name, b"", CompressionMethod::Stored)
            .unwrap_err();
        assert!(matches!(err, Error::ArchiveLimit(_)));
    }

    #[test]
    fn test_identical_input_identical_output() {
        let build = || {
            let mut writer = ZipWriter::new();
            writer
                .add_entry("mimetype", b"application/epub+zip", CompressionMethod::Stored)
                .unwrap();
            writer
                .add_entry("doc.xhtml", b"<html/>", CompressionMethod::Deflate)
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
