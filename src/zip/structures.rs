use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::error::Result;

/// ZIP compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflate,
}

impl CompressionMethod {
    pub fn as_u16(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 0,
            CompressionMethod::Deflate => 8,
        }
    }

    /// Minimum zip version needed to extract an entry using this method.
    pub fn version_needed(&self) -> u16 {
        match self {
            CompressionMethod::Stored => 10,
            CompressionMethod::Deflate => 20,
        }
    }
}

/// General-purpose flag marking entry names as UTF-8 (APPNOTE bit 11).
pub const FLAG_UTF8: u16 = 0x0800;

/// Version-made-by written to central directory headers (MS-DOS, 2.0).
pub const VERSION_MADE_BY: u16 = 20;

/// Fixed DOS timestamp applied to every entry: 1980-01-01 00:00:00.
///
/// Wall-clock stamps would make two runs over the same tree produce
/// different archives.
pub const DOS_EPOCH_DATE: u16 = 0x0021;
pub const DOS_EPOCH_TIME: u16 = 0x0000;

/// Local File Header (LFH) - 30 bytes plus the entry name
pub struct LocalFileHeader<'a> {
    pub compression_method: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: &'a str,
}

impl LocalFileHeader<'_> {
    pub const SIGNATURE: &'static [u8] = b"PK\x03\x04";
    pub const SIZE: usize = 30;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(self.compression_method.version_needed())?;
        out.write_u16::<LittleEndian>(FLAG_UTF8)?;
        out.write_u16::<LittleEndian>(self.compression_method.as_u16())?;
        out.write_u16::<LittleEndian>(DOS_EPOCH_TIME)?;
        out.write_u16::<LittleEndian>(DOS_EPOCH_DATE)?;
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.compressed_size)?;
        out.write_u32::<LittleEndian>(self.uncompressed_size)?;
        out.write_u16::<LittleEndian>(self.file_name.len() as u16)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_all(self.file_name.as_bytes())?;
        Ok(())
    }
}

/// Central Directory File Header (CDFH) - 46 bytes plus the entry name
pub struct CentralDirectoryHeader {
    pub compression_method: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub lfh_offset: u32,
    pub file_name: String,
}

impl CentralDirectoryHeader {
    pub const SIGNATURE: &'static [u8] = b"PK\x01\x02";
    pub const SIZE: usize = 46;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(VERSION_MADE_BY)?;
        out.write_u16::<LittleEndian>(self.compression_method.version_needed())?;
        out.write_u16::<LittleEndian>(FLAG_UTF8)?;
        out.write_u16::<LittleEndian>(self.compression_method.as_u16())?;
        out.write_u16::<LittleEndian>(DOS_EPOCH_TIME)?;
        out.write_u16::<LittleEndian>(DOS_EPOCH_DATE)?;
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.compressed_size)?;
        out.write_u32::<LittleEndian>(self.uncompressed_size)?;
        out.write_u16::<LittleEndian>(self.file_name.len() as u16)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_u16::<LittleEndian>(0)?; // file comment length
        out.write_u16::<LittleEndian>(0)?; // disk number start
        out.write_u16::<LittleEndian>(0)?; // internal attributes
        out.write_u32::<LittleEndian>(0)?; // external attributes
        out.write_u32::<LittleEndian>(self.lfh_offset)?;
        out.write_all(self.file_name.as_bytes())?;
        Ok(())
    }
}

/// End of Central Directory (EOCD) - 22 bytes
pub struct EndOfCentralDirectory {
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(0)?; // disk number
        out.write_u16::<LittleEndian>(0)?; // disk with central directory
        out.write_u16::<LittleEndian>(self.total_entries)?; // entries on this disk
        out.write_u16::<LittleEndian>(self.total_entries)?;
        out.write_u32::<LittleEndian>(self.cd_size)?;
        out.write_u32::<LittleEndian>(self.cd_offset)?;
        out.write_u16::<LittleEndian>(0)?; // comment length
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_method_codes() {
        assert_eq!(CompressionMethod::Stored.as_u16(), 0);
        assert_eq!(CompressionMethod::Deflate.as_u16(), 8);
        assert_eq!(CompressionMethod::Stored.version_needed(), 10);
        assert_eq!(CompressionMethod::Deflate.version_needed(), 20);
    }

    #[test]
    fn test_dos_epoch_decodes_to_1980() {
        let day = DOS_EPOCH_DATE & 0x1F;
        let month = (DOS_EPOCH_DATE >> 5) & 0x0F;
        let year = ((DOS_EPOCH_DATE >> 9) & 0x7F) + 1980;
        assert_eq!((year, month, day), (1980, 1, 1));
        assert_eq!(DOS_EPOCH_TIME, 0);
    }

    #[test]
    fn test_local_header_layout() {
        let header = LocalFileHeader {
            compression_method: CompressionMethod::Stored,
            crc32: 0x1234_5678,
            compressed_size: 20,
            uncompressed_size: 20,
            file_name: "mimetype",
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), LocalFileHeader::SIZE + 8);
        assert_eq!(&buf[0..4], LocalFileHeader::SIGNATURE);
        // Name length field sits at offset 26.
        assert_eq!(&buf[26..28], &8u16.to_le_bytes());
        assert_eq!(&buf[30..38], b"mimetype");
    }

    #[test]
    fn test_central_header_layout() {
        let header = CentralDirectoryHeader {
            compression_method: CompressionMethod::Deflate,
            crc32: 0,
            compressed_size: 5,
            uncompressed_size: 10,
            lfh_offset: 58,
            file_name: "META-INF/container.xml".to_string(),
        };

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), CentralDirectoryHeader::SIZE + 22);
        assert_eq!(&buf[0..4], CentralDirectoryHeader::SIGNATURE);
        // LFH offset field sits at offset 42.
        assert_eq!(&buf[42..46], &58u32.to_le_bytes());
        assert_eq!(&buf[46..], b"META-INF/container.xml");
    }

    #[test]
    fn test_eocd_layout() {
        let eocd = EndOfCentralDirectory {
            total_entries: 3,
            cd_size: 150,
            cd_offset: 1024,
        };

        let mut buf = Vec::new();
        eocd.write_to(&mut buf).unwrap();

        assert_eq!(buf.len(), EndOfCentralDirectory::SIZE);
        assert_eq!(&buf[0..4], EndOfCentralDirectory::SIGNATURE);
        assert_eq!(&buf[8..10], &3u16.to_le_bytes());
        assert_eq!(&buf[10..12], &3u16.to_le_bytes());
        assert_eq!(&buf[12..16], &150u32.to_le_bytes());
        assert_eq!(&buf[16..20], &1024u32.to_le_bytes());
    }
}
