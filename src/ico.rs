//! Reading and writing the ICO container format.
//!
//! An ICO file is a 6-byte header (reserved, type, image count), a table of
//! 16-byte directory entries, and the image payloads the entries point at.
//! All multi-byte fields are little-endian. Payloads are opaque blobs; the
//! container does not say whether they are legacy bitmaps or PNG streams.

pub const HEADER_LEN: usize = 6;
pub const ENTRY_LEN: usize = 16;

/// A directory entry as parsed from an existing file. A stored width byte of
/// 0 means 256; `width` always holds the logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry {
    pub width: u32,
    pub planes: u16,
    pub bit_count: u16,
    pub size: u32,
    pub offset: u32,
}

/// One square image of an icon about to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub planes: u16,
    pub bit_count: u16,
    pub data: Vec<u8>,
}

pub fn parse_directory(bytes: &[u8]) -> eyre::Result<Vec<DirEntry>> {
    let header = slice(bytes, 0, HEADER_LEN)?;
    let count = u16::from_le_bytes([header[4], header[5]]) as usize;
    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let record = slice(bytes, HEADER_LEN + index * ENTRY_LEN, ENTRY_LEN)?;
        let width = match record[0] {
            0 => 256,
            w => u32::from(w),
        };
        entries.push(DirEntry {
            width,
            planes: u16::from_le_bytes([record[4], record[5]]),
            bit_count: u16::from_le_bytes([record[6], record[7]]),
            size: u32::from_le_bytes([record[8], record[9], record[10], record[11]]),
            offset: u32::from_le_bytes([record[12], record[13], record[14], record[15]]),
        });
    }
    Ok(entries)
}

/// The payload bytes an entry points at within the source file.
pub fn payload<'a>(bytes: &'a [u8], entry: &DirEntry) -> eyre::Result<&'a [u8]> {
    slice(bytes, entry.offset as usize, entry.size as usize)
}

/// Serialize a new icon. Entry offsets are the running sum of prior payload
/// lengths, starting right after the directory; widths of 256 re-encode as a
/// 0 byte, and the width byte doubles as the height byte.
pub fn write_icon(images: &[Image]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&(images.len() as u16).to_le_bytes());

    let mut offset = (HEADER_LEN + ENTRY_LEN * images.len()) as u32;
    for image in images {
        let dim = if image.width < 256 { image.width as u8 } else { 0 };
        out.push(dim);
        out.push(dim);
        out.push(0);
        out.push(0);
        out.extend_from_slice(&image.planes.to_le_bytes());
        out.extend_from_slice(&image.bit_count.to_le_bytes());
        out.extend_from_slice(&(image.data.len() as u32).to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());
        offset += image.data.len() as u32;
    }
    for image in images {
        out.extend_from_slice(&image.data);
    }

    out
}

fn slice(bytes: &[u8], start: usize, len: usize) -> eyre::Result<&[u8]> {
    let end = start
        .checked_add(len)
        .ok_or_else(|| eyre::eyre!("icon data range overflows"))?;
    bytes
        .get(start..end)
        .ok_or_else(|| eyre::eyre!("icon data ends after {} bytes, needed {}", bytes.len(), end))
}
