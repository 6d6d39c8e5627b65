use image::GrayImage;

use crate::display_constants::{
    BMP_FILE_BYTES, BMP_HEADER_BYTES, PIXEL_HEIGHT, PIXEL_WIDTH, ROW_STRIDE,
};
use crate::error::ConvertError;

/// A complete 1bpp BMP byte stream at the display's native resolution,
/// ready to hand to a panel driver or persist in a frame store. Immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    bytes: Vec<u8>,
}

impl EncodedFrame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialize a black/white frame as a self-contained 1bpp BMP.
///
/// Bit set means white (palette index 1); any sample >= 128 counts as
/// white so the encoder also accepts plain thresholded buffers. Rows are
/// packed MSB-first, padded to a 4-byte boundary, and stored bottom-up as
/// the format requires. All integer fields are little-endian, so the
/// output for a given buffer is byte-for-byte reproducible.
pub fn encode(img: &GrayImage) -> Result<EncodedFrame, ConvertError> {
    let (width, height) = img.dimensions();
    if width != PIXEL_WIDTH || height != PIXEL_HEIGHT {
        return Err(ConvertError::DimensionMismatch { width, height });
    }

    let image_bytes = ROW_STRIDE * height as usize;
    let mut bytes = Vec::with_capacity(BMP_FILE_BYTES);

    // BITMAPFILEHEADER
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(BMP_FILE_BYTES as u32).to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&(BMP_HEADER_BYTES as u32).to_le_bytes());

    // BITMAPINFOHEADER
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&(image_bytes as u32).to_le_bytes());
    bytes.extend_from_slice(&3780i32.to_le_bytes() /* 96 dpi */);
    bytes.extend_from_slice(&3780i32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    // color table: index 0 black, index 1 white, stored as BGRA
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0x00]);

    // pixel rows, bottom-up
    for y in (0..height).rev() {
        let mut row = [0u8; ROW_STRIDE];
        for x in 0..width {
            if img.get_pixel(x, y).0[0] >= 128 {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
        bytes.extend_from_slice(&row);
    }

    Ok(EncodedFrame { bytes })
}
