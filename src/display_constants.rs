pub const PIXEL_WIDTH: u32 = 800;
pub const PIXEL_HEIGHT: u32 = 480;

pub const ASPECT_RATIO: f64 = PIXEL_WIDTH as f64 / PIXEL_HEIGHT as f64;

pub const ROW_STRIDE: usize = (PIXEL_WIDTH as usize + 31) / 32 * 4 /* 1bpp rows are padded to a 4-byte boundary */;
pub const BMP_HEADER_BYTES: usize = 14 + 40 + 8 /* file header + info header + 2-entry color table */;
pub const BMP_FILE_BYTES: usize = BMP_HEADER_BYTES + ROW_STRIDE * PIXEL_HEIGHT as usize;
