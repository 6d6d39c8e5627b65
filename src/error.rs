use std::io;
use thiserror::Error;

use crate::display_constants::{PIXEL_HEIGHT, PIXEL_WIDTH};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source image has zero area ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },
    #[error(
        "buffer is {width}x{height}, display expects {target_w}x{target_h}",
        target_w = PIXEL_WIDTH,
        target_h = PIXEL_HEIGHT
    )]
    DimensionMismatch { width: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
