mod bmp;
mod display;
mod display_constants;
mod dither;
mod error;
mod geometry;

pub use crate::bmp::{encode, EncodedFrame};
pub use crate::display::DisplayDevice;
pub use crate::display_constants::{ASPECT_RATIO, BMP_FILE_BYTES, PIXEL_HEIGHT, PIXEL_WIDTH};
pub use crate::dither::{dither, JJN_DIVISOR, JJN_KERNEL};
pub use crate::error::ConvertError;
pub use crate::geometry::{center_crop_box, normalize, CropBox};

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::info;

/// Convert a decoded image to an encoded 1bpp frame: grayscale, center
/// crop, resample to the display resolution, JJN dither, BMP-encode.
pub fn convert_frame(img: &DynamicImage) -> Result<EncodedFrame, ConvertError> {
    let gray = img.to_luma8();
    let normalized = normalize(&gray)?;
    let dithered = dither(normalized)?;
    encode(&dithered)
}

/// File-to-file conversion. Honors EXIF orientation before cropping.
/// Optionally writes the dithered grayscale frame next to the packed
/// output for visual inspection.
pub fn convert(
    file: &Path,
    out_file: &Path,
    dithered_file: Option<&Path>,
) -> Result<(), ConvertError> {
    let mut decoder = ImageReader::open(file)?.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    info!("Opened image {}", file.display());

    let gray = img.to_luma8();
    info!("To 8 bit grayscale");
    let normalized = normalize(&gray)?;
    info!("Cropped and resized");
    let dithered = dither(normalized)?;
    info!("Dithered");
    if let Some(dither_path) = dithered_file {
        dithered.save(dither_path)?;
        info!("Saved dithered image");
    }

    let frame = encode(&dithered)?;
    info!("Image packed to 1 bit format");

    fs::write(out_file, frame.as_bytes())?;
    info!("Image written. Done");
    Ok(())
}
