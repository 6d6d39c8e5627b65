use image::GrayImage;

use crate::display_constants::{PIXEL_HEIGHT, PIXEL_WIDTH};
use crate::error::ConvertError;

/// Jarvis-Judice-Ninke diffusion taps as `(dx, dy, weight)`, weights in
/// 48ths. `dy` is always forward (0..=2) and taps on the current row are
/// strictly to the right, so every tap lands on a pixel the raster scan has
/// not visited yet.
pub const JJN_KERNEL: [(i32, i32, f32); 12] = [
    (1, 0, 7.0),
    (2, 0, 5.0),
    (-2, 1, 3.0),
    (-1, 1, 5.0),
    (0, 1, 7.0),
    (1, 1, 5.0),
    (2, 1, 3.0),
    (-2, 2, 1.0),
    (-1, 2, 3.0),
    (0, 2, 5.0),
    (1, 2, 3.0),
    (2, 2, 1.0),
];

pub const JJN_DIVISOR: f32 = 48.0;

/// Threshold a grayscale frame to pure black/white with JJN error
/// diffusion. Consumes the buffer; accumulation happens in place over a
/// single f32 working copy that this call owns exclusively.
///
/// The input must already be sized to the display; this never resizes.
pub fn dither(img: GrayImage) -> Result<GrayImage, ConvertError> {
    let (width, height) = img.dimensions();
    if width != PIXEL_WIDTH || height != PIXEL_HEIGHT {
        return Err(ConvertError::DimensionMismatch { width, height });
    }
    let w = width as usize;
    let h = height as usize;
    let mut acc: Vec<f32> = img.into_raw().into_iter().map(f32::from).collect();

    for y in 0..h {
        for x in 0..w {
            let old = acc[y * w + x].clamp(0.0, 255.0);
            let new = if old >= 128.0 { 255.0 } else { 0.0 };
            let error = old - new;
            acc[y * w + x] = new;
            if error == 0.0 {
                continue;
            }
            for (dx, dy, weight) in JJN_KERNEL {
                let nx = x as isize + dx as isize;
                let ny = y + dy as usize;
                if nx < 0 || nx >= w as isize || ny >= h {
                    // error is clipped at the frame borders, not redistributed
                    continue;
                }
                acc[ny * w + nx as usize] += error * weight / JJN_DIVISOR;
            }
        }
    }

    let data: Vec<u8> = acc.into_iter().map(|v| v as u8).collect();
    Ok(GrayImage::from_raw(width, height, data).expect("buffer length matches dimensions"))
}
