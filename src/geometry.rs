use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::display_constants::{ASPECT_RATIO, PIXEL_HEIGHT, PIXEL_WIDTH};
use crate::error::ConvertError;

/// A crop rectangle inside a source image, aspect-matched to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Largest centered rectangle of the display's aspect ratio that fits in
/// `width` x `height`. Centering uses floor division on both axes so the
/// discarded margins never differ by more than one pixel.
pub fn center_crop_box(width: u32, height: u32) -> CropBox {
    let src_ratio = width as f64 / height as f64;
    let (new_w, new_h) = if src_ratio > ASPECT_RATIO {
        // too wide: keep full height
        ((ASPECT_RATIO * height as f64).round() as u32, height)
    } else {
        // too tall: keep full width
        (width, (width as f64 / ASPECT_RATIO).round() as u32)
    };
    let left = (width - new_w) / 2;
    let top = (height - new_h) / 2;
    CropBox {
        left,
        top,
        right: left + new_w,
        bottom: top + new_h,
    }
}

/// Center-crop to the display aspect ratio and resample to exactly
/// 800x480.
pub fn normalize(img: &GrayImage) -> Result<GrayImage, ConvertError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidImage { width, height });
    }
    let crop = center_crop_box(width, height);
    let cropped = imageops::crop_imm(img, crop.left, crop.top, crop.width(), crop.height()).to_image();
    Ok(imageops::resize(
        &cropped,
        PIXEL_WIDTH,
        PIXEL_HEIGHT,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_box_too_wide_keeps_full_height() {
        let b = center_crop_box(1600, 480);
        assert_eq!(b.height(), 480);
        assert_eq!(b.width(), 800);
        assert_eq!((b.left, b.top, b.right, b.bottom), (400, 0, 1200, 480));
    }

    #[test]
    fn crop_box_too_tall_keeps_full_width() {
        let b = center_crop_box(800, 960);
        assert_eq!(b.width(), 800);
        assert_eq!(b.height(), 480);
        assert_eq!((b.left, b.top, b.right, b.bottom), (0, 240, 800, 720));
    }

    #[test]
    fn crop_box_matching_ratio_is_full_frame() {
        let b = center_crop_box(800, 480);
        assert_eq!((b.left, b.top, b.right, b.bottom), (0, 0, 800, 480));
    }

    #[test]
    fn crop_box_stays_inside_source() {
        for (w, h) in [(1u32, 1u32), (3, 1), (1, 3), (799, 481), (801, 479), (4000, 3000)] {
            let b = center_crop_box(w, h);
            assert!(b.right <= w, "{}x{}: right {} > width", w, h, b.right);
            assert!(b.bottom <= h, "{}x{}: bottom {} > height", w, h, b.bottom);
            assert!(b.width() >= 1 && b.height() >= 1, "{}x{}: empty box", w, h);
        }
    }

    #[test]
    fn normalize_always_yields_display_dimensions() {
        for (w, h) in [(1600u32, 480u32), (800, 960), (123, 457), (800, 480), (31, 17)] {
            let img = GrayImage::from_pixel(w, h, image::Luma([90]));
            let out = normalize(&img).unwrap();
            assert_eq!(out.dimensions(), (PIXEL_WIDTH, PIXEL_HEIGHT));
        }
    }

    #[test]
    fn normalize_preserves_value_range() {
        let img = GrayImage::from_fn(640, 640, |x, y| image::Luma([((x + y) % 256) as u8]));
        let out = normalize(&img).unwrap();
        // Luma samples are u8 by construction; check the tone survived roughly.
        let mean: f64 =
            out.pixels().map(|p| p.0[0] as f64).sum::<f64>() / (800.0 * 480.0);
        assert!(mean > 50.0 && mean < 200.0, "mean {mean} out of range");
    }

    #[test]
    fn normalize_rejects_zero_area() {
        let img = GrayImage::new(0, 5);
        assert!(matches!(
            normalize(&img),
            Err(ConvertError::InvalidImage { width: 0, height: 5 })
        ));
    }
}
