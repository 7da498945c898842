// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale quantization and ordered dithering for converting images to
// black-and-white.

use bilevel_core::ThresholdMap;
use bilevel_core::config::{MAX_GRAY_LEVELS, MIN_GRAY_LEVELS};
use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

/// Reduce an image to `levels` evenly spaced gray values, without dithering.
///
/// Transparent pixels are flattened onto white first, so they never turn
/// into ink. Black (0) and white (255) are always kept as-is. `levels` is
/// clamped to 2..=256.
pub fn quantize_gray(image: &DynamicImage, levels: u32) -> GrayImage {
    let steps = levels.clamp(MIN_GRAY_LEVELS, MAX_GRAY_LEVELS) - 1;
    let gray_alpha = image.to_luma_alpha8();
    let (width, height) = gray_alpha.dimensions();
    debug!(width, height, levels = steps + 1, "Quantizing to gray levels");

    GrayImage::from_fn(width, height, |x, y| {
        let [luma, alpha] = gray_alpha.get_pixel(x, y).0;
        let flat = flatten_on_white(luma, alpha);
        Luma([quantize_value(flat, steps)])
    })
}

/// Snap a gray value to the nearest of `steps + 1` evenly spaced levels.
fn quantize_value(value: u8, steps: u32) -> u8 {
    let level = (u32::from(value) * steps + 127) / 255;
    ((level * 255 + steps / 2) / steps) as u8
}

/// Alpha-composite a gray value over opaque white.
fn flatten_on_white(luma: u8, alpha: u8) -> u8 {
    let (luma, alpha) = (u32::from(luma), u32::from(alpha));
    ((luma * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}

/// Collapse a grayscale image to pure black (0) and white (255) with the
/// given ordered-dither threshold map.
pub fn ordered_dither(gray: &GrayImage, map: ThresholdMap) -> GrayImage {
    let (width, height) = gray.dimensions();
    debug!(width, height, threshold_map = %map, "Applying ordered dither");

    GrayImage::from_fn(width, height, |x, y| {
        if map.is_white(gray.get_pixel(x, y).0[0], x, y) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}
