// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometry primitives: crop, canvas extension and resize-to-fit.

use bilevel_core::{BoundingBox, Color};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, Pixel, Rgba};

/// Resampling filter used when shrinking images to fit.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Copy the region covered by `bbox`. The box is clamped to the image bounds.
pub fn crop(image: &DynamicImage, bbox: &BoundingBox) -> DynamicImage {
    image.crop_imm(bbox.x, bbox.y, bbox.width, bbox.height)
}

/// Place `image` on a `width` x `height` canvas filled with `background`,
/// with its top-left corner at `(x, y)`.
///
/// Offsets may be negative or push the content past the canvas edge; the
/// part that falls outside is dropped. The canvas keeps the source color
/// type and sample depth, with `background` scaled to that depth.
pub fn extend_canvas(
    image: &DynamicImage,
    width: u32,
    height: u32,
    x: i64,
    y: i64,
    background: Color,
) -> DynamicImage {
    let channels = <[u8; 4]>::from(background);
    let fill8 = Rgba(channels);
    let fill16 = Rgba(channels.map(|c| u16::from(c) * 257));
    let fill32 = Rgba(channels.map(|c| f32::from(c) / 255.0));

    match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(paste(buf, width, height, x, y, fill8.to_luma()))
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(paste(buf, width, height, x, y, fill8.to_luma_alpha()))
        }
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(paste(buf, width, height, x, y, fill8.to_rgb()))
        }
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(paste(buf, width, height, x, y, fill8))
        }
        DynamicImage::ImageLuma16(buf) => {
            DynamicImage::ImageLuma16(paste(buf, width, height, x, y, fill16.to_luma()))
        }
        DynamicImage::ImageLumaA16(buf) => {
            DynamicImage::ImageLumaA16(paste(buf, width, height, x, y, fill16.to_luma_alpha()))
        }
        DynamicImage::ImageRgb16(buf) => {
            DynamicImage::ImageRgb16(paste(buf, width, height, x, y, fill16.to_rgb()))
        }
        DynamicImage::ImageRgba16(buf) => {
            DynamicImage::ImageRgba16(paste(buf, width, height, x, y, fill16))
        }
        DynamicImage::ImageRgb32F(buf) => {
            DynamicImage::ImageRgb32F(paste(buf, width, height, x, y, fill32.to_rgb()))
        }
        DynamicImage::ImageRgba32F(buf) => {
            DynamicImage::ImageRgba32F(paste(buf, width, height, x, y, fill32))
        }
        other => {
            DynamicImage::ImageRgba8(paste(&other.to_rgba8(), width, height, x, y, fill8))
        }
    }
}

fn paste<P: Pixel>(
    top: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
    x: i64,
    y: i64,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut canvas = ImageBuffer::from_pixel(width, height, fill);
    imageops::replace(&mut canvas, top, x, y);
    canvas
}

/// Scale uniformly so the image fits inside `max_width` x `max_height`.
pub fn resize_to_fit(image: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    image.resize(max_width, max_height, RESIZE_FILTER)
}
