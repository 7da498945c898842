// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster primitives over `image::DynamicImage`: pixel traversal, color
// histograms, content bounding boxes, geometry (crop, canvas extension,
// resize) and grayscale quantization / ordered dithering.

pub mod dither;
pub mod geometry;

use bilevel_core::{BinaryPixelMap, BoundingBox, Color, ColorHistogram};
use image::{DynamicImage, GenericImageView, GrayImage, Luma};

pub use dither::{ordered_dither, quantize_gray};
pub use geometry::{crop, extend_canvas, resize_to_fit};

/// Lazily walk every pixel as `(x, y, color)`, row by row.
///
/// Borrows the image, so the traversal can be restarted by calling again.
pub fn pixels(image: &DynamicImage) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
    image
        .pixels()
        .map(|(x, y, pixel)| (x, y, Color::from(pixel.0)))
}

/// Color of a single pixel. Panics if `(x, y)` lies outside the image.
pub fn color_at(image: &DynamicImage, x: u32, y: u32) -> Color {
    Color::from(image.get_pixel(x, y).0)
}

/// Count pixels per distinct color.
pub fn color_histogram(image: &DynamicImage) -> ColorHistogram {
    pixels(image).map(|(_, _, color)| color).collect()
}

/// What a single pass over the pixels found: the box around every
/// non-background pixel and whether any of them is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentScan {
    /// `None` when the whole image is background.
    pub bounding_box: Option<BoundingBox>,
    pub has_black: bool,
}

/// Scan the image once, collecting the content bounding box and the
/// presence of black pixels together.
pub fn scan_content(image: &DynamicImage) -> ContentScan {
    let mut corners: Option<(u32, u32, u32, u32)> = None;
    let mut has_black = false;

    for (x, y, color) in pixels(image) {
        if color.is_background() {
            continue;
        }
        has_black |= color.is_black();
        corners = Some(match corners {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    ContentScan {
        bounding_box: corners.map(|(min_x, min_y, max_x, max_y)| {
            BoundingBox::from_corners(min_x, min_y, max_x, max_y)
        }),
        has_black,
    }
}

/// Smallest rectangle enclosing every non-background pixel.
///
/// Returns `None` when the whole image is background.
pub fn bounding_box(image: &DynamicImage) -> Option<BoundingBox> {
    scan_content(image).bounding_box
}

/// Render a binary map as a `Luma8` image: black (0) for set bits, white (255)
/// otherwise.
pub fn render_binary_map(map: &BinaryPixelMap) -> GrayImage {
    GrayImage::from_fn(map.width(), map.height(), |x, y| {
        if map.get(x, y) == Some(1) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}
