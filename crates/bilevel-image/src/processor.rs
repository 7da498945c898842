// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binary image processor: black pixel detection, whitespace cropping,
// canvas extension, size fitting, binarization and binary pixel maps.
// Operates on in-memory images using the `image` crate through the
// `raster` primitives.

use std::borrow::Cow;

use bilevel_core::{
    BilevelError, BinarizeOptions, BinaryPixelMap, BoundingBox, Color, ColorHistogram, Result,
};
use image::DynamicImage;
use tracing::{debug, info, instrument, warn};

use crate::raster;

/// Binary image pipeline operating on a single in-memory image.
///
/// Every operation comes in two forms: a pure one taking `&self` that returns
/// a new processor, and a `_mut` one that replaces the wrapped image in place.
///
/// ```ignore
/// let mut page = BinaryImageProcessor::from_dynamic(decoded);
/// page.to_binary_mut(&BinarizeOptions::default());
/// page.crop_whitespace_mut()?;
/// page.fit_to_size_mut(1728, 2200);
/// let rows = page.extract_binary_map().to_packed_rows();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl BinaryImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Rebuild a black/white `Luma8` image from a binary pixel map.
    pub fn from_binary_map(map: &BinaryPixelMap) -> Self {
        Self {
            image: DynamicImage::ImageLuma8(raster::render_binary_map(map)),
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Queries --------------------------------------------------------------

    /// Pixel counts per distinct color of the current image.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn color_histogram(&self) -> ColorHistogram {
        let histogram = raster::color_histogram(&self.image);
        debug!(colors = histogram.distinct_colors(), "Histogram computed");
        histogram
    }

    /// Whether the image has at least one pixel whose color is black.
    pub fn has_black_pixel(&self) -> bool {
        self.color_histogram().has_black()
    }

    /// Smallest rectangle around all non-background (non-white) pixels, or
    /// `None` when there is no content at all.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        raster::bounding_box(&self.image)
    }

    /// Whether the image is wider than `max_width` or taller than `max_height`.
    pub fn is_oversize(&self, max_width: u32, max_height: u32) -> bool {
        self.width() > max_width || self.height() > max_height
    }

    /// Map every pixel to `1` (black) or `0` (anything else).
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn extract_binary_map(&self) -> BinaryPixelMap {
        let map = BinaryPixelMap::from_fn(self.width(), self.height(), |x, y| {
            raster::color_at(&self.image, x, y).is_black()
        });
        debug!(black = map.black_count(), "Binary map extracted");
        map
    }

    // -- Whitespace cropping --------------------------------------------------

    /// Crop the whitespace around the content.
    ///
    /// Fails with [`BilevelError::BlankImage`] when the image has no black
    /// pixel, since there is then no content to crop to.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn crop_whitespace(&self) -> Result<Self> {
        let scan = raster::scan_content(&self.image);
        let bbox = match scan.bounding_box {
            Some(bbox) if scan.has_black => bbox,
            _ => {
                warn!("Refusing to crop whitespace of a blank image");
                return Err(BilevelError::BlankImage);
            }
        };
        info!(
            x = bbox.x,
            y = bbox.y,
            width = bbox.width,
            height = bbox.height,
            "Cropping whitespace"
        );

        Ok(Self {
            image: raster::crop(&self.image, &bbox),
        })
    }

    /// In-place [`crop_whitespace`](Self::crop_whitespace). The image is left
    /// untouched on error.
    pub fn crop_whitespace_mut(&mut self) -> Result<()> {
        let cropped = self.crop_whitespace()?;
        self.image = cropped.image;
        Ok(())
    }

    // -- Canvas extension -----------------------------------------------------

    /// Extend (or shrink) the canvas to `width` x `height`, keeping the content
    /// at the top-left corner.
    pub fn extent(&self, width: u32, height: u32) -> Self {
        self.extent_at(width, height, 0, 0)
    }

    /// Extend the canvas to `width` x `height` with the content placed at
    /// `(x, y)`. New area is filled with white.
    #[instrument(skip(self))]
    pub fn extent_at(&self, width: u32, height: u32, x: i64, y: i64) -> Self {
        info!(
            from_w = self.width(),
            from_h = self.height(),
            "Extending canvas"
        );
        Self {
            image: raster::extend_canvas(&self.image, width, height, x, y, Color::WHITE),
        }
    }

    /// In-place [`extent`](Self::extent).
    pub fn extent_mut(&mut self, width: u32, height: u32) {
        self.extent_at_mut(width, height, 0, 0);
    }

    /// In-place [`extent_at`](Self::extent_at).
    pub fn extent_at_mut(&mut self, width: u32, height: u32, x: i64, y: i64) {
        *self = self.extent_at(width, height, x, y);
    }

    // -- Size fitting ---------------------------------------------------------

    /// Shrink the image to fit within `max_width` x `max_height`, preserving
    /// aspect ratio.
    ///
    /// An image that already fits is returned as-is (`Cow::Borrowed`); it is
    /// never enlarged.
    #[instrument(skip(self))]
    pub fn fit_to_size(&self, max_width: u32, max_height: u32) -> Cow<'_, Self> {
        if !self.is_oversize(max_width, max_height) {
            debug!("Image already fits");
            return Cow::Borrowed(self);
        }

        info!(
            from_w = self.width(),
            from_h = self.height(),
            max_width,
            max_height,
            "Resizing image to fit"
        );
        let resized = raster::resize_to_fit(&self.image, max_width, max_height);
        debug!(
            new_w = resized.width(),
            new_h = resized.height(),
            "Resize complete"
        );
        Cow::Owned(Self { image: resized })
    }

    /// In-place [`fit_to_size`](Self::fit_to_size).
    ///
    /// Does nothing when the image already fits and reports nothing either
    /// way; check [`is_oversize`](Self::is_oversize) first to tell the cases
    /// apart.
    pub fn fit_to_size_mut(&mut self, max_width: u32, max_height: u32) {
        if self.is_oversize(max_width, max_height) {
            *self = self.fit_to_size(max_width, max_height).into_owned();
        }
    }

    // -- Binarization ---------------------------------------------------------

    /// Convert the image to pure black and white.
    ///
    /// First quantizes to `options.gray_levels()` gray levels without
    /// dithering, then applies the ordered dither named by
    /// `options.threshold_map()`. The result is a `Luma8` image holding only
    /// 0 and 255.
    #[instrument(skip(self, options), fields(
        threshold_map = %options.threshold_map(),
        gray_levels = options.gray_levels()
    ))]
    pub fn to_binary(&self, options: &BinarizeOptions) -> Self {
        info!(
            width = self.width(),
            height = self.height(),
            "Converting to binary"
        );
        let gray = raster::quantize_gray(&self.image, options.gray_levels());
        let binary = raster::ordered_dither(&gray, options.threshold_map());
        Self {
            image: DynamicImage::ImageLuma8(binary),
        }
    }

    /// In-place [`to_binary`](Self::to_binary).
    pub fn to_binary_mut(&mut self, options: &BinarizeOptions) {
        *self = self.to_binary(options);
    }
}

impl From<DynamicImage> for BinaryImageProcessor {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}

// -- Tests --------------------------------------------------------------------
