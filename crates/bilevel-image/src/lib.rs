// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bilevel-image: Turns decoded raster images into clean black/white images
// for fax, archival and thermal print consumers.
//
// Provides the `BinaryImageProcessor` (binarization, whitespace cropping,
// canvas extension, size fitting, binary pixel maps) and the `raster`
// primitives it is built on.

pub mod processor;
pub mod raster;

// Re-export the primary types so callers can use `bilevel_image::BinaryImageProcessor` etc.
pub use bilevel_core::{
    BilevelError, BinarizeOptions, BinaryPixelMap, BoundingBox, Color, ColorHistogram,
    Result, ThresholdMap,
};
pub use processor::BinaryImageProcessor;
