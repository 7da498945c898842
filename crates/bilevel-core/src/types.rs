// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core value types: colors, histograms, bounding boxes and binary pixel maps.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Canonical color name.
    ///
    /// `"black"` and `"white"` for the opaque extremes, `"none"` for anything
    /// fully transparent, `#RRGGBB` for other opaque colors and `#RRGGBBAA`
    /// for the rest.
    pub fn name(&self) -> String {
        match (self.r, self.g, self.b, self.a) {
            (_, _, _, 0) => "none".to_string(),
            (0, 0, 0, 255) => "black".to_string(),
            (255, 255, 255, 255) => "white".to_string(),
            (r, g, b, 255) => format!("#{r:02X}{g:02X}{b:02X}"),
            (r, g, b, a) => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
        }
    }

    /// True for opaque pure black, the only color counted as ink.
    pub fn is_black(&self) -> bool {
        *self == Color::BLACK
    }

    /// True for white (any non-zero alpha) and for fully transparent pixels.
    pub fn is_background(&self) -> bool {
        self.a == 0 || (self.r == 255 && self.g == 255 && self.b == 255)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Pixel counts per distinct color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: HashMap<Color, u64>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more pixel of `color`.
    pub fn record(&mut self, color: Color) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    /// Pixel count for an exact color.
    pub fn count(&self, color: Color) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Summed pixel count of every color whose canonical name is `name`.
    pub fn count_named(&self, name: &str) -> u64 {
        self.counts
            .iter()
            .filter(|(color, _)| color.name() == name)
            .map(|(_, count)| *count)
            .sum()
    }

    pub fn contains_named(&self, name: &str) -> bool {
        self.counts.keys().any(|color| color.name() == name)
    }

    pub fn has_black(&self) -> bool {
        self.contains_named("black")
    }

    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    pub fn total_pixels(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, u64)> + '_ {
        self.counts.iter().map(|(color, count)| (*color, *count))
    }
}

impl FromIterator<Color> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for color in iter {
            histogram.record(color);
        }
        histogram
    }
}

/// Axis-aligned rectangle; `width` and `height` are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Returns `None` for a zero width or height.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Smallest box covering both inclusive corners.
    pub fn from_corners(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        let (x0, x1) = (min_x.min(max_x), min_x.max(max_x));
        let (y0, y1) = (min_y.min(max_y), min_y.max(max_y));
        Self {
            x: x0,
            y: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Per-pixel black/white bits for a full `width` x `height` grid.
///
/// `1` is black, `0` is white. Stored row-major; every `(x, y)` inside the
/// grid has exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPixelMap {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BinaryPixelMap {
    /// Build a map by asking `is_black` for every position.
    pub fn from_fn(width: u32, height: u32, mut is_black: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(u8::from(is_black(x, y)));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of entries, always `width * height`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bits
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn black_count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == 1).count()
    }

    /// Iterate `((x, y), bit)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), u8)> + '_ {
        let width = self.width.max(1);
        self.bits
            .iter()
            .enumerate()
            .map(move |(i, &bit)| (((i as u32) % width, (i as u32) / width), bit))
    }

    /// Bytes per packed row.
    pub fn row_stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Pack rows MSB-first, eight pixels per byte, black as a set bit.
    ///
    /// Each row starts on a byte boundary; trailing bits of the last byte in
    /// a row are zero.
    pub fn to_packed_rows(&self) -> Vec<u8> {
        let stride = self.row_stride();
        let mut packed = vec![0u8; stride * self.height as usize];
        for ((x, y), bit) in self.iter() {
            if bit == 1 {
                let idx = y as usize * stride + x as usize / 8;
                packed[idx] |= 0x80 >> (x % 8);
            }
        }
        packed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(Color::BLACK.name(), "black");
        assert_eq!(Color::WHITE.name(), "white");
        assert_eq!(Color::rgba(0, 0, 0, 0).name(), "none");
        assert_eq!(Color::rgb(255, 0, 128).name(), "#FF0080");
        assert_eq!(Color::rgba(0, 0, 0, 128).name(), "#00000080");
    }

    #[test]
    fn only_opaque_black_is_black() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::rgb(1, 0, 0).is_black());
        assert!(!Color::rgba(0, 0, 0, 254).is_black());
    }

    #[test]
    fn background_is_white_or_transparent() {
        assert!(Color::WHITE.is_background());
        assert!(Color::rgba(255, 255, 255, 40).is_background());
        assert!(Color::rgba(12, 34, 56, 0).is_background());
        assert!(!Color::rgb(254, 255, 255).is_background());
        assert!(!Color::BLACK.is_background());
    }

    #[test]
    fn histogram_counts_and_names() {
        let histogram: ColorHistogram = [
            Color::WHITE,
            Color::WHITE,
            Color::BLACK,
            Color::rgb(10, 20, 30),
        ]
        .into_iter()
        .collect();

        assert_eq!(histogram.distinct_colors(), 3);
        assert_eq!(histogram.total_pixels(), 4);
        assert_eq!(histogram.count(Color::WHITE), 2);
        assert_eq!(histogram.count_named("black"), 1);
        assert!(histogram.has_black());
        assert!(!histogram.contains_named("none"));
    }

    #[test]
    fn histogram_without_black() {
        let histogram: ColorHistogram = std::iter::repeat_n(Color::WHITE, 9).collect();
        assert!(!histogram.has_black());
        assert_eq!(histogram.count_named("black"), 0);
    }

    #[test]
    fn bounding_box_rejects_empty_extent() {
        assert!(BoundingBox::new(0, 0, 0, 5).is_none());
        assert!(BoundingBox::new(3, 3, 5, 0).is_none());
        let bbox = BoundingBox::new(1, 2, 3, 4).unwrap();
        assert_eq!(bbox.right(), 4);
        assert_eq!(bbox.bottom(), 6);
        assert_eq!(bbox.area(), 12);
    }

    #[test]
    fn bounding_box_from_corners_is_inclusive() {
        let bbox = BoundingBox::from_corners(1, 1, 1, 1);
        assert_eq!(bbox, BoundingBox::new(1, 1, 1, 1).unwrap());
        let bbox = BoundingBox::from_corners(5, 7, 2, 3);
        assert_eq!(bbox, BoundingBox::new(2, 3, 4, 5).unwrap());
        assert!(bbox.contains(2, 3));
        assert!(bbox.contains(5, 7));
        assert!(!bbox.contains(6, 7));
    }

    #[test]
    fn pixel_map_covers_grid() {
        let map = BinaryPixelMap::from_fn(3, 2, |x, y| x == y);
        assert_eq!(map.len(), 6);
        assert_eq!(map.black_count(), 2);
        assert_eq!(map.get(0, 0), Some(1));
        assert_eq!(map.get(1, 1), Some(1));
        assert_eq!(map.get(2, 1), Some(0));
        assert_eq!(map.get(3, 0), None);

        let keys: Vec<(u32, u32)> = map.iter().map(|(pos, _)| pos).collect();
        assert_eq!(keys, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn packed_rows_are_msb_first_and_padded() {
        // 10 pixels wide: two bytes per row.
        let map = BinaryPixelMap::from_fn(10, 2, |x, y| (y == 0 && x == 0) || (y == 1 && x == 9));
        assert_eq!(map.row_stride(), 2);
        assert_eq!(map.to_packed_rows(), vec![0b1000_0000, 0, 0, 0b0100_0000]);
    }
}
