// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binarization settings: the named ordered-dither threshold maps and the
// options bundle passed to `to_binary`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BilevelError, Result};

/// Default number of gray levels used by the quantization stage.
pub const DEFAULT_GRAY_LEVELS: u32 = 50;

/// Smallest and largest accepted gray level counts (8-bit grayscale).
pub const MIN_GRAY_LEVELS: u32 = 2;
pub const MAX_GRAY_LEVELS: u32 = 256;

// Levels are stored as `u16` so the 16x16 halftone (levels up to 256) fits
// alongside the small matrices.

const THRESHOLD_1X1: [u16; 1] = [1];

const CHECKS_2X2: [u16; 4] = [
    1, 2, //
    2, 1,
];

const ORDERED_2X2: [u16; 4] = [
    1, 3, //
    4, 2,
];

const ORDERED_3X3: [u16; 9] = [
    3, 7, 4, //
    6, 1, 9, //
    2, 8, 5,
];

const ORDERED_4X4: [u16; 16] = [
    1, 9, 3, 11, //
    13, 5, 15, 7, //
    4, 12, 2, 10, //
    16, 8, 14, 6,
];

const ORDERED_8X8: [u16; 64] = [
    1, 49, 13, 61, 4, 52, 16, 64, //
    33, 17, 45, 29, 36, 20, 48, 32, //
    9, 57, 5, 53, 12, 60, 8, 56, //
    41, 25, 37, 21, 44, 28, 40, 24, //
    3, 51, 15, 63, 2, 50, 14, 62, //
    35, 19, 47, 31, 34, 18, 46, 30, //
    11, 59, 7, 55, 10, 58, 6, 54, //
    43, 27, 39, 23, 42, 26, 38, 22,
];

// Angled halftones hold two dots per tile, so every level appears twice.

const HALFTONE_ANGLED_4X4: [u16; 16] = [
    4, 2, 7, 5, //
    3, 1, 8, 6, //
    7, 5, 4, 2, //
    8, 6, 3, 1,
];

const HALFTONE_ANGLED_6X6: [u16; 36] = [
    14, 13, 10, 8, 2, 3, //
    16, 18, 12, 7, 1, 4, //
    15, 17, 11, 9, 6, 5, //
    8, 2, 3, 14, 13, 10, //
    7, 1, 4, 16, 18, 12, //
    9, 6, 5, 15, 17, 11,
];

const HALFTONE_ANGLED_8X8: [u16; 64] = [
    13, 7, 8, 14, 17, 21, 22, 18, //
    6, 1, 3, 9, 28, 31, 29, 23, //
    5, 2, 4, 10, 27, 32, 30, 24, //
    16, 12, 11, 15, 20, 26, 25, 19, //
    17, 21, 22, 18, 13, 7, 8, 14, //
    28, 31, 29, 23, 6, 1, 3, 9, //
    27, 32, 30, 24, 5, 2, 4, 10, //
    20, 26, 25, 19, 16, 12, 11, 15,
];

const HALFTONE_ORTHO_4X4: [u16; 16] = [
    7, 13, 11, 4, //
    12, 16, 14, 8, //
    10, 15, 6, 2, //
    5, 9, 3, 1,
];

const HALFTONE_ORTHO_6X6: [u16; 36] = [
    7, 17, 27, 14, 9, 4, //
    21, 29, 33, 31, 18, 11, //
    24, 32, 36, 34, 25, 22, //
    19, 30, 35, 28, 20, 10, //
    8, 15, 26, 16, 6, 2, //
    5, 13, 23, 12, 3, 1,
];

const HALFTONE_ORTHO_8X8: [u16; 64] = [
    7, 21, 33, 43, 36, 19, 9, 4, //
    16, 27, 51, 55, 49, 29, 14, 11, //
    31, 47, 57, 61, 59, 45, 35, 23, //
    41, 53, 60, 64, 62, 52, 40, 38, //
    37, 44, 58, 63, 56, 46, 30, 22, //
    15, 28, 48, 54, 50, 26, 17, 10, //
    8, 18, 34, 42, 32, 20, 6, 2, //
    5, 13, 25, 39, 24, 12, 3, 1,
];

// Dot grows from the tile center: cells ranked by distance from the center,
// farthest first, ties broken row-major.
const HALFTONE_ORTHO_16X16: [u16; 256] = [
    1, 5, 13, 25, 41, 49, 69, 77, 78, 70, 50, 42, 26, 14, 6, 2, //
    7, 21, 33, 51, 85, 101, 109, 117, 118, 110, 102, 86, 52, 34, 22, 8, //
    15, 35, 65, 93, 119, 137, 145, 161, 162, 146, 138, 120, 94, 66, 36, 16, //
    27, 53, 95, 133, 147, 169, 181, 189, 190, 182, 170, 148, 134, 96, 54, 28, //
    43, 87, 121, 149, 177, 197, 205, 213, 214, 206, 198, 178, 150, 122, 88, 44, //
    55, 103, 139, 171, 199, 215, 225, 233, 234, 226, 216, 200, 172, 140, 104, 56, //
    71, 111, 151, 183, 207, 227, 241, 245, 246, 242, 228, 208, 184, 152, 112, 72, //
    79, 123, 163, 191, 217, 235, 247, 253, 254, 248, 236, 218, 192, 164, 124, 80, //
    81, 125, 165, 193, 219, 237, 249, 255, 256, 250, 238, 220, 194, 166, 126, 82, //
    73, 113, 153, 185, 209, 229, 243, 251, 252, 244, 230, 210, 186, 154, 114, 74, //
    57, 105, 141, 173, 201, 221, 231, 239, 240, 232, 222, 202, 174, 142, 106, 58, //
    45, 89, 127, 155, 179, 203, 211, 223, 224, 212, 204, 180, 156, 128, 90, 46, //
    29, 59, 97, 135, 157, 175, 187, 195, 196, 188, 176, 158, 136, 98, 60, 30, //
    17, 37, 67, 99, 129, 143, 159, 167, 168, 160, 144, 130, 100, 68, 38, 18, //
    9, 23, 39, 61, 91, 107, 115, 131, 132, 116, 108, 92, 62, 40, 24, 10, //
    3, 11, 19, 31, 47, 63, 75, 83, 84, 76, 64, 48, 32, 20, 12, 4,
];

// Each black circle matrix is the complement (`divisor - level`) of its white
// counterpart.

const CIRCLES_BLACK_5X5: [u16; 25] = [
    1, 5, 16, 15, 4, //
    6, 17, 20, 19, 14, //
    7, 21, 25, 24, 13, //
    8, 18, 22, 23, 12, //
    2, 9, 10, 11, 3,
];

const CIRCLES_WHITE_5X5: [u16; 25] = [
    25, 21, 10, 11, 22, //
    20, 9, 6, 7, 12, //
    19, 5, 1, 2, 13, //
    18, 8, 4, 3, 14, //
    24, 17, 16, 15, 23,
];

const CIRCLES_BLACK_6X6: [u16; 36] = [
    1, 5, 14, 13, 12, 4, //
    6, 22, 28, 27, 21, 11, //
    15, 29, 35, 34, 26, 20, //
    16, 30, 36, 33, 25, 19, //
    7, 23, 31, 32, 24, 10, //
    2, 8, 17, 18, 9, 3,
];

const CIRCLES_WHITE_6X6: [u16; 36] = [
    36, 32, 23, 24, 25, 33, //
    31, 15, 9, 10, 16, 26, //
    22, 8, 2, 3, 11, 17, //
    21, 7, 1, 4, 12, 18, //
    30, 14, 6, 5, 13, 27, //
    35, 29, 20, 19, 28, 34,
];

const CIRCLES_BLACK_7X7: [u16; 49] = [
    3, 9, 18, 28, 17, 8, 2, //
    10, 24, 33, 39, 32, 23, 7, //
    19, 34, 44, 48, 43, 31, 16, //
    25, 40, 45, 49, 47, 38, 27, //
    20, 35, 41, 46, 42, 30, 15, //
    11, 21, 36, 37, 29, 22, 6, //
    4, 12, 13, 26, 14, 5, 1,
];

const CIRCLES_WHITE_7X7: [u16; 49] = [
    47, 41, 32, 22, 33, 42, 48, //
    40, 26, 17, 11, 18, 27, 43, //
    31, 16, 6, 2, 7, 19, 34, //
    25, 10, 5, 1, 3, 12, 23, //
    30, 15, 9, 4, 8, 20, 35, //
    39, 29, 14, 13, 21, 28, 44, //
    46, 38, 37, 24, 36, 45, 49,
];

/// Named ordered-dither pattern used to collapse grayscale to black/white.
///
/// Each map is a small matrix of levels in `1..divisor`. A gray pixel is
/// scaled into `0..=divisor` and compared with the matrix entry at its
/// position (tiled across the image); see [`ThresholdMap::is_white`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThresholdMap {
    /// 1x1 plain 50% threshold, no dithering.
    Threshold,
    /// 2x2 checkerboard.
    Checks,
    /// 2x2 ordered dither.
    #[default]
    O2x2,
    /// 3x3 ordered dither.
    O3x3,
    /// 4x4 ordered dither.
    O4x4,
    /// 8x8 ordered (Bayer) dither.
    O8x8,
    /// 4x4 angled halftone.
    H4x4a,
    /// 6x6 angled halftone.
    H6x6a,
    /// 8x8 angled halftone.
    H8x8a,
    /// 4x4 orthogonal halftone.
    H4x4o,
    /// 6x6 orthogonal halftone.
    H6x6o,
    /// 8x8 orthogonal halftone.
    H8x8o,
    /// 16x16 orthogonal halftone.
    H16x16o,
    /// 5x5 black circles.
    C5x5b,
    /// 5x5 white circles.
    C5x5w,
    /// 6x6 black circles.
    C6x6b,
    /// 6x6 white circles.
    C6x6w,
    /// 7x7 black circles.
    C7x7b,
    /// 7x7 white circles.
    C7x7w,
}

impl ThresholdMap {
    /// Every supported map: ordered dithers, halftones, then circles.
    pub const ALL: [ThresholdMap; 19] = [
        ThresholdMap::Threshold,
        ThresholdMap::Checks,
        ThresholdMap::O2x2,
        ThresholdMap::O3x3,
        ThresholdMap::O4x4,
        ThresholdMap::O8x8,
        ThresholdMap::H4x4a,
        ThresholdMap::H6x6a,
        ThresholdMap::H8x8a,
        ThresholdMap::H4x4o,
        ThresholdMap::H6x6o,
        ThresholdMap::H8x8o,
        ThresholdMap::H16x16o,
        ThresholdMap::C5x5b,
        ThresholdMap::C5x5w,
        ThresholdMap::C6x6b,
        ThresholdMap::C6x6w,
        ThresholdMap::C7x7b,
        ThresholdMap::C7x7w,
    ];

    /// Canonical name of the map.
    pub fn name(self) -> &'static str {
        match self {
            ThresholdMap::Threshold => "threshold",
            ThresholdMap::Checks => "checks",
            ThresholdMap::O2x2 => "o2x2",
            ThresholdMap::O3x3 => "o3x3",
            ThresholdMap::O4x4 => "o4x4",
            ThresholdMap::O8x8 => "o8x8",
            ThresholdMap::H4x4a => "h4x4a",
            ThresholdMap::H6x6a => "h6x6a",
            ThresholdMap::H8x8a => "h8x8a",
            ThresholdMap::H4x4o => "h4x4o",
            ThresholdMap::H6x6o => "h6x6o",
            ThresholdMap::H8x8o => "h8x8o",
            ThresholdMap::H16x16o => "h16x16o",
            ThresholdMap::C5x5b => "c5x5b",
            ThresholdMap::C5x5w => "c5x5w",
            ThresholdMap::C6x6b => "c6x6b",
            ThresholdMap::C6x6w => "c6x6w",
            ThresholdMap::C7x7b => "c7x7b",
            ThresholdMap::C7x7w => "c7x7w",
        }
    }

    /// Matrix width and height in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ThresholdMap::Threshold => (1, 1),
            ThresholdMap::Checks | ThresholdMap::O2x2 => (2, 2),
            ThresholdMap::O3x3 => (3, 3),
            ThresholdMap::O4x4 | ThresholdMap::H4x4a | ThresholdMap::H4x4o => (4, 4),
            ThresholdMap::C5x5b | ThresholdMap::C5x5w => (5, 5),
            ThresholdMap::H6x6a
            | ThresholdMap::H6x6o
            | ThresholdMap::C6x6b
            | ThresholdMap::C6x6w => (6, 6),
            ThresholdMap::C7x7b | ThresholdMap::C7x7w => (7, 7),
            ThresholdMap::O8x8 | ThresholdMap::H8x8a | ThresholdMap::H8x8o => (8, 8),
            ThresholdMap::H16x16o => (16, 16),
        }
    }

    /// Number of intensity steps the matrix distinguishes.
    pub fn divisor(self) -> u32 {
        match self {
            ThresholdMap::Threshold => 2,
            ThresholdMap::Checks => 3,
            ThresholdMap::O2x2 => 5,
            ThresholdMap::H4x4a => 9,
            ThresholdMap::O3x3 => 10,
            ThresholdMap::O4x4 | ThresholdMap::H4x4o => 17,
            ThresholdMap::H6x6a => 19,
            ThresholdMap::C5x5b | ThresholdMap::C5x5w => 26,
            ThresholdMap::H8x8a => 33,
            ThresholdMap::H6x6o | ThresholdMap::C6x6b | ThresholdMap::C6x6w => 37,
            ThresholdMap::C7x7b | ThresholdMap::C7x7w => 50,
            ThresholdMap::O8x8 | ThresholdMap::H8x8o => 65,
            ThresholdMap::H16x16o => 257,
        }
    }

    fn levels(self) -> &'static [u16] {
        match self {
            ThresholdMap::Threshold => &THRESHOLD_1X1,
            ThresholdMap::Checks => &CHECKS_2X2,
            ThresholdMap::O2x2 => &ORDERED_2X2,
            ThresholdMap::O3x3 => &ORDERED_3X3,
            ThresholdMap::O4x4 => &ORDERED_4X4,
            ThresholdMap::O8x8 => &ORDERED_8X8,
            ThresholdMap::H4x4a => &HALFTONE_ANGLED_4X4,
            ThresholdMap::H6x6a => &HALFTONE_ANGLED_6X6,
            ThresholdMap::H8x8a => &HALFTONE_ANGLED_8X8,
            ThresholdMap::H4x4o => &HALFTONE_ORTHO_4X4,
            ThresholdMap::H6x6o => &HALFTONE_ORTHO_6X6,
            ThresholdMap::H8x8o => &HALFTONE_ORTHO_8X8,
            ThresholdMap::H16x16o => &HALFTONE_ORTHO_16X16,
            ThresholdMap::C5x5b => &CIRCLES_BLACK_5X5,
            ThresholdMap::C5x5w => &CIRCLES_WHITE_5X5,
            ThresholdMap::C6x6b => &CIRCLES_BLACK_6X6,
            ThresholdMap::C6x6w => &CIRCLES_WHITE_6X6,
            ThresholdMap::C7x7b => &CIRCLES_BLACK_7X7,
            ThresholdMap::C7x7w => &CIRCLES_WHITE_7X7,
        }
    }

    /// Matrix entry for image position `(x, y)`, tiling the matrix.
    pub fn level_at(self, x: u32, y: u32) -> u32 {
        let (w, h) = self.dimensions();
        let idx = (y % h) * w + (x % w);
        u32::from(self.levels()[idx as usize])
    }

    /// Decide whether a gray value becomes white at `(x, y)`.
    ///
    /// The value is scaled to `t = floor(gray * divisor / 255)`. Full white
    /// (`t == divisor`) is always white; otherwise the pixel is white when
    /// `t` reaches the matrix level. Since every level is at least 1, pure
    /// black always stays black.
    pub fn is_white(self, gray: u8, x: u32, y: u32) -> bool {
        let divisor = self.divisor();
        let t = u32::from(gray) * divisor / 255;
        t >= divisor || t >= self.level_at(x, y)
    }

    fn from_name(name: &str) -> Option<Self> {
        let map = match name {
            "threshold" | "1x1" => ThresholdMap::Threshold,
            "checks" | "2x1" => ThresholdMap::Checks,
            "o2x2" | "2x2" => ThresholdMap::O2x2,
            "o3x3" | "3x3" => ThresholdMap::O3x3,
            "o4x4" | "4x4" => ThresholdMap::O4x4,
            "o8x8" | "8x8" => ThresholdMap::O8x8,
            "h4x4a" | "4x1" => ThresholdMap::H4x4a,
            "h6x6a" | "6x1" => ThresholdMap::H6x6a,
            "h8x8a" | "8x1" => ThresholdMap::H8x8a,
            "h4x4o" => ThresholdMap::H4x4o,
            "h6x6o" => ThresholdMap::H6x6o,
            "h8x8o" => ThresholdMap::H8x8o,
            "h16x16o" => ThresholdMap::H16x16o,
            "c5x5b" | "c5x5" => ThresholdMap::C5x5b,
            "c5x5w" => ThresholdMap::C5x5w,
            "c6x6b" | "c6x6" => ThresholdMap::C6x6b,
            "c6x6w" => ThresholdMap::C6x6w,
            "c7x7b" | "c7x7" => ThresholdMap::C7x7b,
            "c7x7w" => ThresholdMap::C7x7w,
            _ => return None,
        };
        Some(map)
    }
}

impl fmt::Display for ThresholdMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a map name or alias, optionally followed by `,2`. The suffix is
/// the output level count; only two levels (black and white) exist here, so
/// any other count is rejected.
impl FromStr for ThresholdMap {
    type Err = BilevelError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || BilevelError::UnknownThresholdMap(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let name = match lowered.split_once(',') {
            Some((name, levels)) if levels.trim() == "2" => name.trim(),
            Some(_) => return Err(unknown()),
            None => lowered.as_str(),
        };
        ThresholdMap::from_name(name).ok_or_else(unknown)
    }
}

impl TryFrom<String> for ThresholdMap {
    type Error = BilevelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ThresholdMap> for String {
    fn from(map: ThresholdMap) -> Self {
        map.name().to_string()
    }
}

/// Settings for the two-stage binarization (quantize, then ordered dither).
///
/// Always valid once constructed: `gray_levels` is checked by
/// [`BinarizeOptions::new`], [`BinarizeOptions::with_gray_levels`] and by
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BinarizeOptionsRepr")]
pub struct BinarizeOptions {
    /// Dither pattern for the grayscale to binary step.
    threshold_map: ThresholdMap,
    /// Number of gray levels kept by the quantization step.
    gray_levels: u32,
}

impl BinarizeOptions {
    pub fn new(threshold_map: ThresholdMap, gray_levels: u32) -> Result<Self> {
        validate_gray_levels(gray_levels)?;
        Ok(Self {
            threshold_map,
            gray_levels,
        })
    }

    pub fn threshold_map(&self) -> ThresholdMap {
        self.threshold_map
    }

    pub fn gray_levels(&self) -> u32 {
        self.gray_levels
    }

    pub fn with_threshold_map(self, threshold_map: ThresholdMap) -> Self {
        Self {
            threshold_map,
            ..self
        }
    }

    pub fn with_gray_levels(self, gray_levels: u32) -> Result<Self> {
        Self::new(self.threshold_map, gray_levels)
    }
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold_map: ThresholdMap::default(),
            gray_levels: DEFAULT_GRAY_LEVELS,
        }
    }
}

fn validate_gray_levels(gray_levels: u32) -> Result<()> {
    if (MIN_GRAY_LEVELS..=MAX_GRAY_LEVELS).contains(&gray_levels) {
        Ok(())
    } else {
        Err(BilevelError::InvalidGrayLevels(gray_levels))
    }
}

/// Unvalidated wire form; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct BinarizeOptionsRepr {
    threshold_map: ThresholdMap,
    gray_levels: u32,
}

impl Default for BinarizeOptionsRepr {
    fn default() -> Self {
        let defaults = BinarizeOptions::default();
        Self {
            threshold_map: defaults.threshold_map,
            gray_levels: defaults.gray_levels,
        }
    }
}

impl TryFrom<BinarizeOptionsRepr> for BinarizeOptions {
    type Error = BilevelError;

    fn try_from(repr: BinarizeOptionsRepr) -> Result<Self> {
        BinarizeOptions::new(repr.threshold_map, repr.gray_levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_o2x2_and_fifty_levels() {
        let opts = BinarizeOptions::default();
        assert_eq!(opts.threshold_map(), ThresholdMap::O2x2);
        assert_eq!(opts.gray_levels(), 50);
    }

    #[test]
    fn gray_levels_out_of_range_are_rejected() {
        assert_eq!(
            BinarizeOptions::new(ThresholdMap::O4x4, 1),
            Err(BilevelError::InvalidGrayLevels(1))
        );
        assert_eq!(
            BinarizeOptions::default().with_gray_levels(257),
            Err(BilevelError::InvalidGrayLevels(257))
        );
        assert!(BinarizeOptions::new(ThresholdMap::O4x4, 2).is_ok());
        assert!(BinarizeOptions::new(ThresholdMap::O4x4, 256).is_ok());
    }

    #[test]
    fn threshold_map_names_parse() {
        for map in ThresholdMap::ALL {
            assert_eq!(map.name().parse::<ThresholdMap>(), Ok(map));
        }
        assert_eq!("O8X8".parse::<ThresholdMap>(), Ok(ThresholdMap::O8x8));
        assert_eq!(" 2x2 ".parse::<ThresholdMap>(), Ok(ThresholdMap::O2x2));
        assert_eq!(
            "o5x5".parse::<ThresholdMap>(),
            Err(BilevelError::UnknownThresholdMap("o5x5".into()))
        );
    }

    #[test]
    fn halftone_and_circle_maps_parse() {
        let cases = [
            ("h4x4a", ThresholdMap::H4x4a),
            ("4x1", ThresholdMap::H4x4a),
            ("h6x6a", ThresholdMap::H6x6a),
            ("6x1", ThresholdMap::H6x6a),
            ("h8x8a", ThresholdMap::H8x8a),
            ("8x1", ThresholdMap::H8x8a),
            ("h4x4o", ThresholdMap::H4x4o),
            ("h6x6o", ThresholdMap::H6x6o),
            ("h8x8o", ThresholdMap::H8x8o),
            ("H16X16O", ThresholdMap::H16x16o),
            ("c5x5b", ThresholdMap::C5x5b),
            ("c5x5", ThresholdMap::C5x5b),
            ("c5x5w", ThresholdMap::C5x5w),
            ("c6x6b", ThresholdMap::C6x6b),
            ("c6x6", ThresholdMap::C6x6b),
            ("c6x6w", ThresholdMap::C6x6w),
            ("c7x7b", ThresholdMap::C7x7b),
            ("c7x7", ThresholdMap::C7x7b),
            ("c7x7w", ThresholdMap::C7x7w),
            ("2x1", ThresholdMap::Checks),
        ];
        for (name, map) in cases {
            assert_eq!(name.parse::<ThresholdMap>(), Ok(map), "{name}");
        }
    }

    #[test]
    fn binary_level_suffix_is_accepted() {
        assert_eq!("o2x2,2".parse::<ThresholdMap>(), Ok(ThresholdMap::O2x2));
        assert_eq!("h4x4a, 2".parse::<ThresholdMap>(), Ok(ThresholdMap::H4x4a));
        assert_eq!(
            "o2x2,3".parse::<ThresholdMap>(),
            Err(BilevelError::UnknownThresholdMap("o2x2,3".into()))
        );
    }

    #[test]
    fn circle_pairs_are_complements() {
        let pairs = [
            (ThresholdMap::C5x5b, ThresholdMap::C5x5w),
            (ThresholdMap::C6x6b, ThresholdMap::C6x6w),
            (ThresholdMap::C7x7b, ThresholdMap::C7x7w),
        ];
        for (black, white) in pairs {
            let (w, h) = black.dimensions();
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(
                        black.level_at(x, y) + white.level_at(x, y),
                        black.divisor(),
                        "{black} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn orthogonal_halftone_grows_a_central_dot() {
        // Light gray: only the cells nearest the tile center stay black.
        let map = ThresholdMap::H16x16o;
        assert!(!map.is_white(250, 8, 8));
        assert!(map.is_white(250, 0, 0));
        assert!(map.is_white(250, 15, 15));
    }

    #[test]
    fn matrix_levels_fit_their_divisor() {
        for map in ThresholdMap::ALL {
            let (w, h) = map.dimensions();
            assert_eq!(map.levels().len(), (w * h) as usize, "{map}");
            for &level in map.levels() {
                assert!(level >= 1 && u32::from(level) < map.divisor(), "{map}");
            }
        }
    }

    #[test]
    fn level_at_tiles_the_matrix() {
        let map = ThresholdMap::O2x2;
        assert_eq!(map.level_at(0, 0), 1);
        assert_eq!(map.level_at(1, 0), 3);
        assert_eq!(map.level_at(0, 1), 4);
        assert_eq!(map.level_at(1, 1), 2);
        assert_eq!(map.level_at(2, 2), map.level_at(0, 0));
        assert_eq!(map.level_at(5, 3), map.level_at(1, 1));
    }

    #[test]
    fn extremes_never_dither() {
        for map in ThresholdMap::ALL {
            for y in 0..8 {
                for x in 0..8 {
                    assert!(!map.is_white(0, x, y), "{map} black at ({x}, {y})");
                    assert!(map.is_white(255, x, y), "{map} white at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn mid_gray_o2x2_pattern() {
        // 128 * 5 / 255 = 2: white where the level is 1 or 2.
        let map = ThresholdMap::O2x2;
        assert!(map.is_white(128, 0, 0));
        assert!(!map.is_white(128, 1, 0));
        assert!(!map.is_white(128, 0, 1));
        assert!(map.is_white(128, 1, 1));
    }

    #[test]
    fn plain_threshold_splits_at_half() {
        let map = ThresholdMap::Threshold;
        assert!(!map.is_white(127, 0, 0));
        assert!(map.is_white(128, 0, 0));
    }

    #[test]
    fn options_round_trip_through_json() {
        let opts = BinarizeOptions::new(ThresholdMap::O8x8, 16).unwrap();
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"threshold_map":"o8x8","gray_levels":16}"#);
        let back: BinarizeOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn options_json_fills_missing_fields() {
        let opts: BinarizeOptions = serde_json::from_str(r#"{"threshold_map":"4x4"}"#).unwrap();
        assert_eq!(opts.threshold_map(), ThresholdMap::O4x4);
        assert_eq!(opts.gray_levels(), DEFAULT_GRAY_LEVELS);
    }

    #[test]
    fn options_json_is_validated() {
        assert!(serde_json::from_str::<BinarizeOptions>(r#"{"gray_levels":0}"#).is_err());
        assert!(serde_json::from_str::<BinarizeOptions>(r#"{"threshold_map":"o5x5"}"#).is_err());
    }
}
