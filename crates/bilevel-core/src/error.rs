// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for bilevel.

use thiserror::Error;

/// Top-level error type for all bilevel operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BilevelError {
    // -- Geometry --
    /// The image has no black pixel, so there is no content box to crop to.
    #[error("cannot crop whitespace: image is blank")]
    BlankImage,

    // -- Configuration --
    #[error("unknown threshold map: {0}")]
    UnknownThresholdMap(String),

    #[error("gray levels must be between 2 and 256, got {0}")]
    InvalidGrayLevels(u32),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BilevelError>;
