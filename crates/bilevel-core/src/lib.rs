// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bilevel-core: Value types, binarization settings and error definitions
// shared by the bilevel crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BinarizeOptions, ThresholdMap};
pub use error::{BilevelError, Result};
pub use types::*;
