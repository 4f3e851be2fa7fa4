// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misc helpers.

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "`abs` is an inherent method when `std` is enabled")]
use core_maths::CoreFloat;

pub(crate) fn nearly_eq(x: f64, y: f64) -> bool {
    (x - y).abs() < f64::EPSILON
}
