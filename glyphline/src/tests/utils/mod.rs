// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod engine;
mod fonts;

pub(crate) use engine::MockEngine;
pub(crate) use fonts::{
    dejavu_sans, dejavu_sans_mono, fixed_pitch_metrics, metrics, test_typeface, utf16,
};
