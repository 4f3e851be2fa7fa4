// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::path::{Path, PathBuf};

use crate::{Blob, FontData, FontMetrics, Typeface};

/// Metrics with 1024 units per em, so that a 16px em size scales by exactly
/// 1/64.
///
/// At 16px: ascent -12, descent 4, line gap 1, underline at 2 with thickness 1,
/// strikethrough at -4 with thickness 1.
pub(crate) fn metrics() -> FontMetrics {
    FontMetrics {
        units_per_em: 1024,
        ascent: -768.,
        descent: 256.,
        line_gap: 64.,
        underline_position: 128.,
        underline_thickness: 64.,
        strikethrough_position: -256.,
        strikethrough_thickness: 64.,
        is_fixed_pitch: false,
        fixed_advance: 0.,
    }
}

/// Like [`metrics`], with a uniform advance of 9.375px at 16px.
pub(crate) fn fixed_pitch_metrics() -> FontMetrics {
    FontMetrics {
        is_fixed_pitch: true,
        fixed_advance: 600.,
        ..metrics()
    }
}

/// A typeface with no font program. Every call creates a distinct typeface.
pub(crate) fn test_typeface(metrics: FontMetrics) -> Typeface {
    let blob = Blob::new(Arc::new(Vec::<u8>::new()));
    Typeface::with_metrics(FontData::new(blob, 0), metrics)
}

fn font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("assets")
        .join("dejavu_fonts")
}

fn load_typeface(file_name: &str) -> Typeface {
    let path = font_dir().join(file_name);
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    Typeface::new(FontData::new(Blob::new(Arc::new(bytes)), 0)).unwrap()
}

/// DejaVu Sans: 2048 units per em, so 16px scales by exactly 1/128.
pub(crate) fn dejavu_sans() -> Typeface {
    load_typeface("DejaVuSans.ttf")
}

/// DejaVu Sans Mono: every glyph advances by 1233 units.
pub(crate) fn dejavu_sans_mono() -> Typeface {
    load_typeface("DejaVuSansMono.ttf")
}

pub(crate) fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}
