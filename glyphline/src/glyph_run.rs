// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::kurbo::Vec2;

use crate::{CharSlice, ScaledFontMetrics, Typeface};

/// A sequence of shaped glyphs produced from a single slice of text with a
/// single typeface and em size.
///
/// Glyph data is stored as parallel arrays. Advances are absent for fixed pitch
/// typefaces, in which case every glyph advances by the typeface's uniform
/// advance. Offsets are absent when no glyph received a positioning
/// adjustment.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphRun<'a> {
    typeface: &'a Typeface,
    em_size: f64,
    characters: CharSlice<'a>,
    glyph_indices: Vec<u16>,
    glyph_clusters: Vec<u16>,
    glyph_advances: Option<Vec<f64>>,
    glyph_offsets: Option<Vec<Vec2>>,
}

impl<'a> GlyphRun<'a> {
    pub(crate) fn new(
        typeface: &'a Typeface,
        em_size: f64,
        characters: CharSlice<'a>,
        glyph_indices: Vec<u16>,
        glyph_clusters: Vec<u16>,
        glyph_advances: Option<Vec<f64>>,
        glyph_offsets: Option<Vec<Vec2>>,
    ) -> Self {
        debug_assert_eq!(glyph_indices.len(), glyph_clusters.len(), "parallel arrays");
        Self {
            typeface,
            em_size,
            characters,
            glyph_indices,
            glyph_clusters,
            glyph_advances,
            glyph_offsets,
        }
    }

    /// The typeface the run was shaped with.
    pub fn typeface(&self) -> &'a Typeface {
        self.typeface
    }

    /// The rendering em size.
    pub fn em_size(&self) -> f64 {
        self.em_size
    }

    /// The source text of the run.
    pub fn characters(&self) -> CharSlice<'a> {
        self.characters
    }

    /// Glyph indices in the typeface.
    pub fn glyph_indices(&self) -> &[u16] {
        &self.glyph_indices
    }

    /// For each glyph, the absolute offset of the first source code unit of its
    /// cluster.
    pub fn glyph_clusters(&self) -> &[u16] {
        &self.glyph_clusters
    }

    /// Per-glyph advances, or `None` for fixed pitch typefaces.
    pub fn glyph_advances(&self) -> Option<&[f64]> {
        self.glyph_advances.as_deref()
    }

    /// Per-glyph offsets, or `None` when no glyph is offset.
    ///
    /// Offsets are scaled to the em size and use a y-down convention: the
    /// y-up [`ShapedGlyph::y_offset`] reported by the engine is negated, so a
    /// glyph raised by the font has a negative `y` here.
    ///
    /// [`ShapedGlyph::y_offset`]: crate::ShapedGlyph::y_offset
    pub fn glyph_offsets(&self) -> Option<&[Vec2]> {
        self.glyph_offsets.as_deref()
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyph_indices.len()
    }

    /// Returns `true` if the run has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyph_indices.is_empty()
    }

    /// The advance of the glyph at `index`.
    pub fn glyph_advance(&self, index: usize) -> Option<f64> {
        match &self.glyph_advances {
            Some(advances) => advances.get(index).copied(),
            None if index < self.len() => Some(self.font_metrics().fixed_advance),
            None => None,
        }
    }

    /// Total advance of the run.
    pub fn width(&self) -> f64 {
        match &self.glyph_advances {
            Some(advances) => advances.iter().sum(),
            None => self.len() as f64 * self.font_metrics().fixed_advance,
        }
    }

    /// Typeface metrics scaled to the run's em size.
    pub fn font_metrics(&self) -> ScaledFontMetrics {
        self.typeface.metrics().scaled(self.em_size)
    }
}
