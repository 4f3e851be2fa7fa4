// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typefaces and their metrics.

use linebender_resource_handle::FontData;
use skrifa::instance::{LocationRef, Size};
use skrifa::MetadataProvider;

use crate::{Error, ErrorKind};

/// Identity of a typeface: the font blob and the index of the font within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypefaceId {
    /// Unique identifier of the font blob.
    pub blob_id: u64,
    /// Index of the font within a collection.
    pub index: u32,
}

/// A font program together with its design metrics.
///
/// Two typefaces are equal when they share a font blob, face index and
/// metrics. Host-resolved metrics may differ for the same blob, so such
/// typefaces never share a run.
///
/// Cloning is cheap: the font data is shared. A [`GlyphRun`] references its
/// typeface but never owns it.
///
/// [`GlyphRun`]: crate::GlyphRun
#[derive(Clone, Debug)]
pub struct Typeface {
    font: FontData,
    metrics: FontMetrics,
}

impl Typeface {
    /// Creates a typeface, reading its metrics from the font program.
    pub fn new(font: FontData) -> Result<Self, Error> {
        let metrics = FontMetrics::read(&font)?;
        Ok(Self { font, metrics })
    }

    /// Creates a typeface from a font program and metrics resolved by the host.
    pub fn with_metrics(font: FontData, metrics: FontMetrics) -> Self {
        Self { font, metrics }
    }

    /// The font program.
    pub fn font(&self) -> &FontData {
        &self.font
    }

    /// The identity of this typeface.
    pub fn id(&self) -> TypefaceId {
        TypefaceId {
            blob_id: self.font.data.id(),
            index: self.font.index,
        }
    }

    /// Design metrics of the typeface.
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Returns `true` if every glyph has the same advance width.
    pub fn is_fixed_pitch(&self) -> bool {
        self.metrics.is_fixed_pitch
    }
}

impl PartialEq for Typeface {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && self.metrics == other.metrics
    }
}

/// Font-wide metrics in design units.
///
/// Vertical values follow a y-down convention relative to the baseline:
/// `ascent` is negative (above the baseline), `descent` is positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Design units per em.
    pub units_per_em: u16,
    /// Distance from the baseline to the top of the tallest glyphs (negative).
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the deepest glyphs.
    pub descent: f32,
    /// Recommended additional space between lines.
    pub line_gap: f32,
    /// Position of the underline relative to the baseline (positive is below).
    pub underline_position: f32,
    /// Thickness of the underline.
    pub underline_thickness: f32,
    /// Position of the strikethrough relative to the baseline (negative is above).
    pub strikethrough_position: f32,
    /// Thickness of the strikethrough.
    pub strikethrough_thickness: f32,
    /// Whether every glyph has the same advance.
    pub is_fixed_pitch: bool,
    /// The uniform advance of a fixed pitch font; zero otherwise.
    pub fixed_advance: f32,
}

impl FontMetrics {
    fn read(font: &FontData) -> Result<Self, Error> {
        let font_ref = skrifa::FontRef::from_index(font.data.as_ref(), font.index).map_err(|_| {
            Error::new(ErrorKind::InvalidFont, 0..0).with_detail("font table directory unreadable")
        })?;
        let location = LocationRef::default();
        let metrics = font_ref.metrics(Size::unscaled(), location);
        let upem = f32::from(metrics.units_per_em.max(1));

        let (underline_position, underline_thickness) = metrics
            .underline
            .map(|d| (-d.offset, d.thickness))
            .unwrap_or((upem * 0.1, upem * 0.05));
        let (strikethrough_position, strikethrough_thickness) = metrics
            .strikeout
            .map(|d| (-d.offset, d.thickness))
            .unwrap_or_else(|| {
                let x_height = metrics.x_height.unwrap_or(upem * 0.5);
                (-x_height * 0.5, underline_thickness)
            });

        let fixed_advance = if metrics.is_monospace {
            let glyph_metrics = font_ref.glyph_metrics(Size::unscaled(), location);
            font_ref
                .charmap()
                .map(' ')
                .and_then(|gid| glyph_metrics.advance_width(gid))
                .or(metrics.max_width)
                .unwrap_or_default()
        } else {
            0.
        };

        Ok(Self {
            units_per_em: metrics.units_per_em,
            ascent: -metrics.ascent,
            descent: -metrics.descent,
            line_gap: metrics.leading,
            underline_position,
            underline_thickness,
            strikethrough_position,
            strikethrough_thickness,
            is_fixed_pitch: metrics.is_monospace,
            fixed_advance,
        })
    }

    /// Scale factor from design units to device independent units at
    /// `em_size`.
    pub fn scale(&self, em_size: f64) -> f64 {
        em_size / f64::from(self.units_per_em.max(1))
    }

    /// Metrics scaled to a rendering em size.
    pub fn scaled(&self, em_size: f64) -> ScaledFontMetrics {
        let scale = self.scale(em_size);
        let s = |v: f32| f64::from(v) * scale;
        ScaledFontMetrics {
            em_size,
            ascent: s(self.ascent),
            descent: s(self.descent),
            line_gap: s(self.line_gap),
            underline_position: s(self.underline_position),
            underline_thickness: s(self.underline_thickness),
            strikethrough_position: s(self.strikethrough_position),
            strikethrough_thickness: s(self.strikethrough_thickness),
            fixed_advance: s(self.fixed_advance),
        }
    }
}

/// Font metrics scaled to a rendering em size, in device independent units.
///
/// Uses the same sign conventions as [`FontMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledFontMetrics {
    /// The em size the metrics were scaled to.
    pub em_size: f64,
    /// Ascent (negative).
    pub ascent: f64,
    /// Descent (positive).
    pub descent: f64,
    /// Line gap.
    pub line_gap: f64,
    /// Underline position (positive is below the baseline).
    pub underline_position: f64,
    /// Underline thickness.
    pub underline_thickness: f64,
    /// Strikethrough position (negative is above the baseline).
    pub strikethrough_position: f64,
    /// Strikethrough thickness.
    pub strikethrough_thickness: f64,
    /// Uniform advance for fixed pitch fonts; zero otherwise.
    pub fixed_advance: f64,
}

impl ScaledFontMetrics {
    /// Natural line height: `descent - ascent + line_gap`.
    pub fn line_height(&self) -> f64 {
        self.descent - self.ascent + self.line_gap
    }
}
