// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use icu_locale_core::LanguageIdentifier;

use crate::{Error, Typeface};

/// Characters prepared for a shaping engine.
#[derive(Clone, Debug)]
pub struct ShapeInput<'a> {
    /// Characters in logical order, each paired with the absolute source offset
    /// used as its cluster id.
    pub chars: &'a [(char, u32)],
    /// Language hint for the engine.
    pub language: &'a LanguageIdentifier,
    /// Source range being shaped, for error reporting.
    pub range: Range<usize>,
}

/// A glyph emitted by a shaping engine, in engine units.
///
/// Offsets are y-up, as font engines report them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// Glyph id in the font.
    pub glyph_id: u32,
    /// Cluster id copied from the input.
    pub cluster: u32,
    /// Horizontal advance.
    pub x_advance: i32,
    /// Vertical advance.
    pub y_advance: i32,
    /// Horizontal offset from the pen position.
    pub x_offset: i32,
    /// Vertical offset from the pen position.
    pub y_offset: i32,
}

/// Scratch output of a shaping engine.
#[derive(Clone, Debug, Default)]
pub struct ShapeOutput {
    /// Shaped glyphs in emission order.
    pub glyphs: Vec<ShapedGlyph>,
    /// Engine units per em in the horizontal direction.
    pub scale_x: f64,
}

impl ShapeOutput {
    pub(crate) fn clear(&mut self) {
        self.glyphs.clear();
        self.scale_x = 0.;
    }
}

/// A font shaping engine.
///
/// Implementations apply the substitution and positioning rules of the
/// typeface to the input and infer script and direction from its content.
/// Glyphs must be emitted in the logical order of the input for a single
/// direction segment.
pub trait ShapingEngine {
    /// Shapes `input` with `typeface`, replacing the contents of `output`.
    ///
    /// Returns an error of kind [`ShapingFailure`] when the font program or
    /// the buffer cannot be shaped.
    ///
    /// [`ShapingFailure`]: crate::ErrorKind::ShapingFailure
    fn shape(
        &mut self,
        typeface: &Typeface,
        input: &ShapeInput<'_>,
        output: &mut ShapeOutput,
    ) -> Result<(), Error>;
}

impl<E: ShapingEngine + ?Sized> ShapingEngine for &mut E {
    fn shape(
        &mut self,
        typeface: &Typeface,
        input: &ShapeInput<'_>,
        output: &mut ShapeOutput,
    ) -> Result<(), Error> {
        (**self).shape(typeface, input, output)
    }
}
