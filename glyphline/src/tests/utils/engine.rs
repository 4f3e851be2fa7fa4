// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::codepoint::Codepoint;
use crate::{
    Error, LanguageIdentifier, ShapeInput, ShapeOutput, ShapedGlyph, ShapingEngine, Typeface,
};

/// Units per em reported by [`MockEngine`].
const UNITS_PER_EM: f64 = 1024.;
const HALF_EM: i32 = 512;

/// A deterministic shaping engine.
///
/// - every character becomes one glyph whose id is the low 16 bits of the
///   character, advancing by half an em;
/// - `f` followed by `i` becomes a single ligature glyph (U+FB01);
/// - zero width (non-)joiners get no advance;
/// - U+0301 COMBINING ACUTE ACCENT is offset by (-300, 200) units, y-up.
#[derive(Debug, Default)]
pub(crate) struct MockEngine {
    /// Number of calls to `shape`.
    pub(crate) calls: usize,
    /// Characters of the last call.
    pub(crate) last_input: Vec<(char, u32)>,
    /// Language of the last call.
    pub(crate) last_language: Option<LanguageIdentifier>,
    /// Reject every call.
    pub(crate) fail: bool,
    /// Replace every glyph id.
    pub(crate) glyph_id: Option<u32>,
    /// Pad the output with zero advance glyphs up to this count.
    pub(crate) pad_to: Option<usize>,
}

impl ShapingEngine for MockEngine {
    fn shape(
        &mut self,
        _typeface: &Typeface,
        input: &ShapeInput<'_>,
        output: &mut ShapeOutput,
    ) -> Result<(), Error> {
        output.clear();
        self.calls += 1;
        self.last_input = input.chars.to_vec();
        self.last_language = Some(input.language.clone());
        if self.fail {
            return Err(Error::shaping_failure(input.range.clone(), "mock failure"));
        }

        let mut chars = input.chars.iter().peekable();
        while let Some(&(ch, cluster)) = chars.next() {
            let mut glyph = ShapedGlyph {
                glyph_id: u32::from(ch) & 0xFFFF,
                cluster,
                x_advance: HALF_EM,
                ..Default::default()
            };
            match ch {
                'f' if chars.peek().is_some_and(|(next, _)| *next == 'i') => {
                    chars.next();
                    glyph.glyph_id = 0xFB01;
                }
                Codepoint::ZERO_WIDTH_NON_JOINER | Codepoint::ZERO_WIDTH_JOINER => {
                    glyph.x_advance = 0;
                }
                '\u{301}' => {
                    glyph.x_advance = 0;
                    glyph.x_offset = -300;
                    glyph.y_offset = 200;
                }
                _ => {}
            }
            if let Some(id) = self.glyph_id {
                glyph.glyph_id = id;
            }
            output.glyphs.push(glyph);
        }
        if let Some(count) = self.pad_to {
            let cluster = input.chars.last().map_or(0, |&(_, cluster)| cluster);
            output.glyphs.resize(
                count.max(output.glyphs.len()),
                ShapedGlyph {
                    cluster,
                    ..Default::default()
                },
            );
        }
        output.scale_x = UNITS_PER_EM;
        Ok(())
    }
}
