// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shaping.

use alloc::vec::Vec;

use icu_locale_core::LanguageIdentifier;
use peniko::kurbo::Vec2;

use crate::codepoint::Codepoint;
use crate::{CharSlice, Error, ErrorKind, GlyphRun, Typeface};

mod engine;
mod harf;

pub use engine::{ShapeInput, ShapeOutput, ShapedGlyph, ShapingEngine};
pub use harf::HarfrustEngine;

/// Largest number of glyphs, and largest cluster or glyph id, a single run can
/// hold.
const MAX_RUN_INDEX: usize = u16::MAX as usize;

/// Shaping state owned by one thread of layout work.
///
/// Holds the shaping engine, the default culture and the scratch buffers
/// reused between calls. Contexts are cheap to keep around and should not be
/// shared between workers.
#[derive(Debug)]
pub struct ShapeContext<E = HarfrustEngine> {
    engine: E,
    default_culture: LanguageIdentifier,
    input: Vec<(char, u32)>,
    output: ShapeOutput,
}

impl ShapeContext {
    /// Creates a context using [`HarfrustEngine`] and the ambient culture.
    pub fn new() -> Self {
        Self::with_engine(HarfrustEngine::new())
    }
}

impl Default for ShapeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ShapingEngine> ShapeContext<E> {
    /// Creates a context around a custom shaping engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            default_culture: ambient_culture(),
            input: Vec::new(),
            output: ShapeOutput::default(),
        }
    }

    /// The shaping engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the shaping engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The culture used for runs that do not specify one.
    pub fn default_culture(&self) -> &LanguageIdentifier {
        &self.default_culture
    }

    /// Sets the culture used for runs that do not specify one.
    pub fn set_default_culture(&mut self, culture: LanguageIdentifier) {
        self.default_culture = culture;
    }

    /// Shapes `slice` with `typeface` at `em_size`.
    ///
    /// Break characters are replaced by zero width (non-)joiners so the engine
    /// never renders a glyph for them. Clusters in the result are absolute
    /// offsets into the slice's buffer.
    ///
    /// An empty slice yields an empty run without invoking the engine.
    pub fn shape_text<'a>(
        &mut self,
        slice: CharSlice<'a>,
        typeface: &'a Typeface,
        em_size: f64,
        culture: Option<&LanguageIdentifier>,
    ) -> Result<GlyphRun<'a>, Error> {
        if !(em_size.is_finite() && em_size > 0.) {
            return Err(Error::new(ErrorKind::InvalidEmSize, slice.range()));
        }
        if slice.is_empty() {
            return Ok(GlyphRun::new(
                typeface,
                em_size,
                slice,
                Vec::new(),
                Vec::new(),
                (!typeface.is_fixed_pitch()).then(Vec::new),
                None,
            ));
        }
        // The last cluster id is `slice.end() - 1`.
        if slice.end() > MAX_RUN_INDEX + 1 {
            return Err(Error::cluster_overflow(slice.range()));
        }

        log::trace!(
            "shaping {:?} with {:?} at {em_size}",
            slice.range(),
            typeface.id()
        );

        fill_input(&mut self.input, &slice);
        let input = ShapeInput {
            chars: &self.input,
            language: culture.unwrap_or(&self.default_culture),
            range: slice.range(),
        };
        self.engine.shape(typeface, &input, &mut self.output)?;
        build_glyph_run(&self.output, slice, typeface, em_size)
    }
}

/// Converts the codepoints of `slice` into engine input.
///
/// A lone break character becomes a zero width non-joiner. A CR LF or LF CR
/// pair becomes a zero width non-joiner followed by a zero width joiner, both
/// carrying the offset of the first character of the pair.
fn fill_input(input: &mut Vec<(char, u32)>, slice: &CharSlice<'_>) {
    input.clear();
    let units = slice.as_slice();
    let mut i = 0;
    while let Some(codepoint) = Codepoint::read_at(units, i) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slice end was checked against the cluster limit"
        )]
        let cluster = (slice.start() + i) as u32;
        let mut count = codepoint.utf16_len;
        if codepoint.is_break_char() {
            let pair = Codepoint::read_at(units, i + count)
                .is_some_and(|next| codepoint.pairs_with(&next));
            input.push((Codepoint::ZERO_WIDTH_NON_JOINER, cluster));
            if pair {
                input.push((Codepoint::ZERO_WIDTH_JOINER, cluster));
                count += 1;
            }
        } else {
            input.push((codepoint.value, cluster));
        }
        i += count;
    }
}

fn build_glyph_run<'a>(
    output: &ShapeOutput,
    slice: CharSlice<'a>,
    typeface: &'a Typeface,
    em_size: f64,
) -> Result<GlyphRun<'a>, Error> {
    let glyphs = &output.glyphs;
    if glyphs.len() > MAX_RUN_INDEX {
        return Err(Error::cluster_overflow(slice.range()));
    }
    if !(output.scale_x.is_finite() && output.scale_x > 0.) {
        return Err(Error::shaping_failure(
            slice.range(),
            "engine reported no horizontal scale",
        ));
    }
    let text_scale = em_size / output.scale_x;

    let mut glyph_indices = Vec::with_capacity(glyphs.len());
    let mut glyph_clusters = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        let (Ok(index), Ok(cluster)) = (u16::try_from(glyph.glyph_id), u16::try_from(glyph.cluster))
        else {
            return Err(Error::cluster_overflow(slice.range()));
        };
        glyph_indices.push(index);
        glyph_clusters.push(cluster);
    }

    let glyph_advances = (!typeface.is_fixed_pitch()).then(|| {
        glyphs
            .iter()
            .map(|glyph| f64::from(glyph.x_advance) * text_scale)
            .collect()
    });
    let glyph_offsets = glyphs
        .iter()
        .any(|glyph| glyph.x_offset != 0 || glyph.y_offset != 0)
        .then(|| {
            glyphs
                .iter()
                .map(|glyph| {
                    Vec2::new(
                        f64::from(glyph.x_offset) * text_scale,
                        -f64::from(glyph.y_offset) * text_scale,
                    )
                })
                .collect()
        });

    Ok(GlyphRun::new(
        typeface,
        em_size,
        slice,
        glyph_indices,
        glyph_clusters,
        glyph_advances,
        glyph_offsets,
    ))
}

/// The culture of the environment, or `und` ([`LanguageIdentifier::UNKNOWN`]).
fn ambient_culture() -> LanguageIdentifier {
    #[cfg(feature = "std")]
    {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Some(culture) = std::env::var(var).ok().as_deref().and_then(parse_posix_locale) {
                return culture;
            }
        }
    }
    LanguageIdentifier::UNKNOWN
}

/// Parses a POSIX locale name such as `en_US.UTF-8` or `sr_RS@latin`.
#[cfg_attr(not(feature = "std"), allow(dead_code, reason = "only read from the environment"))]
fn parse_posix_locale(value: &str) -> Option<LanguageIdentifier> {
    let name = value.split(['.', '@']).next()?;
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    name.replace('_', "-").parse().ok()
}
