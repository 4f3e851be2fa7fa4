// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping with `harfrust`.

use core::fmt;

use skrifa::instance::{LocationRef, Size};
use skrifa::MetadataProvider;

use super::{ShapeInput, ShapeOutput, ShapedGlyph, ShapingEngine};
use crate::lru_cache::LruCache;
use crate::{Error, FontData, Typeface, TypefaceId};

const MAX_CACHED_FONTS: usize = 16;

struct CachedShaper {
    data: harfrust::ShaperData,
    units_per_em: u16,
}

/// The default shaping engine, a pure Rust port of HarfBuzz.
///
/// Shaper data is cached per typeface and the unicode buffer is reused across
/// calls, so an engine should be kept alive by its owner. Engines are not
/// shared between threads.
pub struct HarfrustEngine {
    shapers: LruCache<TypefaceId, CachedShaper>,
    unicode_buffer: Option<harfrust::UnicodeBuffer>,
}

impl HarfrustEngine {
    /// Creates an engine with an empty cache.
    pub fn new() -> Self {
        Self {
            shapers: LruCache::new(MAX_CACHED_FONTS),
            unicode_buffer: Some(harfrust::UnicodeBuffer::new()),
        }
    }
}

impl Default for HarfrustEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HarfrustEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarfrustEngine").finish_non_exhaustive()
    }
}

impl ShapingEngine for HarfrustEngine {
    fn shape(
        &mut self,
        typeface: &Typeface,
        input: &ShapeInput<'_>,
        output: &mut ShapeOutput,
    ) -> Result<(), Error> {
        output.clear();
        let font = typeface.font();
        let font_ref = harfrust::FontRef::from_index(font.data.as_ref(), font.index).map_err(|_| {
            log::warn!("harfrust rejected font {:?}", typeface.id());
            Error::shaping_failure(input.range.clone(), "font program unreadable")
        })?;

        let cached = self.shapers.entry(typeface.id(), || CachedShaper {
            data: harfrust::ShaperData::new(&font_ref),
            units_per_em: units_per_em(font),
        });
        if cached.units_per_em == 0 {
            return Err(Error::shaping_failure(
                input.range.clone(),
                "font has no units per em",
            ));
        }
        let shaper = cached.data.shaper(&font_ref).build();

        let mut buffer = self
            .unicode_buffer
            .take()
            .unwrap_or_else(harfrust::UnicodeBuffer::new);
        buffer.clear();
        buffer.reserve(input.chars.len());
        for &(ch, cluster) in input.chars {
            buffer.add(ch, cluster);
        }
        let language = input.language;
        if let Ok(language) = alloc::format!("{language}").parse::<harfrust::Language>() {
            buffer.set_language(language);
        }
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        output.scale_x = f64::from(cached.units_per_em);
        output.glyphs.extend(
            glyph_buffer
                .glyph_infos()
                .iter()
                .zip(glyph_buffer.glyph_positions())
                .map(|(info, pos)| ShapedGlyph {
                    glyph_id: info.glyph_id,
                    cluster: info.cluster,
                    x_advance: pos.x_advance,
                    y_advance: pos.y_advance,
                    x_offset: pos.x_offset,
                    y_offset: pos.y_offset,
                }),
        );

        // Keep the allocation for the next call.
        self.unicode_buffer = Some(glyph_buffer.clear());
        Ok(())
    }
}

fn units_per_em(font: &FontData) -> u16 {
    skrifa::FontRef::from_index(font.data.as_ref(), font.index)
        .map(|font_ref| {
            font_ref
                .metrics(Size::unscaled(), LocationRef::default())
                .units_per_em
        })
        .unwrap_or(0)
}
