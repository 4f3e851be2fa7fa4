// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting styled text into shapeable groups.

use alloc::vec::Vec;
use core::ops::Range;

use icu_properties::props::Script;
use icu_properties::CodePointMapData;
use unicode_bidi::utf16::BidiInfo;
use unicode_bidi::Level;

use crate::style::validate_style_runs;
use crate::{
    CharSlice, Error, ErrorKind, GlyphRun, ShapeContext, ShapeableChars, ShapingEngine, StyleRun,
    TextBuffer,
};

impl<E: ShapingEngine> ShapeContext<E> {
    /// Shapes a paragraph of styled text.
    ///
    /// `runs` must be sorted, non-empty, non-overlapping and lie within
    /// `text`; text not covered by any run is skipped. Each run is split at
    /// script and bidi level changes, and adjacent compatible groups are
    /// merged before shaping. `base_level` sets the paragraph embedding level
    /// and must not exceed the maximum explicit depth of 125; when `None` it is
    /// detected from the text.
    ///
    /// Runs are returned in logical order. Visual reordering is left to the
    /// caller.
    pub fn shape_runs<'a>(
        &mut self,
        text: CharSlice<'a>,
        runs: &[StyleRun<'a>],
        base_level: Option<u8>,
    ) -> Result<Vec<GlyphRun<'a>>, Error> {
        validate_style_runs(runs, text.range())?;

        let units = text.as_slice();
        let base_level = base_level
            .map(|level| {
                Level::new_explicit(level)
                    .map_err(|_| Error::new(ErrorKind::InvalidBidiLevel, text.range()))
            })
            .transpose()?;
        let bidi = BidiInfo::new(units, base_level);
        let scripts = CodePointMapData::<Script>::new();
        let mut last_script = text
            .codepoints()
            .map(|(_, cp)| scripts.get(cp.value))
            .find(|&script| is_real_script(script))
            .unwrap_or(Script::Common);

        let mut shaped = Vec::new();
        let mut buffer = TextBuffer::new();
        for run in runs {
            let groups = segments(&text, run.range.clone(), &mut last_script, |offset, ch| {
                let level = bidi
                    .levels
                    .get(offset - text.start())
                    .map_or(0, |level| level.number());
                (scripts.get(ch), level)
            });
            for (range, script, level) in groups {
                let group =
                    ShapeableChars::new(text.slice(range)?, run.properties.clone(), script, level);
                if !buffer.try_add(group.clone()) {
                    shaped.extend(buffer.shape(self)?);
                    buffer = TextBuffer::new();
                    buffer.try_add(group);
                }
            }
        }
        shaped.extend(buffer.shape(self)?);
        log::debug!(
            "itemized {} style run(s) into {} glyph run(s)",
            runs.len(),
            shaped.len()
        );
        Ok(shaped)
    }
}

fn is_real_script(script: Script) -> bool {
    script != Script::Common && script != Script::Inherited && script != Script::Unknown
}

/// Splits `range` of `text` into maximal segments of equal script and level.
///
/// Characters without a real script inherit the script of the preceding
/// character, carried across calls in `last_script`.
fn segments(
    text: &CharSlice<'_>,
    range: Range<usize>,
    last_script: &mut Script,
    mut classify: impl FnMut(usize, char) -> (Script, u8),
) -> Vec<(Range<usize>, Script, u8)> {
    let mut out: Vec<(Range<usize>, Script, u8)> = Vec::new();
    let Ok(slice) = text.slice(range) else {
        return out;
    };
    for (offset, cp) in slice.codepoints() {
        let start = slice.start() + offset;
        let end = start + cp.utf16_len;
        let (mut script, level) = classify(start, cp.value);
        if is_real_script(script) {
            *last_script = script;
        } else {
            script = *last_script;
        }
        match out.last_mut() {
            Some((current, current_script, current_level))
                if *current_script == script && *current_level == level =>
            {
                current.end = end;
            }
            _ => out.push((start..end, script, level)),
        }
    }
    out
}
