// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metrics of a single line of shaped text.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Error, GlyphRun, TextParagraphProperties};

/// Measurements of a line built from one or more glyph runs.
///
/// All values are in device independent units with y pointing down. The
/// baseline is measured from the top of the line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLineMetrics {
    /// Source range covered by the line.
    pub text_range: Range<usize>,
    /// Horizontal offset of the first glyph, taken from the paragraph indent.
    pub start: f64,
    /// Height of the line.
    pub height: f64,
    /// Total advance of all runs.
    pub width: f64,
    /// Total advance including trailing whitespace.
    ///
    /// Currently always equal to [`width`](Self::width).
    pub width_including_trailing_whitespace: f64,
    /// Distance from the top of the line to the baseline.
    pub text_baseline: f64,
    /// Whether `width` exceeds the paragraph width.
    pub has_overflowed: bool,
}

impl TextLineMetrics {
    /// Folds the metrics of `runs` into the metrics of a single line.
    ///
    /// The ascent of the line is the highest ascent of any run and the descent
    /// the deepest descent, both measured from a baseline shared by all runs.
    /// An explicit, usable line height in `properties` replaces the natural
    /// height.
    ///
    /// Returns an error of kind [`InvalidStyleRun`] if a run lies outside of
    /// `text_range` or two runs overlap.
    ///
    /// [`InvalidStyleRun`]: crate::ErrorKind::InvalidStyleRun
    pub fn compute(
        runs: &[GlyphRun<'_>],
        text_range: Range<usize>,
        paragraph_width: f64,
        properties: &TextParagraphProperties,
    ) -> Result<Self, Error> {
        validate_runs(runs, &text_range)?;

        let mut width = 0.;
        let mut ascent = 0_f64;
        let mut descent = 0_f64;
        let mut line_gap = 0_f64;
        for run in runs {
            let metrics = run.font_metrics();
            width += run.width();
            ascent = ascent.min(metrics.ascent);
            descent = descent.max(metrics.descent);
            line_gap = line_gap.max(metrics.line_gap);
        }

        let height = properties
            .effective_line_height()
            .unwrap_or(descent - ascent + line_gap);

        Ok(Self {
            text_range,
            start: properties.indent,
            height,
            width,
            width_including_trailing_whitespace: width,
            text_baseline: -ascent,
            has_overflowed: width > paragraph_width,
        })
    }
}

fn validate_runs(runs: &[GlyphRun<'_>], text_range: &Range<usize>) -> Result<(), Error> {
    let mut ranges: Vec<Range<usize>> = Vec::with_capacity(runs.len());
    for run in runs {
        let range = run.characters().range();
        if range.start < text_range.start || range.end > text_range.end {
            return Err(Error::invalid_style_run(
                range,
                "glyph run lies outside of the line",
            ));
        }
        if !range.is_empty() {
            ranges.push(range);
        }
    }
    // Runs may be supplied in visual order.
    ranges.sort_unstable_by_key(|range| range.start);
    for pair in ranges.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(Error::invalid_style_run(
                pair[1].clone(),
                "glyph runs overlap",
            ));
        }
    }
    Ok(())
}
