// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style runs and paragraph properties.

use core::ops::Range;

use icu_locale_core::LanguageIdentifier;

use crate::{Error, Typeface};

/// Properties applied to a contiguous range of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRunProperties<'a> {
    /// The typeface used to shape the text.
    pub typeface: &'a Typeface,
    /// Font rendering em size in device independent units.
    pub em_size: f64,
    /// Culture of the text. The shaping context's default culture is used when
    /// this is `None`.
    pub culture: Option<LanguageIdentifier>,
}

impl<'a> TextRunProperties<'a> {
    /// Creates run properties without an explicit culture.
    pub fn new(typeface: &'a Typeface, em_size: f64) -> Self {
        Self {
            typeface,
            em_size,
            culture: None,
        }
    }

    /// Sets the culture.
    pub fn with_culture(mut self, culture: LanguageIdentifier) -> Self {
        self.culture = Some(culture);
        self
    }
}

/// Style applied to a range of text, in UTF-16 code units.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRun<'a> {
    /// Absolute range of the text covered by this run.
    pub range: Range<usize>,
    /// Properties of the run.
    pub properties: TextRunProperties<'a>,
}

impl<'a> StyleRun<'a> {
    /// Creates a style run.
    pub fn new(range: Range<usize>, properties: TextRunProperties<'a>) -> Self {
        Self { range, properties }
    }
}

/// Checks that `runs` are non-empty, sorted by start, non-overlapping and
/// contained in `bounds`.
pub(crate) fn validate_style_runs(runs: &[StyleRun<'_>], bounds: Range<usize>) -> Result<(), Error> {
    let mut last_end = bounds.start;
    for run in runs {
        let range = run.range.clone();
        if range.start >= range.end {
            return Err(Error::invalid_style_run(range, "style run is empty"));
        }
        if range.start < bounds.start || range.end > bounds.end {
            return Err(Error::invalid_style_run(range, "style run is out of range"));
        }
        if range.start < last_end {
            return Err(Error::invalid_style_run(
                range,
                "style run overlaps or precedes the previous run",
            ));
        }
        last_end = range.end;
    }
    Ok(())
}

/// Paragraph-wide properties used when computing line metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextParagraphProperties {
    /// Horizontal offset applied once at the start of each line.
    pub indent: f64,
    /// Explicit line height. Ignored unless finite and greater than zero.
    pub line_height: Option<f64>,
}

impl TextParagraphProperties {
    /// The explicit line height, if it is usable.
    pub fn effective_line_height(&self) -> Option<f64> {
        self.line_height
            .filter(|height| height.is_finite() && *height > 0.)
    }
}
