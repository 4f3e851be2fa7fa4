// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration lines drawn along glyph runs.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use peniko::kurbo::{Point, Rect};

use crate::{Error, ErrorKind, GlyphRun};

/// Vertical position of a text decoration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDecorationLocation {
    /// Below the baseline, at the typeface's underline position.
    #[default]
    Underline,
    /// Through the text, at the typeface's strikethrough position.
    Strikethrough,
    /// Above the text, at the ascent.
    Overline,
    /// On the baseline.
    Baseline,
}

impl TextDecorationLocation {
    /// Name of the location as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Overline => "Overline",
            Self::Baseline => "Baseline",
        }
    }

    /// Parses `entry`, reporting `range` on failure.
    fn parse_entry(entry: &str, range: Range<usize>) -> Result<Self, Error> {
        let entry = entry.trim();
        [
            Self::Underline,
            Self::Strikethrough,
            Self::Overline,
            Self::Baseline,
        ]
        .into_iter()
        .find(|location| location.as_str().eq_ignore_ascii_case(entry))
        .ok_or_else(|| {
            Error::new(ErrorKind::InvalidDecoration, range).with_detail("unknown location")
        })
    }
}

impl fmt::Display for TextDecorationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDecorationLocation {
    type Err = Error;

    /// Parses a location name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_entry(s, 0..s.len())
    }
}

/// Unit in which a decoration's thickness or offset is expressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDecorationUnit {
    /// The value recommended by the typeface. The numeric value is ignored.
    #[default]
    FontRecommended,
    /// A multiple of the rendering em size.
    FontRenderingEmSize,
    /// Device independent pixels.
    Pixel,
}

/// A line drawn along a run of text.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextDecoration {
    /// Where the line is drawn.
    pub location: TextDecorationLocation,
    /// Thickness of the line.
    pub thickness: f64,
    /// Unit of [`thickness`](Self::thickness).
    pub thickness_unit: TextDecorationUnit,
    /// Additional offset from the location, positive is down.
    pub offset: f64,
    /// Unit of [`offset`](Self::offset).
    pub offset_unit: TextDecorationUnit,
}

impl TextDecoration {
    /// An underline using the typeface's recommended metrics.
    pub fn underline() -> Self {
        Self::at(TextDecorationLocation::Underline)
    }

    /// A strikethrough using the typeface's recommended metrics.
    pub fn strikethrough() -> Self {
        Self::at(TextDecorationLocation::Strikethrough)
    }

    /// An overline using the typeface's recommended metrics.
    pub fn overline() -> Self {
        Self::at(TextDecorationLocation::Overline)
    }

    /// A line on the baseline using the typeface's recommended metrics.
    pub fn baseline() -> Self {
        Self::at(TextDecorationLocation::Baseline)
    }

    fn at(location: TextDecorationLocation) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// Computes the rectangle covered by this decoration for `run`, whose
    /// baseline starts at `origin`.
    ///
    /// The rectangle spans the advance of the run; its top edge sits at the
    /// decoration position.
    pub fn draw_op(&self, run: &GlyphRun<'_>, origin: Point) -> DecorationOp {
        let metrics = run.font_metrics();
        let em_size = run.em_size();
        let (position, recommended_thickness) = match self.location {
            TextDecorationLocation::Underline => {
                (metrics.underline_position, metrics.underline_thickness)
            }
            TextDecorationLocation::Strikethrough => (
                metrics.strikethrough_position,
                metrics.strikethrough_thickness,
            ),
            TextDecorationLocation::Overline => (metrics.ascent, metrics.underline_thickness),
            TextDecorationLocation::Baseline => (0., metrics.underline_thickness),
        };
        let thickness = match self.thickness_unit {
            TextDecorationUnit::FontRecommended => recommended_thickness,
            TextDecorationUnit::FontRenderingEmSize => self.thickness * em_size,
            TextDecorationUnit::Pixel => self.thickness,
        };
        let offset = match self.offset_unit {
            TextDecorationUnit::FontRecommended => 0.,
            TextDecorationUnit::FontRenderingEmSize => self.offset * em_size,
            TextDecorationUnit::Pixel => self.offset,
        };

        let top = origin.y + position + offset;
        let rect = Rect::new(origin.x, top, origin.x + run.width(), top + thickness);
        match self.location {
            TextDecorationLocation::Underline => DecorationOp::Underline(rect),
            TextDecorationLocation::Strikethrough => DecorationOp::Strikethrough(rect),
            TextDecorationLocation::Overline => DecorationOp::Overline(rect),
            TextDecorationLocation::Baseline => DecorationOp::Baseline(rect),
        }
    }
}

/// An ordered list of decorations with at most one per location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextDecorations {
    decorations: Vec<TextDecoration>,
}

impl TextDecorations {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `decoration`, returning it back if its location is already
    /// present.
    pub fn push(&mut self, decoration: TextDecoration) -> Result<(), TextDecoration> {
        if self.contains(decoration.location) {
            return Err(decoration);
        }
        self.decorations.push(decoration);
        Ok(())
    }

    /// Returns `true` if a decoration is drawn at `location`.
    pub fn contains(&self, location: TextDecorationLocation) -> bool {
        self.decorations
            .iter()
            .any(|decoration| decoration.location == location)
    }

    /// Number of decorations.
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Returns `true` if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// The decorations in list order.
    pub fn as_slice(&self) -> &[TextDecoration] {
        &self.decorations
    }

    /// Iterates the decorations in list order.
    pub fn iter(&self) -> core::slice::Iter<'_, TextDecoration> {
        self.decorations.iter()
    }

    /// Resolves every decoration against `run`, in list order.
    pub fn draw_ops(&self, run: &GlyphRun<'_>, origin: Point) -> Vec<DecorationOp> {
        decorations_for_run(run, origin, &self.decorations)
    }
}

impl FromStr for TextDecorations {
    type Err = Error;

    /// Parses a comma separated list of location names such as
    /// `"Underline, Strikethrough"`. Each entry uses the typeface's
    /// recommended metrics. A blank string is an empty list.
    ///
    /// Unknown, empty or repeated entries are rejected with
    /// [`ErrorKind::InvalidDecoration`] and the byte range of the entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut decorations = Self::new();
        if s.trim().is_empty() {
            return Ok(decorations);
        }
        let mut start = 0;
        for entry in s.split(',') {
            let range = start..start + entry.len();
            start = range.end + 1;
            let location = TextDecorationLocation::parse_entry(entry, range.clone())?;
            decorations
                .push(TextDecoration::at(location))
                .map_err(|_| {
                    Error::new(ErrorKind::InvalidDecoration, range)
                        .with_detail("repeated location")
                })?;
        }
        Ok(decorations)
    }
}

impl<'a> IntoIterator for &'a TextDecorations {
    type Item = &'a TextDecoration;
    type IntoIter = core::slice::Iter<'a, TextDecoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A decoration resolved against a glyph run, ready to be filled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DecorationOp {
    /// An underline.
    Underline(Rect),
    /// A strikethrough.
    Strikethrough(Rect),
    /// An overline.
    Overline(Rect),
    /// A baseline.
    Baseline(Rect),
}

impl DecorationOp {
    /// The area to fill.
    pub fn rect(&self) -> Rect {
        match *self {
            Self::Underline(rect)
            | Self::Strikethrough(rect)
            | Self::Overline(rect)
            | Self::Baseline(rect) => rect,
        }
    }
}

/// Resolves every decoration in `decorations` against `run`.
pub fn decorations_for_run(
    run: &GlyphRun<'_>,
    origin: Point,
    decorations: &[TextDecoration],
) -> Vec<DecorationOp> {
    decorations
        .iter()
        .map(|decoration| decoration.draw_op(run, origin))
        .collect()
}
