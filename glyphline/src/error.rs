// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// Error type for shaping and line metrics operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the range of source text (in
/// UTF-16 code units) that the failing operation was working on. An error
/// always aborts the whole call: no partially built [`GlyphRun`] or
/// [`TextLineMetrics`] is ever returned alongside it.
///
/// [`GlyphRun`]: crate::GlyphRun
/// [`TextLineMetrics`]: crate::TextLineMetrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The source range the operation was working on.
    range: Range<usize>,

    /// Static detail provided by the component that failed.
    detail: Option<&'static str>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range involved in the failure.
    ///
    /// This is a range of source text in UTF-16 code units, except for
    /// [`ErrorKind::InvalidDecoration`] where it is the byte range of the
    /// offending entry in the parsed string.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Additional detail about the failure, if any.
    pub fn detail(&self) -> Option<&'static str> {
        self.detail
    }

    pub(crate) fn new(kind: ErrorKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = Some(detail);
        self
    }

    pub(crate) fn shaping_failure(range: Range<usize>, detail: &'static str) -> Self {
        Self::new(ErrorKind::ShapingFailure, range).with_detail(detail)
    }

    pub(crate) fn invalid_style_run(range: Range<usize>, detail: &'static str) -> Self {
        Self::new(ErrorKind::InvalidStyleRun, range).with_detail(detail)
    }

    pub(crate) fn cluster_overflow(range: Range<usize>) -> Self {
        Self::new(ErrorKind::ClusterOverflow, range)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.range.start, self.range.end);
        match self.kind {
            ErrorKind::ShapingFailure => write!(f, "failed to shape text {start}..{end}")?,
            ErrorKind::InvalidStyleRun => write!(f, "invalid style run {start}..{end}")?,
            ErrorKind::ClusterOverflow => write!(
                f,
                "text {start}..{end} exceeds {} clusters or glyphs in a single run",
                u16::MAX
            )?,
            ErrorKind::InvalidEmSize => {
                write!(f, "em size for text {start}..{end} must be finite and positive")?;
            }
            ErrorKind::InvalidSlice => write!(f, "slice {start}..{end} out of bounds")?,
            ErrorKind::InvalidFont => f.write_str("unreadable font data")?,
            ErrorKind::InvalidBidiLevel => {
                write!(f, "invalid paragraph level for text {start}..{end}")?;
            }
            ErrorKind::InvalidDecoration => {
                write!(f, "invalid text decoration at {start}..{end}")?;
            }
        }
        if let Some(detail) = self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font engine rejected the buffer or the font program.
    ///
    /// Not retried internally. Callers may substitute a fallback typeface and
    /// shape again.
    ShapingFailure,

    /// Style runs or shaped runs were empty, overlapping, unsorted or out of
    /// range.
    InvalidStyleRun,

    /// A single shape call would produce cluster or glyph indices that do not
    /// fit in 16 bits. Callers must pre-chunk their input.
    ClusterOverflow,

    /// The requested em size was zero, negative or not finite.
    InvalidEmSize,

    /// A slice range was outside of its text buffer.
    InvalidSlice,

    /// Font metrics could not be read from the font program.
    InvalidFont,

    /// A paragraph embedding level was above the maximum bidi depth.
    InvalidBidiLevel,

    /// A text decoration list named an unknown or repeated location.
    InvalidDecoration,
}
