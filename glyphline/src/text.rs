// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::codepoint::Codepoints;
use crate::{Error, ErrorKind};

/// An immutable view into a caller-owned UTF-16 text buffer.
///
/// Offsets are expressed in UTF-16 code units and are absolute with respect to
/// the whole buffer, so clusters produced from a slice map directly back into
/// the owning text. A slice never copies the underlying storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSlice<'a> {
    text: &'a [u16],
    start: usize,
    len: usize,
}

impl<'a> CharSlice<'a> {
    /// Creates a slice covering the whole of `text`.
    pub fn new(text: &'a [u16]) -> Self {
        Self {
            text,
            start: 0,
            len: text.len(),
        }
    }

    /// Creates a slice covering `range` of `text`.
    pub fn from_range(text: &'a [u16], range: Range<usize>) -> Result<Self, Error> {
        if range.start > range.end || range.end > text.len() {
            return Err(Error::new(ErrorKind::InvalidSlice, range));
        }
        Ok(Self {
            text,
            start: range.start,
            len: range.end - range.start,
        })
    }

    /// Returns a sub-slice for an absolute `range`, which must lie within this
    /// slice.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, Error> {
        if range.start < self.start || range.start > range.end || range.end > self.end() {
            return Err(Error::new(ErrorKind::InvalidSlice, range));
        }
        Ok(Self {
            text: self.text,
            start: range.start,
            len: range.end - range.start,
        })
    }

    /// Absolute offset of the first code unit.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of code units in the slice.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Absolute offset one past the last code unit.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The absolute range covered by the slice.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The code units covered by the slice.
    pub fn as_slice(&self) -> &'a [u16] {
        &self.text[self.range()]
    }

    /// The whole buffer this slice is a view into.
    pub fn buffer(&self) -> &'a [u16] {
        self.text
    }

    /// Returns an iterator over the codepoints of the slice.
    pub fn codepoints(&self) -> Codepoints<'a> {
        Codepoints::new(self.as_slice())
    }

    /// Returns `true` if `other` views the same buffer and starts exactly where
    /// this slice ends.
    pub(crate) fn is_followed_by(&self, other: &Self) -> bool {
        core::ptr::eq(self.text, other.text) && self.end() == other.start
    }

    /// Extends this slice to also cover `other`, which must directly follow it.
    pub(crate) fn merge(&self, other: &Self) -> Self {
        debug_assert!(self.is_followed_by(other), "merged slices must be adjacent");
        Self {
            text: self.text,
            start: self.start,
            len: self.len + other.len,
        }
    }
}
