// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulation of compatible character groups before shaping.

use icu_properties::props::Script;
use smallvec::SmallVec;

use crate::util::nearly_eq;
use crate::{CharSlice, Error, GlyphRun, ShapeContext, ShapingEngine, TextRunProperties};

/// A group of characters sharing style, script and bidi level.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeableChars<'a> {
    /// The characters.
    pub slice: CharSlice<'a>,
    /// Style of the characters.
    pub properties: TextRunProperties<'a>,
    /// Resolved Unicode script.
    pub script: Script,
    /// Resolved bidi embedding level.
    pub bidi_level: u8,
}

impl<'a> ShapeableChars<'a> {
    /// Creates a group.
    pub fn new(
        slice: CharSlice<'a>,
        properties: TextRunProperties<'a>,
        script: Script,
        bidi_level: u8,
    ) -> Self {
        Self {
            slice,
            properties,
            script,
            bidi_level,
        }
    }

    /// Returns `true` if both groups can be shaped as a single unit: same
    /// typeface, em size, culture, script and bidi level.
    pub fn can_shape_together(&self, other: &Self) -> bool {
        self.properties.typeface == other.properties.typeface
            && nearly_eq(self.properties.em_size, other.properties.em_size)
            && self.properties.culture == other.properties.culture
            && self.script == other.script
            && self.bidi_level == other.bidi_level
    }
}

/// Accumulates character groups that can be shaped together.
///
/// Groups are accepted while they are compatible with the group added last and
/// directly follow it in the same text. Once shaped, the buffer is final and no
/// further groups are accepted.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer<'a> {
    groups: SmallVec<[ShapeableChars<'a>; 1]>,
    is_shaped: bool,
}

impl<'a> TextBuffer<'a> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `chars` to the pending unit.
    ///
    /// Returns `false`, leaving the buffer unchanged, when the buffer has
    /// already been shaped or when `chars` cannot be shaped together with the
    /// current group. The caller should then shape this buffer and start a new
    /// one.
    pub fn try_add(&mut self, chars: ShapeableChars<'a>) -> bool {
        if self.is_shaped {
            return false;
        }
        if let Some(current) = self.groups.last() {
            if !current.can_shape_together(&chars) || !current.slice.is_followed_by(&chars.slice) {
                return false;
            }
        }
        self.groups.push(chars);
        true
    }

    /// Returns `true` once the buffer has been shaped.
    pub fn is_shaped(&self) -> bool {
        self.is_shaped
    }

    /// Returns `true` if no group has been added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The accumulated groups in order.
    pub fn groups(&self) -> &[ShapeableChars<'a>] {
        &self.groups
    }

    /// The text covered by all groups.
    pub fn text(&self) -> Option<CharSlice<'a>> {
        let (first, rest) = self.groups.split_first()?;
        Some(
            rest.iter()
                .fold(first.slice, |text, group| text.merge(&group.slice)),
        )
    }

    /// Shapes the accumulated text as a single run and marks the buffer final.
    ///
    /// Returns `None` for an empty buffer. On failure the buffer is left
    /// unshaped.
    pub fn shape<E: ShapingEngine>(
        &mut self,
        scx: &mut ShapeContext<E>,
    ) -> Result<Option<GlyphRun<'a>>, Error> {
        let (Some(text), Some(first)) = (self.text(), self.groups.first()) else {
            self.is_shaped = true;
            return Ok(None);
        };
        let properties = &first.properties;
        log::debug!(
            "flushing {} group(s) covering {:?}",
            self.groups.len(),
            text.range()
        );
        let run = scx.shape_text(
            text,
            properties.typeface,
            properties.em_size,
            properties.culture.as_ref(),
        )?;
        self.is_shaped = true;
        Ok(Some(run))
    }
}
