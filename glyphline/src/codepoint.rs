// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTF-16 codepoint reading.

/// A decoded Unicode scalar value and the number of UTF-16 code units it
/// occupies in its source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Codepoint {
    /// The decoded scalar value.
    pub value: char,
    /// Width in UTF-16 code units (1 or 2).
    pub utf16_len: usize,
}

impl Codepoint {
    /// Line feed.
    pub const LINE_FEED: char = '\u{000A}';
    /// Carriage return.
    pub const CARRIAGE_RETURN: char = '\u{000D}';
    /// Zero width non-joiner, substituted for break characters before shaping.
    pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
    /// Zero width joiner, the second half of a substituted CR LF pair.
    pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

    /// Decodes the codepoint starting at `index` of `text`.
    ///
    /// Unpaired surrogates decode to U+FFFD with a width of one code unit.
    /// Returns `None` if `index` is out of bounds.
    pub fn read_at(text: &[u16], index: usize) -> Option<Self> {
        let units = text.get(index..)?;
        let decoded = char::decode_utf16(units.iter().copied()).next()?;
        Some(match decoded {
            Ok(value) => Self {
                value,
                utf16_len: value.len_utf16(),
            },
            Err(_) => Self {
                value: char::REPLACEMENT_CHARACTER,
                utf16_len: 1,
            },
        })
    }

    /// Returns `true` for mandatory line and paragraph break characters.
    pub fn is_break_char(&self) -> bool {
        matches!(
            self.value,
            '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
        )
    }

    /// Returns `true` if `self` followed by `next` forms a CR LF or LF CR pair.
    pub fn pairs_with(&self, next: &Self) -> bool {
        matches!(
            (self.value, next.value),
            (Self::CARRIAGE_RETURN, Self::LINE_FEED) | (Self::LINE_FEED, Self::CARRIAGE_RETURN)
        )
    }
}

/// Iterator over the codepoints of a UTF-16 buffer, yielding each codepoint
/// with its offset relative to the start of the buffer.
#[derive(Clone, Debug)]
pub struct Codepoints<'a> {
    text: &'a [u16],
    index: usize,
}

impl<'a> Codepoints<'a> {
    pub(crate) fn new(text: &'a [u16]) -> Self {
        Self { text, index: 0 }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = (usize, Codepoint);

    fn next(&mut self) -> Option<Self::Item> {
        let codepoint = Codepoint::read_at(self.text, self.index)?;
        let offset = self.index;
        self.index += codepoint.utf16_len;
        Some((offset, codepoint))
    }
}
