// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shaping and line metrics.
//!
//! Glyphline turns UTF-16 text annotated with style runs into [`GlyphRun`]s
//! (glyph indices, advances, offsets and cluster mappings in
//! device-independent units) and folds the runs of a line into
//! [`TextLineMetrics`].
//!
//! Shaping goes through a [`ShapeContext`], which owns the shaping engine and
//! its scratch state. Each thread that shapes text should own its own context.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use glyphline::{Blob, CharSlice, FontData, ShapeContext, Typeface};
//! use glyphline::{TextLineMetrics, TextParagraphProperties};
//!
//! # fn load() -> Result<(), glyphline::Error> {
//! # let bytes: Vec<u8> = Vec::new();
//! let typeface = Typeface::new(FontData::new(Blob::new(Arc::new(bytes)), 0))?;
//! let text: Vec<u16> = "Hello, world".encode_utf16().collect();
//!
//! let mut scx = ShapeContext::new();
//! let run = scx.shape_text(CharSlice::new(&text), &typeface, 16.0, None)?;
//!
//! let metrics = TextLineMetrics::compute(
//!     core::slice::from_ref(&run),
//!     0..text.len(),
//!     200.0,
//!     &TextParagraphProperties::default(),
//! )?;
//! assert!(!metrics.has_overflowed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library. Enables reading the
//!   default culture from the process environment.
//! - `libm`: Use floating point implementations from `libm` for `no_std` builds.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyphline requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use harfrust;
pub use icu_locale_core::LanguageIdentifier;
pub use linebender_resource_handle::{Blob, FontData};
pub use peniko::kurbo;

mod buffer;
mod codepoint;
mod decoration;
mod error;
mod font;
mod glyph_run;
mod itemize;
mod line;
mod lru_cache;
mod shape;
mod style;
mod text;
mod util;

#[cfg(test)]
mod tests;

pub use buffer::{ShapeableChars, TextBuffer};
pub use codepoint::{Codepoint, Codepoints};
pub use decoration::{
    decorations_for_run, DecorationOp, TextDecoration, TextDecorationLocation, TextDecorationUnit,
    TextDecorations,
};
pub use error::{Error, ErrorKind};
pub use font::{FontMetrics, ScaledFontMetrics, Typeface, TypefaceId};
pub use glyph_run::GlyphRun;
pub use line::TextLineMetrics;
pub use shape::{HarfrustEngine, ShapeContext, ShapeInput, ShapeOutput, ShapedGlyph, ShapingEngine};
pub use style::{StyleRun, TextParagraphProperties, TextRunProperties};
pub use text::CharSlice;
