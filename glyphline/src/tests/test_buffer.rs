// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::Script;

use crate::{
    CharSlice, ErrorKind, FontMetrics, ShapeContext, ShapeableChars, TextBuffer,
    TextRunProperties, Typeface,
};

use super::utils::{metrics, test_typeface, utf16, MockEngine};

fn group<'a>(
    text: &'a [u16],
    range: core::ops::Range<usize>,
    typeface: &'a Typeface,
    em_size: f64,
) -> ShapeableChars<'a> {
    ShapeableChars::new(
        CharSlice::from_range(text, range).unwrap(),
        TextRunProperties::new(typeface, em_size),
        Script::Latin,
        0,
    )
}

#[test]
fn adjacent_compatible_groups_merge() {
    let typeface = test_typeface(metrics());
    let text = utf16("hello world");
    let mut buffer = TextBuffer::new();

    assert!(buffer.try_add(group(&text, 0..5, &typeface, 16.0)));
    assert!(buffer.try_add(group(&text, 5..11, &typeface, 16.0)));
    assert_eq!(buffer.groups().len(), 2);
    assert_eq!(buffer.text().map(|text| text.range()), Some(0..11));
}

#[test]
fn incompatible_groups_leave_the_buffer_unchanged() {
    let typeface = test_typeface(metrics());
    let other_typeface = test_typeface(metrics());
    let text = utf16("hello world");
    let mut buffer = TextBuffer::new();
    assert!(buffer.try_add(group(&text, 0..5, &typeface, 16.0)));
    let before = buffer.clone();

    let different_em_size = group(&text, 5..11, &typeface, 18.0);
    let different_typeface = group(&text, 5..11, &other_typeface, 16.0);
    let mut different_script = group(&text, 5..11, &typeface, 16.0);
    different_script.script = Script::Greek;
    let mut different_level = group(&text, 5..11, &typeface, 16.0);
    different_level.bidi_level = 1;
    let mut different_culture = group(&text, 5..11, &typeface, 16.0);
    different_culture.properties.culture = Some("fr".parse().unwrap());
    let not_adjacent = group(&text, 6..11, &typeface, 16.0);

    for chars in [
        different_em_size,
        different_typeface,
        different_script,
        different_level,
        different_culture,
        not_adjacent,
    ] {
        assert!(!buffer.try_add(chars.clone()), "{chars:?}");
        assert_eq!(buffer.groups(), before.groups());
        assert!(!buffer.is_shaped());
    }
}

#[test]
fn same_blob_with_other_metrics_does_not_merge() {
    let typeface = test_typeface(metrics());
    let condensed = Typeface::with_metrics(
        typeface.font().clone(),
        FontMetrics {
            line_gap: 0.,
            ..metrics()
        },
    );
    let same = typeface.clone();
    let text = utf16("hello world");
    let mut buffer = TextBuffer::new();

    assert!(buffer.try_add(group(&text, 0..5, &typeface, 16.0)));
    assert!(!buffer.try_add(group(&text, 5..11, &condensed, 16.0)));
    assert!(buffer.try_add(group(&text, 5..11, &same, 16.0)));
}

#[test]
fn groups_from_another_buffer_are_rejected() {
    let typeface = test_typeface(metrics());
    let first = utf16("hello world");
    let second = utf16("hello world");
    let mut buffer = TextBuffer::new();

    assert!(buffer.try_add(group(&first, 0..5, &typeface, 16.0)));
    assert!(!buffer.try_add(group(&second, 5..11, &typeface, 16.0)));
}

#[test]
fn fresh_buffer_accepts_any_group() {
    let typeface = test_typeface(metrics());
    let text = utf16("hello world");
    let mut buffer = TextBuffer::new();

    assert!(buffer.is_empty());
    assert!(buffer.try_add(group(&text, 3..7, &typeface, 99.0)));
    assert!(!buffer.is_empty());
}

#[test]
fn shaped_buffer_is_final() {
    let typeface = test_typeface(metrics());
    let text = utf16("hello world");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let mut buffer = TextBuffer::new();
    assert!(buffer.try_add(group(&text, 0..5, &typeface, 16.0)));
    assert!(buffer.try_add(group(&text, 5..11, &typeface, 16.0)));

    let run = buffer.shape(&mut scx).unwrap().expect("buffer has text");
    assert_eq!(scx.engine().calls, 1, "merged groups shape once");
    assert_eq!(run.characters().range(), 0..11);
    assert_eq!(run.len(), 11);

    assert!(buffer.is_shaped());
    assert!(!buffer.try_add(group(&text, 0..5, &typeface, 16.0)));
}

#[test]
fn empty_buffer_shapes_to_nothing() {
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let mut buffer = TextBuffer::new();

    assert!(buffer.shape(&mut scx).unwrap().is_none());
    assert_eq!(scx.engine().calls, 0);
    assert!(buffer.is_shaped());
}

#[test]
fn failed_shaping_keeps_the_buffer_open() {
    let typeface = test_typeface(metrics());
    let text = utf16("hello");
    let mut scx = ShapeContext::with_engine(MockEngine {
        fail: true,
        ..MockEngine::default()
    });
    let mut buffer = TextBuffer::new();
    assert!(buffer.try_add(group(&text, 0..5, &typeface, 16.0)));

    let err = buffer.shape(&mut scx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapingFailure);
    assert!(!buffer.is_shaped());
}
