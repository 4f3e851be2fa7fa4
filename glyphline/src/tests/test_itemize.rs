// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use crate::{CharSlice, ErrorKind, ShapeContext, StyleRun, TextRunProperties};

use super::utils::{metrics, test_typeface, utf16, MockEngine};

fn ranges(runs: &[crate::GlyphRun<'_>]) -> Vec<core::ops::Range<usize>> {
    runs.iter().map(|run| run.characters().range()).collect()
}

#[test]
fn uniform_text_is_one_run() {
    let typeface = test_typeface(metrics());
    let text = utf16("Hello, world!");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);

    let runs = scx
        .shape_runs(
            CharSlice::new(&text),
            &[StyleRun::new(0..13, style)],
            None,
        )
        .unwrap();

    assert_eq!(ranges(&runs), vec![0..13]);
    assert_eq!(scx.engine().calls, 1);
}

#[test]
fn equal_adjacent_styles_merge() {
    let typeface = test_typeface(metrics());
    let text = utf16("Hello world");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);

    let runs = scx
        .shape_runs(
            CharSlice::new(&text),
            &[
                StyleRun::new(0..5, style.clone()),
                StyleRun::new(5..11, style),
            ],
            None,
        )
        .unwrap();

    assert_eq!(ranges(&runs), vec![0..11]);
}

#[test]
fn typeface_changes_split() {
    let regular = test_typeface(metrics());
    let bold = test_typeface(metrics());
    let text = utf16("Hello world");
    let mut scx = ShapeContext::with_engine(MockEngine::default());

    let runs = scx
        .shape_runs(
            CharSlice::new(&text),
            &[
                StyleRun::new(0..6, TextRunProperties::new(&regular, 16.0)),
                StyleRun::new(6..11, TextRunProperties::new(&bold, 16.0)),
            ],
            None,
        )
        .unwrap();

    assert_eq!(ranges(&runs), vec![0..6, 6..11]);
    assert_eq!(runs[1].typeface(), &bold);
    assert_eq!(scx.engine().calls, 2);
}

#[test]
fn script_and_direction_changes_split() {
    let typeface = test_typeface(metrics());
    // Latin, then Hebrew (right to left), then Latin again.
    let text = utf16("abc \u{5D0}\u{5D1}def");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);

    let runs = scx
        .shape_runs(
            CharSlice::new(&text),
            &[StyleRun::new(0..text.len(), style)],
            Some(0),
        )
        .unwrap();

    assert_eq!(ranges(&runs), vec![0..4, 4..6, 6..9]);
}

#[test]
fn uncovered_text_is_skipped() {
    let typeface = test_typeface(metrics());
    let text = utf16("abcdef");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);

    let runs = scx
        .shape_runs(
            CharSlice::new(&text),
            &[
                StyleRun::new(0..2, style.clone()),
                StyleRun::new(4..6, style),
            ],
            None,
        )
        .unwrap();

    assert_eq!(ranges(&runs), vec![0..2, 4..6]);
}

#[test]
fn invalid_style_runs_fail_before_shaping() {
    let typeface = test_typeface(metrics());
    let text = utf16("abcdef");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);

    let err = scx
        .shape_runs(
            CharSlice::new(&text),
            &[
                StyleRun::new(0..4, style.clone()),
                StyleRun::new(2..6, style),
            ],
            None,
        )
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidStyleRun);
    assert_eq!(scx.engine().calls, 0);
}

#[test]
fn shaping_errors_propagate() {
    let typeface = test_typeface(metrics());
    let text = utf16("abc");
    let mut scx = ShapeContext::with_engine(MockEngine {
        fail: true,
        ..MockEngine::default()
    });
    let style = TextRunProperties::new(&typeface, 16.0);

    let err = scx
        .shape_runs(CharSlice::new(&text), &[StyleRun::new(0..3, style)], None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapingFailure);
}

#[test]
fn paragraph_level_above_the_maximum_depth_is_rejected() {
    let typeface = test_typeface(metrics());
    let text = utf16("abc");
    let mut scx = ShapeContext::with_engine(MockEngine::default());
    let style = TextRunProperties::new(&typeface, 16.0);
    let runs = [StyleRun::new(0..3, style)];

    for level in [126, 200] {
        let err = scx
            .shape_runs(CharSlice::new(&text), &runs, Some(level))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBidiLevel);
        assert_eq!(err.range(), 0..3);
    }
    assert_eq!(scx.engine().calls, 0);

    let shaped = scx
        .shape_runs(CharSlice::new(&text), &runs, Some(125))
        .unwrap();
    assert_eq!(ranges(&shaped), vec![0..3]);
}
