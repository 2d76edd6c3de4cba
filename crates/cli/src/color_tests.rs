// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn escape_sequence_targets_the_256_color_palette() {
    assert_eq!(fg256(74), "\x1b[38;5;74m");
}

#[test]
fn paint_wraps_text_with_reset() {
    // Only check the colored form when a terminal (or COLOR=1) enables it;
    // in CI the plain branch is what runs.
    let painted = paint(codes::GOOD, "ok");
    assert!(painted.contains("ok"));
    if painted != "ok" {
        assert!(painted.starts_with("\x1b[38;5;114m"));
        assert!(painted.ends_with(RESET));
    }
}
