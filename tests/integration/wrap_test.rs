//! Behavioral properties of the wrapping library

use ansiwrap::{hard_wrap, visible_width, wrap_str, wrap_with, WordWrap, WrapOptions};

use crate::helpers::{load_fixture, strip};

const TEXT: &str = "Terminal output often carries color codes that a naive wrapper would \
                    count as visible characters, so lines come out far too short.";

/// Lines wider than `limit` must consist of a single word.
fn assert_lines_fit(output: &str, limit: usize) {
    for line in strip(output).split('\n') {
        let width = visible_width(line);
        assert!(
            width <= limit || !line.trim().contains(char::is_whitespace),
            "line {:?} is {} wide, limit {}",
            line,
            width,
            limit
        );
    }
}

// ============================================================================
// Width Properties
// ============================================================================

#[test]
fn lines_never_exceed_limit_except_single_words() {
    let styled = load_fixture("styled.txt");
    let inputs = [
        TEXT,
        styled.as_str(),
        "日本語のテキストを 折り返す テスト です 漢字 かな",
        "hello world-wide state-of-the-art tools - and a well-known x -y edge",
        "\x1b[32mself-contained\x1b[0m re-run of the \x1b[1mlong-lived\x1b[22m cache-key",
    ];
    for text in inputs {
        for limit in 1..50 {
            assert_lines_fit(&wrap_str(text, limit), limit);
        }
    }
}

#[test]
fn hard_wrap_keeps_every_line_within_limit() {
    let text = format!("{} supercalifragilisticexpialidocious", TEXT);
    for limit in 2..50 {
        let output = hard_wrap(&text, limit, "    ");
        for line in output.split('\n') {
            assert!(visible_width(line) <= limit, "{:?} exceeds {}", line, limit);
        }
    }
}

#[test]
fn escape_sequences_do_not_move_breaks() {
    let styled = load_fixture("styled.txt");
    let plain = strip(&styled);
    for limit in 5..40 {
        assert_eq!(
            strip(&wrap_str(&styled, limit)),
            wrap_str(&plain, limit),
            "break positions differ at limit {}",
            limit
        );
    }
}

#[test]
fn rewrapping_plain_text_is_stable() {
    let paragraph = load_fixture("paragraph.txt");
    for limit in 8..60 {
        let once = wrap_str(&paragraph, limit);
        assert_eq!(wrap_str(&once, limit), once, "unstable at limit {}", limit);
    }
}

#[test]
fn zero_limit_is_passthrough() {
    let mut wrapper = WordWrap::new(0);
    let chunks: [&[u8]; 3] = [b"\x1b[0031mno ", b"wrapping\n\n   at", b" all\t\xff"];
    for chunk in chunks {
        wrapper.write(chunk).unwrap();
    }
    wrapper.finish().unwrap();
    assert_eq!(wrapper.result().unwrap(), chunks.concat().as_slice());
}

// ============================================================================
// Escape Normalization
// ============================================================================

#[test]
fn leading_zeros_are_normalized() {
    assert_eq!(wrap_str("\x1b[0031mred", 10), "\x1b[31mred");
}

#[test]
fn multi_attribute_reset_is_split() {
    assert_eq!(wrap_str("\x1b[31;0;32mok", 10), "\x1b[31;0m\x1b[32mok");
}

#[test]
fn style_is_restored_on_continuation_line() {
    let output = wrap_str("\x1b[31mthe quick brown fox", 10);
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "\x1b[31mthe quick\x1b[0m");
    assert!(lines[1].starts_with("\x1b[31m"));
    assert_eq!(strip(lines[1]), "brown fox");
}

#[test]
fn styled_fixture_layout() {
    let output = wrap_str(&load_fixture("styled.txt"), 20);
    assert_eq!(
        output,
        "\x1b[1mWarning:\x1b[22m the \x1b[33mbuild\x1b[0m\n\
         \x1b[33mcache\x1b[0m is stale and\n\
         will be rebuilt on\n\
         the next run\n"
    );
}

// ============================================================================
// Whitespace and Breakpoints
// ============================================================================

#[test]
fn whitespace_run_is_split_into_fill_full_and_remainder() {
    let options = WrapOptions::new(5).preserve_spaces(true);
    let output = wrap_with(options, &format!("abc{}", " ".repeat(12)));
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines, vec!["abc  ", "     ", "     "]);
}

#[test]
fn breakpoint_survives_the_break() {
    for limit in 3..12 {
        let output = wrap_str("wordA-wordB", limit);
        assert_eq!(output.replace('\n', ""), "wordA-wordB", "limit {}", limit);
    }
    assert_eq!(wrap_str("wordA-wordB", 8), "wordA-\nwordB");
}

#[test]
fn plain_paragraph_snapshot() {
    let output = wrap_str(&load_fixture("paragraph.txt"), 30);
    insta::assert_snapshot!(output.trim_end(), @r"
    Terminal output often carries
    color codes that a naive
    wrapper would count as
    visible characters. This file
    is plain text used to check
    that wrapping is
    stable when run twice at the
    same width.
    ");
}
