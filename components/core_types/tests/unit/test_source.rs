//! Unit tests for SourcePosition

use core_types::SourcePosition;

#[test]
fn test_source_position_start() {
    let pos = SourcePosition::start();

    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 1);
    assert_eq!(pos.offset, 0);
}

#[test]
fn test_source_position_is_copy() {
    let pos1 = SourcePosition::new(42, 7, 1000);
    let mut pos2 = pos1;
    pos2.advance('x', 1);

    assert_eq!(pos1.column, 7);
    assert_eq!(pos2.column, 8);
}

#[test]
fn test_line_break_resets_column() {
    let mut pos = SourcePosition::start();
    for ch in "ab\ncd".chars() {
        pos.advance(ch, 1);
    }

    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 3);
    assert_eq!(pos.offset, 5);
}

#[test]
fn test_positions_advance_monotonically() {
    let mut pos = SourcePosition::start();
    let mut previous = pos.offset;
    for ch in "x\n\ny z".chars() {
        pos.advance(ch, ch.len_utf8());
        assert!(pos.offset > previous);
        previous = pos.offset;
    }
}

#[test]
fn test_source_position_display() {
    let pos = SourcePosition::new(2, 3, 10);
    assert_eq!(pos.to_string(), "2:3");
}
