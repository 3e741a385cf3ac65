//! Tests for widgets/popup

use super::*;

const FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 2,
        y: 1,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, FRAME, 6, 0);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 4);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_below_anchor_with_offset() {
    let anchor = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, FRAME, 6, 1);

    assert_eq!(popup.x, 1);
    assert_eq!(popup.width, 38);
}

#[test]
fn test_popup_below_anchor_clipped_at_frame_bottom() {
    let anchor = Rect {
        x: 0,
        y: 18,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, FRAME, 6, 0);

    assert_eq!(popup.y, 21);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_below_anchor_at_bottom_edge_has_no_height() {
    let anchor = Rect {
        x: 0,
        y: 21,
        width: 40,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, FRAME, 6, 0);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_inset_rect() {
    let area = Rect {
        x: 5,
        y: 5,
        width: 20,
        height: 6,
    };

    let inner = inset_rect(area, 1, 1);

    assert_eq!(inner.x, 6);
    assert_eq!(inner.y, 6);
    assert_eq!(inner.width, 18);
    assert_eq!(inner.height, 4);
}

#[test]
fn test_inset_rect_saturates() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 1,
        height: 1,
    };

    let inner = inset_rect(area, 1, 1);

    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
