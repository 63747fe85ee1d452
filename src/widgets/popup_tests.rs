//! Tests for widgets/popup

use super::*;

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

#[test]
fn test_popup_below_point() {
    let popup = popup_at_point(Position::new(10, 1), 20, 6, screen());

    assert_eq!(popup.x, 10);
    assert_eq!(popup.y, 2);
    assert_eq!(popup.width, 20);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_flips_above_when_no_room_below() {
    let popup = popup_at_point(Position::new(10, 20), 20, 6, screen());

    assert_eq!(popup.y, 14);
    assert_eq!(popup.height, 6);
}

#[test]
fn test_popup_clipped_to_larger_side() {
    // 3 rows below, 20 above: goes above, clipped to 20
    let popup = popup_at_point(Position::new(0, 20), 10, 30, screen());
    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 20);

    // 21 rows below, 2 above: stays below, clipped to 21
    let popup = popup_at_point(Position::new(0, 2), 10, 30, screen());
    assert_eq!(popup.y, 3);
    assert_eq!(popup.height, 21);
}

#[test]
fn test_popup_shifted_left_at_right_edge() {
    let popup = popup_at_point(Position::new(75, 1), 20, 4, screen());

    assert_eq!(popup.x, 60);
    assert_eq!(popup.width, 20);
}

#[test]
fn test_popup_wider_than_bounds_is_clamped() {
    let popup = popup_at_point(Position::new(5, 1), 200, 4, screen());

    assert_eq!(popup.x, 0);
    assert_eq!(popup.width, 80);
}

#[test]
fn test_inset_rect_basic() {
    let area = Rect {
        x: 10,
        y: 20,
        width: 100,
        height: 50,
    };

    let inset = inset_rect(area, 5, 3);

    assert_eq!(inset.x, 15); // 10 + 5
    assert_eq!(inset.y, 23); // 20 + 3
    assert_eq!(inset.width, 90); // 100 - 10
    assert_eq!(inset.height, 44); // 50 - 6
}

#[test]
fn test_inset_rect_saturates() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };

    let inset = inset_rect(area, 20, 20);

    assert_eq!(inset.width, 0);
    assert_eq!(inset.height, 0);
}

#[test]
fn test_inner_row_at() {
    let area = Rect {
        x: 4,
        y: 2,
        width: 10,
        height: 5,
    };

    assert_eq!(inner_row_at(area, 5, 3), Some(0));
    assert_eq!(inner_row_at(area, 12, 5), Some(2));
    // Border cells are outside
    assert_eq!(inner_row_at(area, 4, 3), None);
    assert_eq!(inner_row_at(area, 5, 2), None);
    assert_eq!(inner_row_at(area, 5, 6), None);
    assert_eq!(inner_row_at(area, 30, 30), None);
}
