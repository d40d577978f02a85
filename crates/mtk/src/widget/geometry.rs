//! Preset widget sizes and placement helpers.
//!
//! Widgets are sized from a small set of presets ([`WidgetSize`] and
//! [`Shape`]) and positioned by transforms whose origin is the widget's
//! center. The helpers in this module compute child positions relative to
//! a parent's size or draw area, in screen space (y grows downward).

use mtk_render::{Point, Rect, Size, Transform2D};
use serde::{Deserialize, Serialize};

/// Preset size of a widget or font.
///
/// Presets are ordered from smallest to largest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Mini,
    Small,
    #[default]
    Medium,
    Big,
    Huge,
}

/// Outline of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangle,
    Square,
}

impl WidgetSize {
    const ORDER: [WidgetSize; 5] = [
        WidgetSize::Mini,
        WidgetSize::Small,
        WidgetSize::Medium,
        WidgetSize::Big,
        WidgetSize::Huge,
    ];

    /// The preset `steps` positions smaller, saturating at `Mini`.
    pub fn smaller(self, steps: usize) -> Self {
        let index = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[index.saturating_sub(steps)]
    }

    /// Button size for this preset and shape.
    pub fn button_size(self, shape: Shape) -> Size {
        match (shape, self) {
            (Shape::Square, WidgetSize::Mini) => Size::new(30.0, 30.0),
            (Shape::Square, WidgetSize::Small) => Size::new(45.0, 45.0),
            (Shape::Square, WidgetSize::Medium) => Size::new(60.0, 60.0),
            (Shape::Square, _) => Size::new(70.0, 70.0),
            (Shape::Rectangle, WidgetSize::Mini) => Size::new(30.0, 15.0),
            (Shape::Rectangle, WidgetSize::Small) => Size::new(70.0, 35.0),
            (Shape::Rectangle, WidgetSize::Medium) => Size::new(100.0, 50.0),
            (Shape::Rectangle, _) => Size::new(120.0, 70.0),
        }
    }

    /// Switch background size.
    pub fn switch_size(self) -> Size {
        match self {
            WidgetSize::Mini | WidgetSize::Small => Size::new(170.0, 50.0),
            WidgetSize::Medium => Size::new(210.0, 80.0),
            WidgetSize::Big => Size::new(260.0, 140.0),
            WidgetSize::Huge => Size::new(270.0, 130.0),
        }
    }

    /// Message window size. Currently the same for every preset.
    pub fn message_window_size(self) -> Size {
        Size::new(400.0, 300.0)
    }

    /// Slot list size. Currently the same for every preset.
    pub fn list_size(self) -> Size {
        Size::new(600.0, 500.0)
    }

    /// Slot size.
    pub fn slot_size(self) -> Size {
        match self {
            WidgetSize::Mini | WidgetSize::Small => Size::new(25.0, 25.0),
            WidgetSize::Medium => Size::new(30.0, 30.0),
            WidgetSize::Big | WidgetSize::Huge => Size::new(40.0, 40.0),
        }
    }

    /// Font pixel size.
    pub fn font_px(self) -> f32 {
        match self {
            WidgetSize::Mini => 10.0,
            WidgetSize::Small => 15.0,
            WidgetSize::Medium => 20.0,
            WidgetSize::Big | WidgetSize::Huge => 30.0,
        }
    }
}

/// Screen-space rectangle of a widget of `size` drawn with `transform`.
#[inline]
pub fn draw_area(transform: Transform2D, size: Size) -> Rect {
    Rect::from_center(transform.translation(), transform.transform_size(size))
}

/// Transform with the same scale as `transform`, centered at `center`.
#[inline]
pub fn place_at(transform: Transform2D, center: Point) -> Transform2D {
    let origin = transform.translation();
    transform.translated(center.x - origin.x, center.y - origin.y)
}

// =============================================================================
// Offsets inside a parent
// =============================================================================
//
// Each helper returns the offset from the parent's center to the center of a
// child of `child` size touching the named edge(s) of a `parent` sized box.

/// Child at the top-left corner.
pub fn move_tl(parent: Size, child: Size) -> Point {
    Point::new(
        (child.width - parent.width) / 2.0,
        (child.height - parent.height) / 2.0,
    )
}

/// Child at the top-right corner.
pub fn move_tr(parent: Size, child: Size) -> Point {
    Point::new(
        (parent.width - child.width) / 2.0,
        (child.height - parent.height) / 2.0,
    )
}

/// Child at the bottom-left corner.
pub fn move_bl(parent: Size, child: Size) -> Point {
    Point::new(
        (child.width - parent.width) / 2.0,
        (parent.height - child.height) / 2.0,
    )
}

/// Child at the bottom-right corner.
pub fn move_br(parent: Size, child: Size) -> Point {
    Point::new(
        (parent.width - child.width) / 2.0,
        (parent.height - child.height) / 2.0,
    )
}

/// Child centered along the top edge.
pub fn move_tc(parent: Size, child: Size) -> Point {
    Point::new(0.0, (child.height - parent.height) / 2.0)
}

/// Child centered along the bottom edge.
pub fn move_bc(parent: Size, child: Size) -> Point {
    Point::new(0.0, (parent.height - child.height) / 2.0)
}

// =============================================================================
// Positions next to a draw area
// =============================================================================

/// Center of a `child` placed left of `area`, `margin` pixels away.
pub fn left_of(area: Rect, child: Size, margin: f32) -> Point {
    Point::new(
        area.left() - margin - child.width / 2.0,
        area.center().y,
    )
}

/// Center of a `child` placed right of `area`, `margin` pixels away.
pub fn right_of(area: Rect, child: Size, margin: f32) -> Point {
    Point::new(
        area.right() + margin + child.width / 2.0,
        area.center().y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smaller_saturates() {
        assert_eq!(WidgetSize::Huge.smaller(2), WidgetSize::Medium);
        assert_eq!(WidgetSize::Small.smaller(2), WidgetSize::Mini);
        assert_eq!(WidgetSize::Mini.smaller(0), WidgetSize::Mini);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            WidgetSize::Small.button_size(Shape::Square),
            Size::new(45.0, 45.0)
        );
        assert_eq!(
            WidgetSize::Huge.button_size(Shape::Rectangle),
            Size::new(120.0, 70.0)
        );
        assert_eq!(WidgetSize::Mini.switch_size(), Size::new(170.0, 50.0));
        assert_eq!(WidgetSize::Huge.slot_size(), Size::new(40.0, 40.0));
        assert_eq!(WidgetSize::Small.font_px(), 15.0);
        assert!(WidgetSize::Mini < WidgetSize::Huge);
    }

    #[test]
    fn test_draw_area_follows_scale() {
        let t = Transform2D::translate(100.0, 50.0).scaled(2.0);
        let area = draw_area(t, Size::new(10.0, 4.0));
        assert_eq!(area, Rect::new(90.0, 46.0, 20.0, 8.0));
    }

    #[test]
    fn test_corner_offsets() {
        let parent = Size::new(100.0, 60.0);
        let child = Size::new(20.0, 10.0);
        assert_eq!(move_tl(parent, child), Point::new(-40.0, -25.0));
        assert_eq!(move_br(parent, child), Point::new(40.0, 25.0));
        assert_eq!(move_tc(parent, child), Point::new(0.0, -25.0));
        assert_eq!(move_bc(parent, child), Point::new(0.0, 25.0));
    }

    #[test]
    fn test_side_positions() {
        let area = Rect::new(100.0, 100.0, 50.0, 20.0);
        let child = Size::new(10.0, 10.0);
        assert_eq!(left_of(area, child, 10.0), Point::new(85.0, 110.0));
        assert_eq!(right_of(area, child, 10.0), Point::new(165.0, 110.0));
    }

    #[test]
    fn test_place_at_keeps_scale() {
        let t = Transform2D::translate(10.0, 10.0).scaled(3.0);
        let placed = place_at(t, Point::new(50.0, 70.0));
        assert_eq!(placed.translation(), Point::new(50.0, 70.0));
        assert_eq!(placed.scale_factors(), (3.0, 3.0));
    }
}
