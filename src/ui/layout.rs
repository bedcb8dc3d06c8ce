use serde::{Deserialize, Serialize};

use crate::ui::theme::{
    BAR_HEIGHT, BAR_WIDTH, BUTTON_HEIGHT, BUTTON_SPACING, INSET_HORIZONTAL, INSET_VERTICAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Geometry of the bar inside the root view, in view-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLayout {
    pub bar: Rect,
    pub buttons: Vec<Rect>,
}

impl BarLayout {
    /// Centers the fixed-size bar in `bounds` and splits its content area
    /// into `item_count` equal buttons.
    ///
    /// Only the size of `bounds` matters; the origin is the host's concern.
    pub fn compute(bounds: Rect, item_count: usize) -> Self {
        let bar = Rect::new(
            (bounds.width - BAR_WIDTH) / 2.0,
            (bounds.height - BAR_HEIGHT) / 2.0,
            BAR_WIDTH,
            BAR_HEIGHT,
        );

        let content_width = BAR_WIDTH - 2.0 * INSET_HORIZONTAL;
        let gaps = item_count.saturating_sub(1) as f64 * BUTTON_SPACING;
        let button_width = if item_count == 0 {
            0.0
        } else {
            ((content_width - gaps) / item_count as f64).max(0.0)
        };

        let buttons = (0..item_count)
            .map(|i| {
                Rect::new(
                    bar.x + INSET_HORIZONTAL + i as f64 * (button_width + BUTTON_SPACING),
                    bar.y + INSET_VERTICAL,
                    button_width,
                    BUTTON_HEIGHT,
                )
            })
            .collect();

        Self { bar, buttons }
    }

    /// Maps a pointer location to the index of the button under it.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.buttons.iter().position(|button| button.contains(point))
    }
}
