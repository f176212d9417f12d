//! Circle vs axis-aligned rectangle overlap
//!
//! Rectangles are stored by their top-left corner plus size, the way the
//! player's sprite box is laid out on screen.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64, // left edge
    pub y: f64, // top edge
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top_left: NVec2, size: NVec2) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.x,
            height: size.y,
        }
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }
}

/// True when the circle touches or overlaps the rectangle
pub fn circle_rect_overlap(center: NVec2, radius: f64, rect: &Rect) -> bool {
    let half_w = 0.5 * rect.width;
    let half_h = 0.5 * rect.height;
    let c = rect.center();

    let dx = (center.x - c.x).abs();
    let dy = (center.y - c.y).abs();

    if dx > half_w + radius || dy > half_h + radius {
        return false;
    }
    if dx <= half_w || dy <= half_h {
        return true;
    }

    // circle center sits diagonally off a corner
    let cx = dx - half_w;
    let cy = dy - half_h;
    cx * cx + cy * cy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Rect {
        Rect::new(NVec2::new(0.0, 0.0), NVec2::new(10.0, 10.0))
    }

    #[test]
    fn center_inside_overlaps() {
        assert!(circle_rect_overlap(NVec2::new(5.0, 5.0), 1.0, &unit_box()));
    }

    #[test]
    fn edge_contact_counts() {
        // circle reaches exactly to the right edge
        assert!(circle_rect_overlap(NVec2::new(12.0, 5.0), 2.0, &unit_box()));
        assert!(!circle_rect_overlap(NVec2::new(12.5, 5.0), 2.0, &unit_box()));
    }

    #[test]
    fn corner_uses_true_distance() {
        // (13, 13) is 3*sqrt(2) ~ 4.24 from the corner (10, 10)
        assert!(!circle_rect_overlap(NVec2::new(13.0, 13.0), 4.0, &unit_box()));
        assert!(circle_rect_overlap(NVec2::new(13.0, 13.0), 4.5, &unit_box()));
    }
}
