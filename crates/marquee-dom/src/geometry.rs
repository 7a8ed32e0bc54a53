//! Page geometry: rectangles and visible-fraction math.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Rectangle area. Degenerate rects report zero.
    pub fn area(&self) -> f64 {
        (self.width.max(0.0)) * (self.height.max(0.0))
    }

    /// Intersection with another rectangle, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Fraction of this rectangle's area that falls inside `region`,
    /// in `0.0..=1.0`. A degenerate rectangle reports 0.0.
    pub fn visible_fraction(&self, region: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        match self.intersection(region) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }

    /// This rectangle with its bottom edge pulled inward by `margin`.
    ///
    /// Used for the reveal detection region: entries fire slightly before
    /// an element fully clears the physical viewport bottom.
    pub fn shrink_bottom(&self, margin: f64) -> Rect {
        Rect::new(self.x, self.y, self.width, (self.height - margin).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_overlap_and_miss() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap, Rect::new(50.0, 50.0, 50.0, 50.0));

        let far = Rect::new(500.0, 500.0, 10.0, 10.0);
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn visible_fraction_ranges() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);

        // Fully inside
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!((inner.visible_fraction(&region) - 1.0).abs() < 1e-9);

        // Half inside (straddles the bottom edge)
        let straddle = Rect::new(0.0, 80.0, 10.0, 40.0);
        assert!((straddle.visible_fraction(&region) - 0.5).abs() < 1e-9);

        // Fully outside
        let outside = Rect::new(0.0, 200.0, 10.0, 10.0);
        assert_eq!(outside.visible_fraction(&region), 0.0);
    }

    #[test]
    fn degenerate_rect_is_never_visible() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(empty.visible_fraction(&region), 0.0);
    }

    #[test]
    fn shrink_bottom_clamps_at_zero() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(r.shrink_bottom(20.0).height, 30.0);
        assert_eq!(r.shrink_bottom(80.0).height, 0.0);
    }
}
