//! Monte-Carlo estimation of the area covered by an intersection of
//! circles, sampled over an axis-aligned bounding box.

use rand::Rng;

/// Circle given by center and radius. Membership is boundary inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Circle {
        Circle { x, y, r }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.x) * (x - self.x) + (y - self.y) * (y - self.y) <= self.r * self.r
    }
}

/// Axis-aligned sampling domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Tight box around a set of circles.
    pub fn around(circles: &[Circle]) -> BoundingBox {
        assert!(!circles.is_empty(), "bounding box needs at least one circle");
        let mut bounds = BoundingBox {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for circle in circles {
            bounds.min_x = bounds.min_x.min(circle.x - circle.r);
            bounds.min_y = bounds.min_y.min(circle.y - circle.r);
            bounds.max_x = bounds.max_x.max(circle.x + circle.r);
            bounds.max_y = bounds.max_y.max(circle.y + circle.r);
        }
        bounds
    }

    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }
}

/// Draws `samples` uniform points from `bounds` and scales the fraction
/// that lands inside every circle by the box area.
pub fn estimate_intersection_area<R: Rng>(
    circles: &[Circle],
    bounds: BoundingBox,
    samples: usize,
    rng: &mut R,
) -> f64 {
    if samples == 0 {
        return 0.0;
    }

    let mut hits = 0_usize;
    for _ in 0..samples {
        let x = rng.gen_range(bounds.min_x..bounds.max_x);
        let y = rng.gen_range(bounds.min_y..bounds.max_y);
        if circles.iter().all(|c| c.contains(x, y)) {
            hits += 1;
        }
    }

    hits as f64 / samples as f64 * bounds.area()
}
