//! 2D convex hulls and polygon areas.

use crate::Vec2;
use std::cmp::Ordering;

/// Cross product z-component of (a − o) × (b − o).
///
/// Positive for a counterclockwise turn o → a → b.
fn cross(o: &Vec2, a: &Vec2, b: &Vec2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Convex hull of a 2D point set via Andrew's monotone chain.
///
/// Returns hull vertices in counterclockwise order. Collinear and
/// duplicate points are discarded from the hull. Inputs of one point or
/// fewer are returned unchanged.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() <= 1 {
        return points.to_vec();
    }
    let mut pts = points.to_vec();
    pts.sort_by(|p, q| {
        p.x.partial_cmp(&q.x)
            .unwrap_or(Ordering::Equal)
            .then(p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal))
    });

    let mut lower: Vec<Vec2> = Vec::new();
    for p in &pts {
        while lower.len() >= 2
            && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Vec2> = Vec::new();
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }

    // Each chain ends on the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Area of a simple polygon via the shoelace formula.
///
/// Fewer than three vertices have zero area.
pub fn polygon_area(poly: &[Vec2]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..poly.len() {
        let p = &poly[i];
        let q = &poly[(i + 1) % poly.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc.abs() * 0.5
}
