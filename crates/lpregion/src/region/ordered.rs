//! Boundary ordering for points in convex position.
//!
//! Split by the line `L` through the extreme-x points:
//! 1. Sort ascending by `x`, ties ascending by `y`; `lo`/`hi` are first/last.
//! 2. Points on or above `L` form the upper chain, walked left to right from `lo`.
//! 3. Points below `L` plus `hi` form the lower chain, walked right to left.
//!
//! The result is clockwise for a proper polygon. When all points share one `x`
//! every point lies on `L`, and the output is the sorted column.

use std::cmp::Ordering;

use super::types::Point;

#[inline]
fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Order points lying on a convex boundary into a non-self-intersecting cycle.
///
/// Output is a permutation of the input. Deterministic for a given input
/// multiset up to the order of exactly equal points.
pub fn order_convex(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    if pts.len() < 3 {
        return pts;
    }
    let lo = pts[0];
    let hi = pts[pts.len() - 1];

    let mut upper = Vec::with_capacity(pts.len());
    let mut lower = Vec::with_capacity(pts.len());
    upper.push(lo);
    for &p in &pts[1..pts.len() - 1] {
        // With hi.x > lo.x this is `p.y >= L(p.x)`.
        if cross(lo, hi, p) >= 0.0 {
            upper.push(p);
        } else {
            lower.push(p);
        }
    }
    lower.push(hi);
    lower.reverse();
    upper.extend(lower);
    upper
}
