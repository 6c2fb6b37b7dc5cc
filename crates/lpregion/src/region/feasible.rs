//! Feasibility filter and unbounded-direction classification.
//!
//! `satisfies` is the single place where the floating-point tolerance lives;
//! everything upstream is exact and everything downstream consumes its verdict.

use std::collections::BTreeMap;

use num_rational::BigRational;

use super::solvers::Intersection;
use super::types::{rat_to_f32, Constraint, FeasTest, Point};

/// Exact rational coordinates `(x, y)`.
pub type ExactPoint = (BigRational, BigRational);

/// Membership of `p` in the half-plane `row` under the given precision policy.
///
/// With `FeasTest::Single` the left-hand side is evaluated in `f64`, rounded to
/// `f32`, and compared with the `f32` image of `c`. Non-finite values never pass.
#[inline]
pub fn satisfies(row: &Constraint, p: Point, test: FeasTest) -> bool {
    if !(p.x.is_finite() && p.y.is_finite()) {
        return false;
    }
    match test {
        FeasTest::Single => {
            let a = f64::from(rat_to_f32(&row.a));
            let b = f64::from(rat_to_f32(&row.b));
            let lhs = (a * p.x + b * p.y) as f32;
            lhs <= rat_to_f32(&row.c)
        }
        FeasTest::Eps(eps) => {
            let (n, c) = row.to_f64();
            n.dot(&p) <= c + eps
        }
    }
}

/// True iff `p` satisfies every row.
#[inline]
pub fn contains(rows: &[Constraint], p: Point, test: FeasTest) -> bool {
    rows.iter().all(|r| satisfies(r, p, test))
}

/// Feasible intersection points, deduplicated on their exact coordinates.
///
/// Iteration order is the exact lexicographic `(x, y)` order, so it does not
/// depend on the order in which pairs were solved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexSet {
    by_exact: BTreeMap<ExactPoint, Point>,
}

impl VertexSet {
    /// Insert a vertex; returns false if the exact point was already present.
    pub fn insert(&mut self, exact: ExactPoint, p: Point) -> bool {
        self.by_exact.insert(exact, p).is_none()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.by_exact.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_exact.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.by_exact.values()
    }
    pub fn points(&self) -> Vec<Point> {
        self.by_exact.values().copied().collect()
    }
    pub fn contains_exact(&self, x: &BigRational, y: &BigRational) -> bool {
        // BTreeMap needs an owned key for lookup on tuples.
        self.by_exact.contains_key(&(x.clone(), y.clone()))
    }
}

/// Finite stand-ins for the directions in which the region is unbounded.
///
/// Markers are feasible points on the synthetic bound. A two-variable region
/// meets that line in at most one segment, hence at most two markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum UnboundedMarkers {
    #[default]
    None,
    One(Point),
    Two(Point, Point),
}

impl UnboundedMarkers {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::None => Vec::new(),
            Self::One(p) => vec![p],
            Self::Two(p, q) => vec![p, q],
        }
    }
    /// Markers are copies of vertex coordinates, so bitwise comparison is exact.
    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Self::None => false,
            Self::One(a) => a == p,
            Self::Two(a, b) => a == p || b == p,
        }
    }
    /// Where a fill should fade out: the marker, or the midpoint of two.
    pub fn fade_target(&self) -> Option<Point> {
        match *self {
            Self::None => None,
            Self::One(p) => Some(p),
            Self::Two(p, q) => Some((p + q) * 0.5),
        }
    }
}

/// Fold tagged intersections into the vertex set and the unbounded markers.
pub fn classify(all: Vec<Intersection>) -> (VertexSet, UnboundedMarkers) {
    let mut vertices = VertexSet::default();
    let mut markers: BTreeMap<ExactPoint, Point> = BTreeMap::new();
    for ix in all.into_iter().filter(|ix| ix.feasible) {
        if ix.synthetic {
            markers.insert(ix.exact.clone(), ix.point);
        }
        vertices.insert(ix.exact, ix.point);
    }
    (vertices, reduce_markers(markers))
}

fn reduce_markers(markers: BTreeMap<ExactPoint, Point>) -> UnboundedMarkers {
    let mut it = markers.values().copied();
    match markers.len() {
        0 => UnboundedMarkers::None,
        1 => it.next().map_or(UnboundedMarkers::None, UnboundedMarkers::One),
        n => {
            if n > 2 {
                // Tolerance admitted extra points on the bound; keep its extremes.
                tracing::debug!(markers = n, "reducing unbounded markers to extremes");
            }
            let first = it.next();
            let last = it.last();
            match (first, last) {
                (Some(p), Some(q)) => UnboundedMarkers::Two(p, q),
                _ => UnboundedMarkers::None,
            }
        }
    }
}
