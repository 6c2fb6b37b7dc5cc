//! Exact pairwise line intersections.
//!
//! - `solve2`: 2×2 elimination over `BigRational`; `None` for parallel or
//!   coincident lines.
//! - `intersections`: every non-singular row pair of a normalized system,
//!   tagged with feasibility and whether the synthetic row is involved.
//!
//! Solving exactly keeps near-parallel pairs from producing spurious far-away
//! points; the only floating-point step is the feasibility test.
//!
//! References
//! - Code cross-refs: `normalize::NormalizedSystem`, `feasible::contains`

use num_rational::BigRational;
use num_traits::Zero;

use super::feasible::{contains, ExactPoint};
use super::normalize::NormalizedSystem;
use super::types::{rat_to_f64, Constraint, Point, RegionCfg};

/// Intersection of two constraint lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Row indices `(i, j)` with `i < j`.
    pub rows: (usize, usize),
    pub exact: ExactPoint,
    pub point: Point,
    pub feasible: bool,
    /// One of the rows is the synthetic bound.
    pub synthetic: bool,
}

/// Solve `a1 x + b1 y = c1, a2 x + b2 y = c2` exactly.
///
/// LU with row pivoting on the first column; returns `None` iff the system is
/// singular.
pub fn solve2(r1: &Constraint, r2: &Constraint) -> Option<(BigRational, BigRational)> {
    let (p, q) = if !r1.a.is_zero() {
        (r1, r2)
    } else if !r2.a.is_zero() {
        (r2, r1)
    } else {
        return None;
    };
    let l = &q.a / &p.a;
    let u22 = &q.b - &l * &p.b;
    if u22.is_zero() {
        return None;
    }
    let z2 = &q.c - &l * &p.c;
    let y = z2 / u22;
    let x = (&p.c - &p.b * &y) / &p.a;
    Some((x, y))
}

/// All pairwise intersections of the normalized rows.
///
/// Unordered pairs `i < j` cover every ordered pair: the solution set of a
/// pair does not depend on its order.
pub fn intersections(sys: &NormalizedSystem, cfg: RegionCfg) -> Vec<Intersection> {
    let rows = sys.rows();
    let last = sys.synthetic_index();
    let mut out = Vec::with_capacity(rows.len() * rows.len().saturating_sub(1) / 2);
    let mut singular = 0usize;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            let Some((x, y)) = solve2(&rows[i], &rows[j]) else {
                singular += 1;
                continue;
            };
            let point = Point::new(rat_to_f64(&x), rat_to_f64(&y));
            out.push(Intersection {
                rows: (i, j),
                feasible: contains(rows, point, cfg.feasibility),
                synthetic: j == last,
                exact: (x, y),
                point,
            });
        }
    }
    tracing::trace!(rows = rows.len(), pairs = out.len(), singular, "intersections");
    out
}
