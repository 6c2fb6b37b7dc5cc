//! Feasible-region geometry for two-variable linear programs.
//!
//! Purpose
//! - Turn a system of rows `a·x + b·y <= c` (exact rationals) into drawable
//!   geometry: an ordered polygon boundary plus markers for the directions in
//!   which the true region is unbounded.
//!
//! Pipeline
//! - `normalize`: explicit `x, y >= 0` and a synthetic row `x + y <= U`.
//! - `solvers`: exact 2×2 solves for every row pair; singular pairs are skipped.
//! - `feasible`: single-precision membership test, vertex set, markers.
//! - `ordered`: clockwise traversal of the convex vertex set.
//!
//! Every call recomputes from scratch; results are plain values, nothing is
//! cached between calls.
//!
//! References
//! - Code cross-refs: `FeasibleRegion`, `NormalizedSystem`, `RegionCfg`, `crate::render`

mod build;
pub mod feasible;
pub mod normalize;
pub mod ordered;
pub mod rand;
pub mod solvers;
mod types;

pub use build::{feasible_region, FeasibleRegion};
pub use feasible::{contains, satisfies, ExactPoint, UnboundedMarkers, VertexSet};
pub use normalize::{normalize, NormalizedSystem};
pub use ordered::order_convex;
pub use solvers::{intersections, solve2, Intersection};
pub use types::{
    parse_rational, Constraint, ConstraintSystem, FeasTest, ParseConstraintError, Point, RegionCfg,
};
pub(crate) use types::rat_to_f64;
#[cfg(test)]
pub(crate) use types::int;

#[cfg(test)]
mod tests;
