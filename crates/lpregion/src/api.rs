//! Curated internal API (UNSTABLE).
//!
//! Re-exports grouped by pipeline stage. Breaking changes are allowed.

// Input rows and configuration
pub use crate::region::{
    parse_rational, Constraint, ConstraintSystem, FeasTest, ParseConstraintError, Point, RegionCfg,
};
// Pipeline stages
pub use crate::region::{
    contains, intersections, normalize, order_convex, satisfies, solve2, Intersection,
    NormalizedSystem, UnboundedMarkers, VertexSet,
};
// End to end
pub use crate::region::{feasible_region, FeasibleRegion};
// Drawing
pub use crate::render::{draw_lp, fill_for, Canvas, Fill, Line, LineRole, LpView, PointRole};
// Random systems
pub use crate::region::rand::{
    draw_system, ReplayToken as SystemReplay, Shape as SystemShape, SystemCfg,
};
