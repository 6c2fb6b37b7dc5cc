//! Feasible-region geometry for two-variable linear programs.
//!
//! - `region`: the engine (normalize, exact intersections, feasibility,
//!   unbounded markers, boundary ordering).
//! - `render`: what to draw for an LP, against a caller-supplied `Canvas`.
//!
//! API Policy
//! - No stable public API yet; `api` and `prelude` are the intended entry points.

pub mod api;
pub mod region;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use region::{feasible_region, ConstraintSystem, FeasibleRegion, RegionCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::region::rand::{draw_system, ReplayToken, Shape, SystemCfg};
    pub use crate::region::{
        feasible_region, order_convex, Constraint, ConstraintSystem, FeasTest, FeasibleRegion,
        Point, RegionCfg, UnboundedMarkers,
    };
    pub use crate::render::{draw_lp, Canvas, Fill, LpView};
}
