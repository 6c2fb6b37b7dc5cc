//! End-to-end region computation: normalize → intersect → filter → order.

use super::feasible::{classify, UnboundedMarkers, VertexSet};
use super::normalize::{normalize, NormalizedSystem};
use super::ordered::order_convex;
use super::solvers::intersections;
use super::types::{ConstraintSystem, Point, RegionCfg};

/// Geometry of the feasible region, closed off by the synthetic bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeasibleRegion {
    pub vertices: VertexSet,
    pub markers: UnboundedMarkers,
    /// `vertices` in drawing order (markers included; they close the polygon).
    pub boundary: Vec<Point>,
}

impl FeasibleRegion {
    /// Compute the region of an already normalized system.
    pub fn from_normalized(sys: &NormalizedSystem, cfg: RegionCfg) -> Self {
        let (vertices, markers) = classify(intersections(sys, cfg));
        let boundary = order_convex(&vertices.points());
        tracing::debug!(
            rows = sys.rows().len(),
            vertices = vertices.len(),
            markers = markers.len(),
            "feasible region"
        );
        Self {
            vertices,
            markers,
            boundary,
        }
    }

    /// No feasible point: nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Non-empty and never touches the synthetic bound.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        !self.is_empty() && self.markers.is_empty()
    }

    /// Boundary points that are true vertices (not unbounded markers).
    pub fn finite_vertices(&self) -> impl Iterator<Item = &Point> + '_ {
        self.boundary.iter().filter(|p| !self.markers.contains(p))
    }
}

/// Normalize `sys` and compute its feasible region.
pub fn feasible_region(sys: &ConstraintSystem, cfg: RegionCfg) -> (NormalizedSystem, FeasibleRegion) {
    let normalized = normalize(sys);
    let region = FeasibleRegion::from_normalized(&normalized, cfg);
    (normalized, region)
}
