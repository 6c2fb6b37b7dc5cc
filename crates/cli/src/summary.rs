//! Plain-text rendering of a computed region.

use lpregion::region::{FeasibleRegion, NormalizedSystem};
use std::fmt::Write;

/// One line per boundary point in drawing order, tagged `vertex` or `marker`,
/// preceded by `#` comment lines describing the system.
pub fn render_text(sys: &NormalizedSystem, region: &FeasibleRegion) -> String {
    let mut out = String::new();
    let status = if region.is_empty() {
        "empty"
    } else if region.is_bounded() {
        "bounded"
    } else {
        "unbounded"
    };
    let _ = writeln!(out, "# bound: {}", sys.synthetic());
    for row in sys.visible_rows() {
        let _ = writeln!(out, "# row: {row}");
    }
    let _ = writeln!(
        out,
        "# region: {status}, vertices: {}, markers: {}",
        region.vertices.len(),
        region.markers.len()
    );
    for p in &region.boundary {
        let kind = if region.markers.contains(p) {
            "marker"
        } else {
            "vertex"
        };
        let _ = writeln!(out, "{kind} {} {}", p.x, p.y);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpregion::region::{feasible_region, Constraint, ConstraintSystem, RegionCfg};

    #[test]
    fn marks_unbounded_points() {
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(-1, -1, -1)]);
        let (n, region) = feasible_region(&sys, RegionCfg::default());
        let text = render_text(&n, &region);
        assert!(text.contains("# region: unbounded, vertices: 4, markers: 2"));
        assert_eq!(text.lines().filter(|l| l.starts_with("marker ")).count(), 2);
        assert_eq!(text.lines().filter(|l| l.starts_with("vertex ")).count(), 2);
        assert_eq!(text.lines().filter(|l| l.starts_with("# row: ")).count(), 3);
    }

    #[test]
    fn empty_region_has_no_points() {
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(1, 1, -1)]);
        let (n, region) = feasible_region(&sys, RegionCfg::default());
        let text = render_text(&n, &region);
        assert!(text.contains("# region: empty"));
        assert!(text.lines().all(|l| l.starts_with('#')));
    }
}
