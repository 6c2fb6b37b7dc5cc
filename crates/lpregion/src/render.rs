//! Drawing an LP onto a 2D canvas.
//!
//! The canvas owns colors, paints, and pixels; this module only decides what to
//! draw: constraint lines, vertices, the region polygon with its fill strategy,
//! the objective line, and the current basic solution.
//!
//! References
//! - Code cross-refs: `region::FeasibleRegion`, `region::UnboundedMarkers`

use num_rational::BigRational;

use crate::region::{
    normalize, rat_to_f64, Constraint, ConstraintSystem, FeasibleRegion, Point, RegionCfg,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Constraint,
    Objective,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    Vertex,
    /// Current basic solution, drawn highlighted.
    Solution,
}

/// Line `a·x + b·y = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub role: LineRole,
}

impl Line {
    fn from_row(row: &Constraint, role: LineRole) -> Self {
        let (n, c) = row.to_f64();
        Self {
            a: n.x,
            b: n.y,
            c,
            role,
        }
    }
}

/// How the region polygon is filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Bounded region.
    Solid,
    /// Unbounded region: fade from `from` towards the background at `to`.
    Fade { from: Point, to: Point },
}

/// Fill strategy keyed on the number of unbounded markers.
pub fn fill_for(region: &FeasibleRegion) -> Option<Fill> {
    let from = *region.boundary.first()?;
    Some(match region.markers.fade_target() {
        None => Fill::Solid,
        Some(to) => Fill::Fade { from, to },
    })
}

/// Drawing surface. Implementations map roles and fills to colors.
pub trait Canvas {
    fn clear(&mut self);
    fn set_axes_visible(&mut self, visible: bool);
    fn add_line(&mut self, line: Line);
    fn add_point(&mut self, p: Point, role: PointRole);
    fn add_polygon(&mut self, boundary: &[Point], fill: Fill);
}

/// The parts of an LP's current dictionary needed for drawing.
#[derive(Clone, Debug)]
pub struct LpView<'a> {
    /// Number of basic variables; drawing needs exactly two.
    pub n_basic: usize,
    pub constraints: &'a ConstraintSystem,
    pub objective: [BigRational; 2],
    pub objective_value: BigRational,
    pub solution: [BigRational; 2],
}

/// Draw `lp` onto `canvas`; returns the computed region when one was drawn.
///
/// Without an LP, or with other than two basic variables, the canvas is cleared
/// and its axes hidden.
pub fn draw_lp<C: Canvas + ?Sized>(
    canvas: &mut C,
    lp: Option<&LpView<'_>>,
    cfg: RegionCfg,
) -> Option<FeasibleRegion> {
    canvas.clear();
    let lp = match lp {
        Some(lp) if lp.n_basic == ConstraintSystem::DIM => lp,
        other => {
            tracing::debug!(n_basic = other.map(|lp| lp.n_basic), "not drawable in 2D");
            canvas.set_axes_visible(false);
            return None;
        }
    };
    canvas.set_axes_visible(true);

    let sys = normalize(lp.constraints);
    for row in sys.visible_rows() {
        canvas.add_line(Line::from_row(row, LineRole::Constraint));
    }

    let region = FeasibleRegion::from_normalized(&sys, cfg);
    let fill = fill_for(&region)?;

    for p in region.finite_vertices() {
        canvas.add_point(*p, PointRole::Vertex);
    }
    canvas.add_polygon(&region.boundary, fill);

    let [c0, c1] = &lp.objective;
    let objective = Constraint::new(c0.clone(), c1.clone(), lp.objective_value.clone());
    canvas.add_line(Line::from_row(&objective, LineRole::Objective));

    let [x, y] = &lp.solution;
    canvas.add_point(Point::new(rat_to_f64(x), rat_to_f64(y)), PointRole::Solution);

    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Axes(bool),
        Line(Line),
        Point(Point, PointRole),
        Polygon(usize, Fill),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn set_axes_visible(&mut self, visible: bool) {
            self.ops.push(Op::Axes(visible));
        }
        fn add_line(&mut self, line: Line) {
            self.ops.push(Op::Line(line));
        }
        fn add_point(&mut self, p: Point, role: PointRole) {
            self.ops.push(Op::Point(p, role));
        }
        fn add_polygon(&mut self, boundary: &[Point], fill: Fill) {
            self.ops.push(Op::Polygon(boundary.len(), fill));
        }
    }

    fn q(v: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(v))
    }

    fn view(sys: &ConstraintSystem, n_basic: usize) -> LpView<'_> {
        LpView {
            n_basic,
            constraints: sys,
            objective: [q(1), q(2)],
            objective_value: q(2),
            solution: [q(0), q(1)],
        }
    }

    #[test]
    fn wrong_dimension_hides_axes() {
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(1, 1, 1)]);
        let mut rec = Recorder::default();
        assert!(draw_lp(&mut rec, Some(&view(&sys, 3)), RegionCfg::default()).is_none());
        assert_eq!(rec.ops, vec![Op::Clear, Op::Axes(false)]);
        let mut rec = Recorder::default();
        assert!(draw_lp(&mut rec, None, RegionCfg::default()).is_none());
        assert_eq!(rec.ops, vec![Op::Clear, Op::Axes(false)]);
    }

    #[test]
    fn bounded_triangle_draws_solid_region() {
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(1, 1, 1)]);
        let mut rec = Recorder::default();
        let region = draw_lp(&mut rec, Some(&view(&sys, 2)), RegionCfg::default()).unwrap();
        assert!(region.is_bounded());
        let lines = rec.ops.iter().filter(|o| matches!(o, Op::Line(_))).count();
        // three visible rows + objective
        assert_eq!(lines, 4);
        let vertices = rec
            .ops
            .iter()
            .filter(|o| matches!(o, Op::Point(_, PointRole::Vertex)))
            .count();
        assert_eq!(vertices, 3);
        assert!(rec.ops.contains(&Op::Polygon(3, Fill::Solid)));
        assert_eq!(
            rec.ops.last(),
            Some(&Op::Point(Point::new(0.0, 1.0), PointRole::Solution))
        );
    }

    #[test]
    fn open_quadrant_fades_towards_marker_midpoint() {
        // x + y >= 1 in the positive quadrant
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(-1, -1, -1)]);
        let mut rec = Recorder::default();
        let region = draw_lp(&mut rec, Some(&view(&sys, 2)), RegionCfg::default()).unwrap();
        assert_eq!(region.markers.len(), 2);
        let fill = fill_for(&region).unwrap();
        // S = 1 -> U = 3; markers (0,3), (3,0)
        assert_eq!(
            fill,
            Fill::Fade {
                from: region.boundary[0],
                to: Point::new(1.5, 1.5)
            }
        );
        let vertices = rec
            .ops
            .iter()
            .filter(|o| matches!(o, Op::Point(_, PointRole::Vertex)))
            .count();
        assert_eq!(vertices, 2);
        assert!(rec.ops.contains(&Op::Polygon(4, fill)));
    }

    #[test]
    fn empty_region_draws_lines_only() {
        // x + y <= -1 with x, y >= 0
        let sys = ConstraintSystem::new(vec![Constraint::from_ints(1, 1, -1)]);
        let mut rec = Recorder::default();
        assert!(draw_lp(&mut rec, Some(&view(&sys, 2)), RegionCfg::default()).is_none());
        assert!(rec
            .ops
            .iter()
            .all(|o| matches!(o, Op::Clear | Op::Axes(true) | Op::Line(_))));
    }
}
