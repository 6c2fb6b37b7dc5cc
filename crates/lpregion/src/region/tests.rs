use super::*;
use nalgebra::vector;
use num_bigint::BigInt;
use num_rational::BigRational;

fn sys(rows: &[(i64, i64, i64)]) -> ConstraintSystem {
    rows.iter()
        .map(|&(a, b, c)| Constraint::from_ints(a, b, c))
        .collect()
}

fn close(a: Point, b: Point) -> bool {
    (a - b).norm() < 1e-12
}

fn cyclic_eq(got: &[Point], want: &[Point]) -> bool {
    let n = want.len();
    if got.len() != n {
        return false;
    }
    let rev: Vec<Point> = want.iter().rev().copied().collect();
    (0..n).any(|s| {
        (0..n).all(|k| close(got[k], want[(k + s) % n]))
            || (0..n).all(|k| close(got[k], rev[(k + s) % n]))
    })
}

#[test]
fn bounded_triangle_has_three_vertices_and_no_markers() {
    let triangle = sys(&[(-1, 0, 0), (0, -1, 0), (1, 1, 1)]);
    let (_, region) = feasible_region(&triangle, RegionCfg::default());
    assert_eq!(
        region.vertices.points(),
        vec![vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]]
    );
    assert!(region.markers.is_empty());
    assert!(region.is_bounded());
}

#[test]
fn shifted_lower_bound_does_not_replace_nonnegativity() {
    // x >= -5 is looser than x >= 0; the region stays in the positive quadrant.
    let (n, region) = feasible_region(&sys(&[(-1, 0, 5), (1, 1, 1)]), RegionCfg::default());
    assert!(n.added_lower_x() && n.added_lower_y());
    assert_eq!(n.rows().len(), 5);
    assert!(region.boundary.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
    assert!(cyclic_eq(
        &region.boundary,
        &[vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]]
    ));
    assert!(region.is_bounded());
}

#[test]
fn open_quadrant_has_two_markers() {
    let (n, region) = feasible_region(&ConstraintSystem::default(), RegionCfg::default());
    assert_eq!(n.rows().len(), 3);
    assert_eq!(region.markers.len(), 2);
    assert_eq!(
        region.markers,
        UnboundedMarkers::Two(vector![0.0, 2.0], vector![2.0, 0.0])
    );
    // origin plus the two points on the synthetic bound
    assert_eq!(region.vertices.len(), 3);
    assert!(region.vertices.contains_exact(&int(0), &int(0)));
    assert_eq!(region.finite_vertices().count(), 1);
}

#[test]
fn strip_and_ray_marker_counts() {
    // 0 <= y <= 1, x >= 0: unbounded along +x only
    let (n, region) = feasible_region(&sys(&[(0, 1, 1)]), RegionCfg::default());
    // S = 1 -> U = 3
    assert_eq!(n.bound(), &int(3));
    assert_eq!(region.markers.len(), 2);
    // The strip meets x + y = 3 in the segment from (2,1) to (3,0); both ends are
    // markers. A single marker appears when the bound is hit in one point only.
    let (_, wedge) = feasible_region(&sys(&[(-1, 1, 0), (1, -1, 0)]), RegionCfg::default());
    // y = x ray from the origin
    assert_eq!(wedge.markers.len(), 1);
    assert_eq!(wedge.markers.fade_target(), Some(vector![1.0, 1.0]));
}

#[test]
fn unit_square_boundary_is_a_simple_cycle() {
    let (_, region) = feasible_region(&sys(&[(1, 0, 1), (0, 1, 1)]), RegionCfg::default());
    let want = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!(cyclic_eq(&region.boundary, &want), "{:?}", region.boundary);
    assert!(region.is_bounded());
}

#[test]
fn parallel_rows_produce_no_point() {
    let n = normalize(&sys(&[(1, 0, 1), (1, 0, 2)]));
    let all = intersections(&n, RegionCfg::default());
    assert!(all.iter().all(|ix| ix.rows != (0, 1)));
}

#[test]
fn concurrent_lines_collapse_to_one_vertex() {
    // x <= 1, y <= 1, x + y <= 2 all pass through (1, 1)
    let rows = sys(&[(1, 0, 1), (0, 1, 1), (1, 1, 2)]);
    let (_, region) = feasible_region(&rows, RegionCfg::default());
    assert_eq!(region.vertices.len(), 4);
    assert_eq!(region.boundary.len(), 4);
}

#[test]
fn empty_region_is_a_value_not_an_error() {
    let (_, region) = feasible_region(&sys(&[(1, 1, -1)]), RegionCfg::default());
    assert!(region.is_empty());
    assert!(region.markers.is_empty());
    assert!(region.boundary.is_empty());
    assert!(!region.is_bounded());
}

#[test]
fn near_parallel_lines_intersect_exactly() {
    // x + y <= 2 and x + (1 + 10^-12) y <= 2 + 10^-12 meet at (1, 1).
    let tiny = BigRational::new(BigInt::from(1), num_traits::pow(BigInt::from(10), 12));
    let r1 = Constraint::from_ints(1, 1, 2);
    let r2 = Constraint::new(int(1), int(1) + &tiny, int(2) + &tiny);
    assert_eq!(solve2(&r1, &r2), Some((int(1), int(1))));
}

#[test]
fn relaxed_feasibility_is_configurable() {
    let cfg = RegionCfg {
        feasibility: FeasTest::Eps(1e-9),
    };
    let (_, region) = feasible_region(&sys(&[(1, 1, 1)]), cfg);
    assert_eq!(region.vertices.len(), 3);
    assert!(region.is_bounded());
}
