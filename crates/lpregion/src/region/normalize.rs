//! Lower bounds and the synthetic bounding row.
//!
//! Dictionary-form LPs assume `x, y >= 0` implicitly; the geometry needs those
//! rows explicitly. After the lower bounds, one synthetic row `x + y <= U` is
//! appended so that unbounded regions are closed off at a finite distance.

use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::types::{int, Constraint, ConstraintSystem};

/// A constraint system with explicit lower bounds and a trailing synthetic row.
///
/// Invariants:
/// - Input rows come first, verbatim and in order.
/// - Missing lower bounds follow (`-x <= 0`, then `-y <= 0`).
/// - The last row is always the synthetic `x + y <= U`.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSystem {
    rows: Vec<Constraint>,
    added_lower_x: bool,
    added_lower_y: bool,
}

impl NormalizedSystem {
    /// All rows, synthetic row last.
    #[inline]
    pub fn rows(&self) -> &[Constraint] {
        &self.rows
    }

    /// Rows meant to be drawn: everything except the synthetic bound.
    #[inline]
    pub fn visible_rows(&self) -> &[Constraint] {
        &self.rows[..self.synthetic_index()]
    }

    #[inline]
    pub fn synthetic_index(&self) -> usize {
        self.rows.len() - 1
    }

    #[inline]
    pub fn synthetic(&self) -> &Constraint {
        &self.rows[self.synthetic_index()]
    }

    /// The bound `U` of the synthetic row `x + y <= U`.
    #[inline]
    pub fn bound(&self) -> &BigRational {
        &self.synthetic().c
    }

    #[inline]
    pub fn added_lower_x(&self) -> bool {
        self.added_lower_x
    }

    #[inline]
    pub fn added_lower_y(&self) -> bool {
        self.added_lower_y
    }
}

/// Append missing lower bounds and the synthetic row `x + y <= U`.
///
/// With `S = Σ|c_i|` over the input rows, `U = (S + 2)·S`. For `S = 0` (every
/// line passes through the origin) `U = 2` so the closing segment is not
/// collapsed onto the origin.
pub fn normalize(sys: &ConstraintSystem) -> NormalizedSystem {
    let has_lower_x = sys.iter().any(Constraint::bounds_x_below);
    let has_lower_y = sys.iter().any(Constraint::bounds_y_below);
    let s = sys
        .iter()
        .fold(BigRational::zero(), |acc, r| acc + r.c.abs());

    let mut rows = Vec::with_capacity(sys.len() + 3);
    rows.extend(sys.iter().cloned());
    if !has_lower_x {
        rows.push(Constraint::lower_x());
    }
    if !has_lower_y {
        rows.push(Constraint::lower_y());
    }
    let u = if s.is_zero() {
        int(2)
    } else {
        (&s + int(2)) * &s
    };
    rows.push(Constraint::new(int(1), int(1), u));

    NormalizedSystem {
        rows,
        added_lower_x: !has_lower_x,
        added_lower_y: !has_lower_y,
    }
}
