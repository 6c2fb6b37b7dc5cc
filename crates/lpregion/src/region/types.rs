//! Constraint rows, constraint systems, and tolerances for the region engine.
//!
//! - `Constraint`: closed half‑plane `a·x + b·y <= c` with exact rational entries.
//! - `ConstraintSystem`: ordered rows over the two free variables `(x, y)`.
//! - `RegionCfg`: centralizes the feasibility precision policy.
//!
//! References
//! - Code cross-refs: `normalize::normalize`, `feasible::satisfies`, `solvers::solve2`

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Floating-point point used by all geometry downstream of the exact solve.
pub type Point = Vector2<f64>;

/// Feasibility precision policy.
///
/// `Single` compares `a·x + b·y` against `c` after rounding both to `f32`. The
/// coarse rounding is the tolerance window that absorbs the `f64` conversion of
/// exact intersection coordinates; points within it of a boundary line may be
/// classified either way. `Eps(e)` compares in `f64` with explicit slack `e`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeasTest {
    Single,
    Eps(f64),
}

/// Region engine configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionCfg {
    pub feasibility: FeasTest,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            feasibility: FeasTest::Single,
        }
    }
}

/// Closed half‑plane `a·x + b·y <= c`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub a: BigRational,
    pub b: BigRational,
    pub c: BigRational,
}

impl Constraint {
    #[inline]
    pub fn new(a: BigRational, b: BigRational, c: BigRational) -> Self {
        Self { a, b, c }
    }

    /// Integer-coefficient shorthand, mostly for tests and generators.
    pub fn from_ints(a: i64, b: i64, c: i64) -> Self {
        Self::new(int(a), int(b), int(c))
    }

    /// `-x <= 0`
    pub fn lower_x() -> Self {
        Self::from_ints(-1, 0, 0)
    }

    /// `-y <= 0`
    pub fn lower_y() -> Self {
        Self::from_ints(0, -1, 0)
    }

    /// True if the row is a positive multiple of `-x <= 0`, i.e. exactly `x >= 0`.
    #[inline]
    pub fn bounds_x_below(&self) -> bool {
        self.a.is_negative() && self.b.is_zero() && self.c.is_zero()
    }

    /// True if the row is a positive multiple of `-y <= 0`.
    #[inline]
    pub fn bounds_y_below(&self) -> bool {
        self.a.is_zero() && self.b.is_negative() && self.c.is_zero()
    }

    /// Coefficients `(a, b)` and right-hand side `c` as `f64`.
    pub fn to_f64(&self) -> (Point, f64) {
        (
            Vector2::new(rat_to_f64(&self.a), rat_to_f64(&self.b)),
            rat_to_f64(&self.c),
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}·x + {}·y <= {}", self.a, self.b, self.c)
    }
}

/// Errors from parsing a constraint row such as `"1 1/2 <= 3"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseConstraintError {
    /// Expected three numbers (optionally `a b <= c`), found this many tokens.
    Arity(usize),
    /// Token is not an integer, fraction `p/q`, or decimal.
    Number(String),
}

impl fmt::Display for ParseConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(n) => write!(f, "expected `a b c` or `a b <= c`, got {n} tokens"),
            Self::Number(tok) => write!(f, "not a rational number: `{tok}`"),
        }
    }
}

impl std::error::Error for ParseConstraintError {}

impl FromStr for Constraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.replace(',', " ");
        let toks: Vec<&str> = cleaned.split_whitespace().collect();
        let (ta, tb, tc) = match toks.as_slice() {
            [a, b, c] => (*a, *b, *c),
            [a, b, "<=", c] => (*a, *b, *c),
            other => return Err(ParseConstraintError::Arity(other.len())),
        };
        Ok(Self::new(
            parse_rational(ta)?,
            parse_rational(tb)?,
            parse_rational(tc)?,
        ))
    }
}

/// Parse an integer, a fraction `p/q`, or a finite decimal `-1.25` exactly.
pub fn parse_rational(tok: &str) -> Result<BigRational, ParseConstraintError> {
    let tok = tok.trim();
    let bad = || ParseConstraintError::Number(tok.to_string());
    if let Some((int_part, frac)) = tok.split_once('.') {
        if frac.is_empty() || !frac.bytes().all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }
        let numer = BigInt::from_str(&format!("{int_part}{frac}")).map_err(|_| bad())?;
        let denom = num_traits::pow(BigInt::from(10u32), frac.len());
        return Ok(BigRational::new(numer, denom));
    }
    BigRational::from_str(tok).map_err(|_| bad())
}

/// Ordered constraint rows over exactly two free variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSystem {
    pub rows: Vec<Constraint>,
}

impl ConstraintSystem {
    /// Number of free variables the engine handles.
    pub const DIM: usize = 2;

    #[inline]
    pub fn new(rows: Vec<Constraint>) -> Self {
        Self { rows }
    }
    #[inline]
    pub fn push(&mut self, row: Constraint) {
        self.rows.push(row);
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.rows.iter()
    }
}

impl FromIterator<Constraint> for ConstraintSystem {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[inline]
pub(crate) fn int(v: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(v))
}

/// `f64` image of an exact rational; NaN if it is not representable.
#[inline]
pub(crate) fn rat_to_f64(q: &BigRational) -> f64 {
    q.to_f64().unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn rat_to_f32(q: &BigRational) -> f32 {
    q.to_f32().unwrap_or(f32::NAN)
}
