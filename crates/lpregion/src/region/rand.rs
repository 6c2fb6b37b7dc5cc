//! Random constraint systems (tangent half-planes + replay tokens).
//!
//! Model
//! - Pick `n` jittered angles; each gives a half-plane whose normal is the
//!   angle's unit vector rounded to denominator `denom`, and whose line passes
//!   at roughly `radius` from an integer center in the positive quadrant.
//! - `Shape::Bounded` spreads at least four angles over the full circle, with
//!   gaps below π even after rounding. `Shape::Unbounded` keeps them in the
//!   third quadrant, so the region (with `x, y >= 0`) opens towards `+x, +y`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use num_bigint::BigInt;
use num_rational::BigRational;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{int, Constraint, ConstraintSystem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Bounded,
    Unbounded,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SystemCfg {
    pub rows: usize,
    pub shape: Shape,
    /// Denominator for normal coefficients. Clamped to at least 4.
    pub denom: i64,
    /// Center coordinates are drawn from `radius..=radius + spread`.
    pub spread: i64,
    pub radius: i64,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.3].
    pub angle_jitter_frac: f64,
}

impl Default for SystemCfg {
    fn default() -> Self {
        Self {
            rows: 6,
            shape: Shape::Bounded,
            denom: 8,
            spread: 6,
            radius: 4,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random constraint system. Lower bounds are left to the normalizer.
pub fn draw_system(cfg: SystemCfg, tok: ReplayToken) -> ConstraintSystem {
    let mut rng = tok.to_std_rng();
    let n = cfg.rows.max(match cfg.shape {
        Shape::Bounded => 4,
        Shape::Unbounded => 1,
    });
    let denom = cfg.denom.max(4);
    let radius = cfg.radius.max(1);
    let cx = rng.gen_range(radius..=radius + cfg.spread.max(0));
    let cy = rng.gen_range(radius..=radius + cfg.spread.max(0));

    let (start, span) = match cfg.shape {
        Shape::Bounded => (rng.gen::<f64>() * std::f64::consts::TAU, std::f64::consts::TAU),
        Shape::Unbounded => (std::f64::consts::PI, std::f64::consts::FRAC_PI_2),
    };
    let delta = span / n as f64;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.3);

    let rat = |v: i64| BigRational::new(BigInt::from(v), BigInt::from(denom));
    let mut rows = Vec::with_capacity(n);
    for k in 0..n {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let theta = start + (k as f64 + 0.5) * delta + jitter;
        let na = (theta.cos() * denom as f64).round() as i64;
        let nb = (theta.sin() * denom as f64).round() as i64;
        let a = rat(na);
        let b = rat(nb);
        let c = &a * int(cx) + &b * int(cy) + int(radius);
        rows.push(Constraint::new(a, b, c));
    }
    ConstraintSystem::new(rows)
}
