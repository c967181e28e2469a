//! Seeded random point generators.
//!
//! Both generators construct their own `StdRng` from an explicit seed and
//! thread it through sampling, with no global randomness, so identical seeds
//! reproduce identical point sets exactly.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Label, PointSet};

/// Uniform labeled scatter in a rectangle.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub included: usize,
    pub excluded: usize,
    /// Half-open sampling ranges; lo must be < hi.
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            included: 5,
            excluded: 5,
            x_range: (-5.0, 5.0),
            y_range: (-5.0, 5.0),
        }
    }
}

/// Draw `included` Included points followed by `excluded` Excluded ones.
pub fn scatter_points(cfg: ScatterCfg, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pts = PointSet::new();
    for _ in 0..cfg.included {
        let pos = sample_in(&mut rng, cfg.x_range, cfg.y_range);
        pts.push(pos, Label::Included);
    }
    for _ in 0..cfg.excluded {
        let pos = sample_in(&mut rng, cfg.x_range, cfg.y_range);
        pts.push(pos, Label::Excluded);
    }
    pts
}

fn sample_in<R: Rng>(rng: &mut R, x: (f64, f64), y: (f64, f64)) -> Vector2<f64> {
    Vector2::new(rng.gen_range(x.0..x.1), rng.gen_range(y.0..y.1))
}

/// Jittered ring of Included points around a center.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub count: usize,
    pub base_radius: f64,
    /// Relative radial jitter: radii are `base_radius * (1 + u)` with
    /// `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub center: Vector2<f64>,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            count: 10,
            base_radius: 1.0,
            radial_jitter: 0.25,
            center: Vector2::zeros(),
        }
    }
}

/// Points evenly spaced by angle with jittered radius, all Included.
pub fn ring_points(cfg: RingCfg, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pts = PointSet::new();
    let delta = std::f64::consts::TAU / cfg.count.max(1) as f64;
    for i in 0..cfg.count {
        let theta = i as f64 * delta;
        let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.radial_jitter.max(0.0);
        let r = (cfg.base_radius * (1.0 + u)).max(1e-9);
        let pos = cfg.center + Vector2::new(theta.cos(), theta.sin()) * r;
        pts.push(pos, Label::Included);
    }
    pts
}
