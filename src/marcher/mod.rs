use crate::math::{add, mul, V3};
use crate::Sdf;

pub const MAX_MARCHING_STEPS: u32 = 255;
pub const MIN_DIST: f64 = 0.0;
pub const MAX_DIST: f64 = 700.0;
pub const EPSILON: f64 = 0.0000001;

/// Outcome of one sphere-tracing walk. Built once per trace and consumed
/// immediately by the caller.
#[derive(Clone, Copy, Debug)]
pub struct RayMarch {
    /// Distance traveled along the ray (`end` on a miss).
    pub distance: f64,
    pub did_hit: bool,
    /// Loop iterations consumed; `MAX_MARCHING_STEPS` when the budget ran out.
    pub step_count: u32,
    /// Smallest scene distance observed along the walk.
    pub min_radius: f64,
    /// Scene distance at the final evaluation.
    pub end_radius: f64,
}

/// Classic sphere tracing: advance by the evaluated scene distance, which is
/// a safe lower bound on the distance to any surface. Terminates on a hit
/// (distance below `EPSILON`), on passing `end`, or on exhausting the step
/// budget, which reports a miss at `end`.
pub fn march(scene: &impl Sdf, eye: &V3, dir: &V3, start: f64, end: f64) -> RayMarch {
    let mut depth = start;
    let mut last_radius = 0.0;
    let mut min_radius = 10000.0;
    for i in 0..MAX_MARCHING_STEPS {
        let dist = scene.distance(&add(eye, &mul(depth, dir)));
        last_radius = dist;
        if dist < min_radius {
            min_radius = dist;
        }
        if dist < EPSILON {
            return RayMarch {
                distance: depth,
                did_hit: true,
                step_count: i,
                min_radius,
                end_radius: last_radius,
            };
        }
        depth += dist;
        if depth >= end {
            return RayMarch {
                distance: end,
                did_hit: false,
                step_count: i,
                min_radius,
                end_radius: last_radius,
            };
        }
    }
    RayMarch {
        distance: end,
        did_hit: false,
        step_count: MAX_MARCHING_STEPS,
        min_radius,
        end_radius: last_radius,
    }
}
