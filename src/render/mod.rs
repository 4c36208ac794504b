use crate::marcher::{march, RayMarch, EPSILON, MAX_DIST, MIN_DIST};
use crate::math::{add, mul, v, v2, M3, V3};
use crate::sdf::Scene;
use crate::shade::{diffuse_light, ray_direction};
use crate::strokes::{pixel_strokes, Polyline, MISS_THICKNESS};
use crate::Sdf;
use rand::Rng;
use rand_distr::Uniform;
use rayon::prelude::*;

/// Everything a render needs, drawn once and held immutable for the whole
/// pass. Angles are Euler degrees applied z-then-y-then-x to every ray.
#[derive(Clone, Debug)]
pub struct RenderParams {
    pub width: u32,
    pub height: u32,
    pub fov: f64,
    pub eye: V3,
    pub angles: V3,
    pub light: V3,
    pub sphere_radius: f64,
    pub scale: f64,
    pub outline: bool,
}

impl RenderParams {
    /// Draws camera, light, and sphere parameters from the reference ranges:
    /// camera x/y in [-1, 1] with z fixed at 4, angles in [-10, 10] degrees,
    /// light in [-6, 6] on each axis, sphere radius in [0.5, 1.5].
    pub fn sample(rng: &mut impl Rng, width: u32, height: u32, fov: f64, scale: f64) -> Self {
        let unit = Uniform::new(-1.0, 1.0);
        let tilt = Uniform::new(-10.0, 10.0);
        let room = Uniform::new(-6.0, 6.0);
        RenderParams {
            width,
            height,
            fov,
            eye: v(rng.sample(unit), rng.sample(unit), 4.0),
            angles: v(rng.sample(tilt), rng.sample(tilt), rng.sample(tilt)),
            light: v(rng.sample(room), rng.sample(room), rng.sample(room)),
            sphere_radius: rng.sample(Uniform::new(0.5, 1.5)),
            scale,
            outline: false,
        }
    }

    /// Grid extent in cells; partial cells at the edge still render.
    pub fn grid(&self) -> (u32, u32) {
        let cols = (self.width as f64 / self.scale).ceil() as u32;
        let rows = (self.height as f64 / self.scale).ceil() as u32;
        (cols, rows)
    }
}

/// Ink thickness for one grid cell: the fixed miss constant for rays that
/// leave the scene, otherwise diffuse light plus a step-count ambient term
/// that rewards surfaces the tracer struggled to converge on.
pub fn cell_thickness(params: &RenderParams, scene: &impl Sdf, ray: &RayMarch, eye: &V3, dir: &V3) -> f64 {
    if !ray.did_hit {
        return MISS_THICKNESS;
    }
    let p = add(eye, &mul(ray.distance - EPSILON, dir));
    let light_received = diffuse_light(scene, &p, &params.light) + 0.1;
    let ambient = ((ray.step_count * ray.step_count) as f64 / 100.0).min(8.0);
    light_received * 10.0 + ambient
}

fn trace_cell(params: &RenderParams, scene: &impl Sdf, rot: &M3, col: u32, row: u32) -> f64 {
    let size = v2(params.width as f64, params.height as f64);
    let frag = v2(col as f64 * params.scale, row as f64 * params.scale);
    let dir = *rot * ray_direction(params.fov, size, frag);
    let ray = march(scene, &params.eye, &dir, MIN_DIST, MAX_DIST);
    cell_thickness(params, scene, &ray, &params.eye, &dir)
}

/// Renders the full grid to an ordered list of polylines in device
/// coordinates. Rows run in parallel; batches are concatenated in raster
/// order, so the output is deterministic for fixed parameters.
pub fn render(params: &RenderParams) -> Vec<Polyline> {
    let scene = Scene::walled_room(params.sphere_radius);
    let rot = M3::euler_deg(params.angles.z, params.angles.y, params.angles.x);
    let (cols, rows) = params.grid();
    (0..rows)
        .into_par_iter()
        .map(|row| {
            let mut batch = Vec::new();
            for col in 0..cols {
                let thickness = trace_cell(params, &scene, &rot, col, row);
                pixel_strokes(col, row, thickness, params.outline, params.scale, &mut batch);
            }
            batch
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// The raw per-cell thickness field in raster order, for preview imaging.
pub fn thickness_grid(params: &RenderParams) -> (u32, u32, Vec<f64>) {
    let scene = Scene::walled_room(params.sphere_radius);
    let rot = M3::euler_deg(params.angles.z, params.angles.y, params.angles.x);
    let (cols, rows) = params.grid();
    let scene = &scene;
    let rot = &rot;
    let field = (0..rows)
        .into_par_iter()
        .flat_map_iter(move |row| {
            (0..cols).map(move |col| trace_cell(params, scene, rot, col, row))
        })
        .collect();
    (cols, rows, field)
}
