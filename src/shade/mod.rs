use crate::marcher::{march, EPSILON, MAX_DIST, MIN_DIST};
use crate::math::{dist, dot, normalize, radians, sub, v, V2, V3};
use crate::Sdf;

/// Apparent radius of the light source; widens the occlusion test so shadows
/// fall off softly instead of switching on at a point.
pub const LIGHT_RADIUS: f64 = 0.1;

/// Perspective ray through pixel `frag` of a `size.x` by `size.y` image with
/// the given vertical field of view in degrees. Unit length; looks down -z
/// before any camera rotation is applied.
pub fn ray_direction(fov: f64, size: V2, frag: V2) -> V3 {
    let x = frag.x - size.x * 0.5;
    let y = frag.y - size.y * 0.5;
    let z = size.y / (radians(fov) / 2.0).tan();
    normalize(&v(x, y, -z))
}

/// Central-difference surface normal, valid where the field is locally smooth.
pub fn estimate_normal(scene: &impl Sdf, p: &V3) -> V3 {
    normalize(&v(
        scene.distance(&v(p.x + EPSILON, p.y, p.z)) - scene.distance(&v(p.x - EPSILON, p.y, p.z)),
        scene.distance(&v(p.x, p.y + EPSILON, p.z)) - scene.distance(&v(p.x, p.y - EPSILON, p.z)),
        scene.distance(&v(p.x, p.y, p.z + EPSILON)) - scene.distance(&v(p.x, p.y, p.z - EPSILON)),
    ))
}

/// Fraction of the light-to-`p` path blocked by geometry, in [0, 1).
/// Traces a secondary ray from the light toward `p`; if it stops meaningfully
/// short of the straight-line distance (widened by the light radius), the
/// point is partially occluded. Zero when the path is clear.
pub fn light_modifier(scene: &impl Sdf, p: &V3, light_pos: &V3, radius: f64) -> f64 {
    let light_info = march(
        scene,
        light_pos,
        &normalize(&sub(p, light_pos)),
        MIN_DIST,
        MAX_DIST,
    );
    let light_dist = dist(p, light_pos);
    let max_dist = (light_dist.powi(2) + radius.powi(2)).sqrt();
    if light_info.distance < max_dist - EPSILON {
        (light_dist - light_info.distance) / light_dist
    } else {
        0.0
    }
}

/// Diffuse light received at `p`, combined additively with the negated
/// shadow attenuation. An approximation, not an exact shading model: the
/// attenuation term is subtracted as-is rather than scaling the diffuse lobe.
pub fn diffuse_light(scene: &impl Sdf, p: &V3, light_pos: &V3) -> f64 {
    let l = normalize(&sub(p, light_pos));
    let n = estimate_normal(scene, p);
    let modify = -light_modifier(scene, p, light_pos, LIGHT_RADIUS);

    let dif = dot(&n, &l).clamp(0., 1.);
    dif + modify
}
