use crate::math::{abs, sub, v, vabs, vmax, V3};
use crate::Sdf;

/// Distance from `p` to a sphere of radius `r` centered at the local origin.
pub fn sd_sphere(p: &V3, r: f64) -> f64 {
    abs(p) - r
}

/// Exact signed distance to an axis-aligned box with half-extents `b`.
/// Negative inside (distance to the nearest face), not just a bound.
pub fn sd_box(p: &V3, b: &V3) -> f64 {
    let q = sub(&vabs(p), b);
    abs(&vmax(&q, 0.)) + q.x.max(q.y.max(q.z)).min(0.)
}

/// Box with corners rounded by `r`. Degenerates to `sd_box` at `r = 0`.
pub fn sd_round_box(p: &V3, b: &V3, r: f64) -> f64 {
    let q = sub(&vabs(p), b) + v(r, r, r);
    abs(&vmax(&q, 0.)) + q.x.max(q.y.max(q.z)).min(0.) - r
}

pub fn union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

pub fn intersect(d1: f64, d2: f64) -> f64 {
    d1.max(d2)
}

pub fn subtract(d1: f64, d2: f64) -> f64 {
    d1.max(-d2)
}

#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere { radius: f64 },
    Box { half: V3 },
    RoundBox { half: V3, radius: f64 },
}

impl Primitive {
    /// Distance in the primitive's local frame (centered at the origin).
    pub fn distance(&self, p: &V3) -> f64 {
        match self {
            Primitive::Sphere { radius } => sd_sphere(p, *radius),
            Primitive::Box { half } => sd_box(p, half),
            Primitive::RoundBox { half, radius } => sd_round_box(p, half, *radius),
        }
    }
}

/// A primitive translated to `center` in world space.
#[derive(Clone, Debug)]
pub struct Placed {
    pub shape: Primitive,
    pub center: V3,
}

impl Sdf for Placed {
    fn distance(&self, p: &V3) -> f64 {
        self.shape.distance(&sub(p, &self.center))
    }
}

/// An ordered list of placed primitives reduced by `union`. The tracer only
/// sees this through the `Sdf` trait, so swapping the layout never touches it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub objects: Vec<Placed>,
}

impl Scene {
    /// The reference scene: a sphere at the origin inside an open box made of
    /// five walls (floor, ceiling, back, left, right; the +z side is open).
    pub fn walled_room(sphere_radius: f64) -> Scene {
        let wall = |half: V3, center: V3| Placed {
            shape: Primitive::Box { half },
            center,
        };
        Scene {
            objects: vec![
                Placed {
                    shape: Primitive::Sphere {
                        radius: sphere_radius,
                    },
                    center: v(0., 0., 0.),
                },
                wall(v(2., 0.5, 2.), v(0., 2., 0.)),
                wall(v(2., 0.5, 2.), v(0., -2., 0.)),
                wall(v(2., 2., 0.5), v(0., 0., -2.)),
                wall(v(0.5, 2., 2.), v(2., 0., 0.)),
                wall(v(0.5, 2., 2.), v(-2., 0., 0.)),
            ],
        }
    }
}

impl Sdf for Scene {
    fn distance(&self, p: &V3) -> f64 {
        self.objects
            .iter()
            .map(|o| o.distance(p))
            .fold(f64::INFINITY, union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{v, O};

    #[test]
    fn sphere_is_magnitude_minus_radius() {
        for p in [v(1., 2., 3.), v(-4., 0., 0.5), O] {
            assert_eq!(sd_sphere(&p, 1.5), abs(&p) - 1.5);
        }
    }

    #[test]
    fn unit_box_center_is_one_inside() {
        assert_eq!(sd_box(&O, &v(1., 1., 1.)), -1.);
    }

    #[test]
    fn box_surface_and_outside() {
        let b = v(1., 1., 1.);
        assert_eq!(sd_box(&v(1., 0., 0.), &b), 0.);
        assert_eq!(sd_box(&v(2., 0., 0.), &b), 1.);
        // corner: exact Euclidean distance
        let corner = sd_box(&v(2., 2., 2.), &b);
        assert!((corner - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn round_box_with_zero_radius_is_box() {
        let b = v(1., 0.5, 2.);
        for p in [O, v(1.5, 0., 0.), v(-0.2, 0.3, 1.9), v(3., 3., 3.)] {
            assert_eq!(sd_round_box(&p, &b, 0.), sd_box(&p, &b));
        }
    }

    #[test]
    fn combinators_are_min_max_algebra() {
        assert_eq!(union(1., 2.), 1.);
        assert_eq!(union(2., 1.), 1.);
        assert_eq!(union(1., 1.), 1.);
        assert_eq!(intersect(1., 2.), 2.);
        assert_eq!(subtract(1., 2.), 1f64.max(-2.));
        assert_eq!(subtract(1., -3.), 3.);
    }

    #[test]
    fn walled_room_origin_is_inside_sphere() {
        let scene = Scene::walled_room(1.);
        assert_eq!(scene.distance(&O), -1.);
    }

    #[test]
    fn walled_room_open_toward_positive_z() {
        let scene = Scene::walled_room(1.);
        // just outside the opening: nearest surface is a wall edge, not a wall face
        let d = scene.distance(&v(0., 0., 3.));
        assert!(d > 0.);
        // deep along -z sits inside the back wall
        assert!(scene.distance(&v(0., 0., -2.)) < 0.);
    }
}
