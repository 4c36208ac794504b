use std::ops;

#[derive(Clone, Copy, Debug)]
pub struct V3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// Column-major 3x3 matrix: `m * v == v.x*v0 + v.y*v1 + v.z*v2`.
#[derive(Clone, Copy, Debug)]
pub struct M3 {
    pub v0: V3,
    pub v1: V3,
    pub v2: V3,
}

impl M3 {
    /// Intrinsic Euler rotation, angles in degrees, composed z-then-y-then-x.
    pub fn euler_deg(a: f64, b: f64, c: f64) -> M3 {
        let (sa, ca) = radians(a).sin_cos();
        let (sb, cb) = radians(b).sin_cos();
        let (sc, cc) = radians(c).sin_cos();
        M3 {
            v0: v(ca * cb, sa * cb, -sb),
            v1: v(ca * sb * sc - sa * cc, sa * sb * sc + ca * cc, cb * sc),
            v2: v(ca * sb * cc + sa * sc, sa * sb * cc - ca * sc, cb * cc),
        }
    }
}

pub fn radians(angle: f64) -> f64 {
    angle * std::f64::consts::PI / 180.
}

pub fn sub(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x - y.x,
        y: x.y - y.y,
        z: x.z - y.z,
    }
}

pub fn abs2(x: &V3) -> f64 {
    x.x * x.x + x.y * x.y + x.z * x.z
}

pub fn abs(x: &V3) -> f64 {
    abs2(x).sqrt()
}

pub fn v(x: f64, y: f64, z: f64) -> V3 {
    V3 { x, y, z }
}

pub fn v2(x: f64, y: f64) -> V2 {
    V2 { x, y }
}

pub fn mul(scalar: f64, x: &V3) -> V3 {
    V3 {
        x: x.x * scalar,
        y: x.y * scalar,
        z: x.z * scalar,
    }
}

pub fn add(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x + y.x,
        y: x.y + y.y,
        z: x.z + y.z,
    }
}

pub fn dist(x: &V3, y: &V3) -> f64 {
    abs(&sub(x, y))
}

/// Scales to unit length. Undefined for the zero vector (divides by zero);
/// callers guarantee nonzero input.
pub fn normalize(x: &V3) -> V3 {
    mul(1. / abs(x), x)
}

pub fn dot(x: &V3, y: &V3) -> f64 {
    x.x * y.x + x.y * y.y + x.z * y.z
}

/// Component-wise absolute value.
pub fn vabs(x: &V3) -> V3 {
    v(x.x.abs(), x.y.abs(), x.z.abs())
}

/// Component-wise max against a scalar.
pub fn vmax(x: &V3, s: f64) -> V3 {
    v(x.x.max(s), x.y.max(s), x.z.max(s))
}

impl ops::Add<V3> for V3 {
    type Output = V3;

    fn add(self, rhs: V3) -> V3 {
        return add(&self, &rhs);
    }
}

impl ops::Sub<V3> for V3 {
    type Output = V3;

    fn sub(self, rhs: V3) -> V3 {
        return sub(&self, &rhs);
    }
}

impl ops::Mul<V3> for f64 {
    type Output = V3;

    fn mul(self, rhs: V3) -> Self::Output {
        return mul(self, &rhs);
    }
}

impl ops::Mul<V3> for M3 {
    type Output = V3;

    fn mul(self, rhs: V3) -> Self::Output {
        return rhs.x * self.v0 + rhs.y * self.v1 + rhs.z * self.v2;
    }
}

pub const B1: V3 = V3 {
    x: 1.,
    y: 0.,
    z: 0.,
};

pub const B2: V3 = V3 {
    x: 0.,
    y: 1.,
    z: 0.,
};

pub const B3: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 1.,
};

pub const O: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 0.,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_unit_length() {
        for vec in [v(1., 2., 3.), v(-0.3, 0., 700.), v(1e-4, 1e-4, 1e-4)] {
            let n = normalize(&vec);
            assert!((abs(&n) - 1.).abs() < 1e-12, "|normalize(v)| = {}", abs(&n));
        }
    }

    #[test]
    fn dot_matches_components() {
        assert_eq!(dot(&v(1., 2., 3.), &v(4., 5., 6.)), 32.);
        assert_eq!(dot(&B1, &B2), 0.);
    }

    #[test]
    fn euler_deg_rotates_about_z_first_angle() {
        let rotated = M3::euler_deg(90., 0., 0.) * B1;
        assert!(rotated.x.abs() < 1e-12);
        assert!((rotated.y - 1.).abs() < 1e-12);
        assert!(rotated.z.abs() < 1e-12);
    }

    #[test]
    fn euler_deg_identity_at_zero() {
        let p = v(0.3, -1.7, 4.2);
        let q = M3::euler_deg(0., 0., 0.) * p;
        assert!((q.x - p.x).abs() < 1e-15);
        assert!((q.y - p.y).abs() < 1e-15);
        assert!((q.z - p.z).abs() < 1e-15);
    }

    #[test]
    fn vmax_and_vabs_componentwise() {
        let q = v(-2., 1.5, -0.25);
        assert_eq!(vabs(&q).x, 2.);
        let clamped = vmax(&q, 0.);
        assert_eq!(clamped.x, 0.);
        assert_eq!(clamped.y, 1.5);
        assert_eq!(clamped.z, 0.);
    }
}
