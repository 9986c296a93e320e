use std::{fmt, ops};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Points and free directions share one representation.
pub type Point3 = Vector3;

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// in place, chainable. these mutate the receiver and hand it back.
impl Vector3 {
    pub fn add(&mut self, v: &Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    pub fn subtract(&mut self, v: &Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self
    }

    /// Rescales to unit length. A zero vector has no direction and is left as is.
    pub fn normalize(&mut self) -> &mut Self {
        if self.length_squared() == 0.0 {
            return self;
        }
        // divide by the scalar norm, component signs must survive
        let length = self.length();
        self.x /= length;
        self.y /= length;
        self.z /= length;
        self
    }

    pub fn rescale(&mut self, new_length: f64) -> &mut Self {
        if self.length_squared() == 0.0 {
            return self;
        }
        self.normalize().scale(new_length)
    }

    pub fn copy(&mut self, other: &Vector3) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
        self
    }
}

impl Vector3 {
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);
        Vector3::new(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - x2 * y1)
    }

    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Vector pointing from `a` to `b`, i.e. `b - a`.
    pub fn from_to(a: &Point3, b: &Point3) -> Vector3 {
        if !a.is_finite() || !b.is_finite() {
            log::warn!("from_to called with non-finite vector(s) {:?} {:?}", a, b);
        }
        let mut v = *b;
        v.subtract(a);
        v
    }

    /// Angle between `v1` and `v2` in degrees. Zero when either has no length.
    pub fn angle(v1: &Vector3, v2: &Vector3) -> f64 {
        let denominator = v1.length() * v2.length();
        if denominator == 0.0 {
            return 0.0;
        }
        let cos_theta = (v1.dot(v2) / denominator).clamp(-1.0, 1.0);
        cos_theta.acos().to_degrees()
    }

    /// Component of `a` along `onto`. Neither input is touched.
    pub fn project(a: &Vector3, onto: &Vector3) -> Vector3 {
        let onto_length_squared = onto.length_squared();
        if onto_length_squared == 0.0 {
            return Vector3::ZERO;
        }
        let mut projected = *onto;
        projected.scale(a.dot(onto) / onto_length_squared);
        projected
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector3")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl ops::Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        Vector3::add(self, &other);
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.subtract(&other);
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, other: f64) -> Vector3 {
        Vector3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        other * self
    }
}

impl ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, other: f64) {
        self.scale(other);
    }
}

impl ops::Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, other: f64) -> Vector3 {
        Vector3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(other: [f64; 3]) -> Vector3 {
        Vector3::new(other[0], other[1], other[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Vector3 {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
