use super::{Point3, Vector3};

use serde::{Deserialize, Serialize};

/// Half-line `origin + t * direction`. `direction` need not be unit length.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vector3) -> Self {
        Ray { origin, direction }
    }
    pub fn point_at_parameter(self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::default(), Vector3::Z)
    }
}
