use crate::geometry::{Intersection, Raycast};
use crate::math::{Point3, Ray, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub const DEFAULT_CENTER: Point3 = Point3::ZERO;
    pub const DEFAULT_RADIUS: f64 = 1.0;

    /// Never fails. A non-finite center falls back to the origin, and a radius
    /// that is non-finite or not positive falls back to 1.
    pub fn new(center: Point3, radius: f64) -> Sphere {
        let center = if center.is_finite() {
            center
        } else {
            log::warn!(
                "sphere center {:?} is not a finite point, using {:?}",
                center,
                Sphere::DEFAULT_CENTER
            );
            Sphere::DEFAULT_CENTER
        };
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            log::warn!(
                "sphere radius {} is not a positive finite number, using {}",
                radius,
                Sphere::DEFAULT_RADIUS
            );
            Sphere::DEFAULT_RADIUS
        };
        Sphere { center, radius }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn contains(&self, point: &Point3) -> bool {
        Vector3::from_to(point, &self.center).length_squared() < self.radius * self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(Sphere::DEFAULT_CENTER, Sphere::DEFAULT_RADIUS)
    }
}

impl Raycast for Sphere {
    /// Nearest hit in front of the ray origin, seen from outside the sphere.
    /// Rays starting inside never report a hit.
    fn raycast(&self, ray: &Ray) -> Option<Intersection> {
        let oc = Vector3::from_to(&ray.origin, &self.center);
        let a = ray.direction.dot(&ray.direction);
        if a == 0.0 {
            log::debug!("zero length ray direction from {:?}, no hit", ray.origin);
            return None;
        }
        let b = -2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        if self.contains(&ray.origin) {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b - discriminant_sqrt) / (2.0 * a);
        let t2 = (-b + discriminant_sqrt) / (2.0 * a);
        let t = match (t1 > 0.0, t2 > 0.0) {
            (true, true) => t1.min(t2),
            (true, false) => t1,
            (false, true) => t2,
            (false, false) => return None,
        };
        if !(t > 0.0) {
            return None;
        }

        let point = ray.point_at_parameter(t);
        let mut normal = Vector3::from_to(&self.center, &point);
        normal.normalize();
        if !(normal.length() > 0.0) {
            return None;
        }
        Some(Intersection::new(point, normal, t))
    }
}
