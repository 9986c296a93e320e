use crate::math::{Point3, Ray, Vector3};

use serde::Serialize;

mod sphere;

pub use sphere::Sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point3,
    /// unit length, pointing away from the surface's interior
    pub normal: Vector3,
    /// ray parameter of the hit. only a physical distance for unit directions.
    pub distance: f64,
}

impl Intersection {
    pub fn new(point: Point3, normal: Vector3, distance: f64) -> Self {
        Intersection {
            point,
            normal,
            distance,
        }
    }
}

pub trait Raycast {
    fn raycast(&self, ray: &Ray) -> Option<Intersection>;
}

/// Flat, nullable rendering of a raycast outcome for callers outside Rust.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RaycastReport {
    pub hit: bool,
    pub point: Option<[f64; 3]>,
    pub normal: Option<[f64; 3]>,
    pub distance: Option<f64>,
}

impl From<Option<Intersection>> for RaycastReport {
    fn from(result: Option<Intersection>) -> Self {
        match result {
            Some(isect) => RaycastReport {
                hit: true,
                point: Some(isect.point.into()),
                normal: Some(isect.normal.into()),
                distance: Some(isect.distance),
            },
            None => RaycastReport {
                hit: false,
                point: None,
                normal: None,
                distance: None,
            },
        }
    }
}
