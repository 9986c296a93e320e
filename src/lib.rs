pub mod error;
pub mod geometry;
pub mod math;
pub mod parsing;

pub use error::{Error, Result};
pub use geometry::{Intersection, Raycast, RaycastReport, Sphere};
pub use math::{Point3, Ray, Vector3};
