use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    geometry::Sphere,
    math::{Point3, Ray, Vector3},
};

// fields stay as raw json until transform, so that junk input can be defaulted
// instead of failing the whole document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SphereData {
    #[serde(default)]
    pub center: Value,
    #[serde(default)]
    pub radius: Value,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RayData {
    #[serde(default)]
    pub origin: Value,
    #[serde(default)]
    pub direction: Value,
}

/// Reads a finite number from a json number or a numeric string.
pub fn parse_scalar(value: &Value) -> Option<f64> {
    let x = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    x.is_finite().then_some(x)
}

/// Accepts `[x, y, z]` or `{"x": .., "y": .., "z": ..}`, components as in [`parse_scalar`].
pub fn parse_vector(value: &Value) -> Option<Vector3> {
    let (x, y, z) = match value {
        Value::Array(components) if components.len() == 3 => {
            (&components[0], &components[1], &components[2])
        }
        Value::Object(map) => (map.get("x")?, map.get("y")?, map.get("z")?),
        _ => return None,
    };
    Some(Vector3::new(
        parse_scalar(x)?,
        parse_scalar(y)?,
        parse_scalar(z)?,
    ))
}

impl SphereData {
    pub fn transform(self) -> Sphere {
        let center = parse_vector(&self.center).unwrap_or_else(|| {
            log::warn!(
                "could not read sphere center from {}, using {:?}",
                self.center,
                Sphere::DEFAULT_CENTER
            );
            Sphere::DEFAULT_CENTER
        });
        let radius = parse_scalar(&self.radius).unwrap_or_else(|| {
            log::warn!(
                "could not read sphere radius from {}, using {}",
                self.radius,
                Sphere::DEFAULT_RADIUS
            );
            Sphere::DEFAULT_RADIUS
        });
        Sphere::new(center, radius)
    }
}

impl RayData {
    pub fn transform(self) -> Result<Ray> {
        let origin: Point3 = parse_vector(&self.origin)
            .ok_or_else(|| Error::InvalidRay(format!("bad origin {}", self.origin)))?;
        let direction = parse_vector(&self.direction)
            .ok_or_else(|| Error::InvalidRay(format!("bad direction {}", self.direction)))?;
        Ok(Ray::new(origin, direction))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar(&json!(2.5)), Some(2.5));
        assert_eq!(parse_scalar(&json!(3)), Some(3.0));
        assert_eq!(parse_scalar(&json!(" -1.25 ")), Some(-1.25));
        assert_eq!(parse_scalar(&json!("bad")), None);
        assert_eq!(parse_scalar(&json!("NaN")), None);
        assert_eq!(parse_scalar(&json!("inf")), None);
        assert_eq!(parse_scalar(&Value::Null), None);
        assert_eq!(parse_scalar(&json!(true)), None);
    }

    #[test]
    fn test_parse_vector_shapes() {
        assert_eq!(
            parse_vector(&json!([1, "2", 3.5])),
            Some(Vector3::new(1.0, 2.0, 3.5))
        );
        assert_eq!(
            parse_vector(&json!({"x": 0, "y": -1, "z": "4"})),
            Some(Vector3::new(0.0, -1.0, 4.0))
        );
        assert_eq!(parse_vector(&json!([1, 2])), None);
        assert_eq!(parse_vector(&json!([1, 2, 3, 4])), None);
        assert_eq!(parse_vector(&json!([1, null, 3])), None);
        assert_eq!(parse_vector(&json!({"x": 0, "y": 1})), None);
        assert_eq!(parse_vector(&json!("0,0,0")), None);
        assert_eq!(parse_vector(&Value::Null), None);
    }

    #[test]
    fn test_null_center_and_bad_radius_default() {
        let data: SphereData =
            serde_json::from_value(json!({"center": null, "radius": "bad"})).unwrap();
        let sphere = data.transform();
        assert_eq!(sphere.center(), Point3::ZERO);
        assert_eq!(sphere.radius(), 1.0);
    }

    #[test]
    fn test_missing_sphere_fields_default() {
        let data: SphereData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data.transform(), Sphere::default());
    }

    #[test]
    fn test_partial_defaults() {
        let data: SphereData =
            serde_json::from_value(json!({"center": [5, 0, 0], "radius": [1]})).unwrap();
        let sphere = data.transform();
        assert_eq!(sphere.center(), Point3::new(5.0, 0.0, 0.0));
        assert_eq!(sphere.radius(), 1.0);

        let data: SphereData =
            serde_json::from_value(json!({"center": {"x": 1}, "radius": "2.5"})).unwrap();
        let sphere = data.transform();
        assert_eq!(sphere.center(), Point3::ZERO);
        assert_eq!(sphere.radius(), 2.5);
    }

    #[test]
    fn test_ray_requires_readable_vectors() {
        let data: RayData =
            serde_json::from_value(json!({"origin": [0, 0, -5], "direction": [0, 0, 1]}))
                .unwrap();
        let ray = data.transform().unwrap();
        assert_eq!(ray, Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::Z));

        let data: RayData =
            serde_json::from_value(json!({"origin": [0, 0, -5], "direction": null})).unwrap();
        assert!(matches!(data.transform(), Err(Error::InvalidRay(_))));
    }
}
