mod primitives;

use std::{fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    error::{Error, Result},
    geometry::{Intersection, Raycast, Sphere},
    math::Ray,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub sphere: SphereData,
    pub ray: RayData,
}

/// A single sphere and a single ray, read from a query document.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Query {
    pub sphere: Sphere,
    pub ray: Ray,
}

impl Query {
    pub fn run(&self) -> Option<Intersection> {
        self.sphere.raycast(&self.ray)
    }
}

impl TryFrom<QueryData> for Query {
    type Error = Error;
    fn try_from(data: QueryData) -> Result<Self> {
        Ok(Query {
            sphere: data.sphere.transform(),
            ray: data.ray.transform()?,
        })
    }
}

pub fn load_json<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .map_err(|e| Error::IO(e, Some(path.display().to_string())))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_query(path: &Path) -> Result<Query> {
    let data = load_json::<QueryData>(path)?;
    log::debug!("loaded query from {}", path.display());
    Query::try_from(data)
}
