use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

const BUNDLED_BOUNDARIES: &str = include_str!("../../assets/canada-provinces.geojson");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read boundary dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid boundary GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub id: Option<String>,
    pub properties: Map<String, Value>,
    /// Outline in (longitude, latitude) degrees; empty for non-areal geometry.
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryFeature {
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn has_area(&self) -> bool {
        !self.geometry.0.is_empty()
    }
}

/// Named polygon features read from a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default)]
pub struct BoundaryDataset {
    features: Vec<BoundaryFeature>,
}

impl BoundaryDataset {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    /// Coarse provinces-and-territories outline shipped with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_BOUNDARIES)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let document: FeatureCollectionDoc = serde_json::from_reader(reader)?;
        Ok(document.into_dataset())
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let document: FeatureCollectionDoc = serde_json::from_str(raw)?;
        Ok(document.into_dataset())
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollectionDoc {
    #[serde(default)]
    features: Vec<FeatureDoc>,
}

#[derive(Debug, Deserialize)]
struct FeatureDoc {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<GeometryDoc>,
}

type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeometryDoc {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

impl FeatureCollectionDoc {
    fn into_dataset(self) -> BoundaryDataset {
        BoundaryDataset::new(self.features.into_iter().map(FeatureDoc::into_feature).collect())
    }
}

impl FeatureDoc {
    fn into_feature(self) -> BoundaryFeature {
        let id = match self.id {
            Some(Value::String(id)) => Some(id),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };

        let polygons = match self.geometry {
            Some(GeometryDoc::Polygon { coordinates }) => {
                to_polygon(coordinates).into_iter().collect()
            }
            Some(GeometryDoc::MultiPolygon { coordinates }) => {
                coordinates.into_iter().filter_map(to_polygon).collect()
            }
            Some(GeometryDoc::Unsupported) | None => Vec::new(),
        };

        BoundaryFeature {
            id,
            properties: self.properties.unwrap_or_default(),
            geometry: MultiPolygon::new(polygons),
        }
    }
}

/// First usable ring is the exterior; rings under three positions are dropped.
fn to_polygon(rings: Vec<Vec<Position>>) -> Option<Polygon<f64>> {
    let mut rings = rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter_map(|position| match position.as_slice() {
                    [lon, lat, ..] => Some(Coord { x: *lon, y: *lat }),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .filter(|ring| ring.len() >= 3)
        .map(LineString::new);
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_polygons_and_multipolygons() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": 7, "properties": {"name": "Yukon"},
                 "geometry": {"type": "Polygon", "coordinates": [[[-141, 60], [-124, 60], [-124, 69], [-141, 69], [-141, 60]]]}},
                {"type": "Feature", "properties": {"name": "Nunavut"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[-100, 62, 0], [-90, 62, 0], [-90, 70, 0]]],
                    [[[-80, 65], [-70, 65], [-70, 72]]]
                 ]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "Point", "coordinates": [0, 0]}}
            ]
        }"#;

        let dataset = BoundaryDataset::from_json(raw).expect("valid geojson");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.features()[0].id.as_deref(), Some("7"));
        assert_eq!(dataset.features()[0].geometry.0[0].exterior().0.len(), 5);
        let nunavut = &dataset.features()[1].geometry;
        assert_eq!(nunavut.0.len(), 2);
        assert_eq!(nunavut.0[0].exterior().0[0], Coord { x: -100.0, y: 62.0 });
        // open rings come back closed
        assert!(nunavut.0[1].exterior().is_closed());
        assert!(!dataset.features()[2].has_area());
        assert!(dataset.features()[2].properties.is_empty());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            BoundaryDataset::from_json("{\"features\": 3}"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn bundled_dataset_has_every_region() {
        let dataset = BoundaryDataset::bundled().expect("bundled dataset parses");
        assert_eq!(dataset.len(), 13);
        assert!(dataset.features().iter().all(BoundaryFeature::has_area));
    }
}
