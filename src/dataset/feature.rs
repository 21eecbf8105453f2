//! A single transmission-line feature
//!
//! Features keep their attributes as raw JSON so that fields the query
//! vocabulary does not know about still round-trip to the map unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Attribute names used by the query vocabulary
pub mod fields {
    /// Line voltage in kV (numeric)
    pub const VOLTAGE: &str = "VOLTAGE";
    /// Installation/current type tags, e.g. "AC; UNDERGROUND"
    pub const TYPE: &str = "TYPE";
    /// Operational status, e.g. "IN SERVICE"
    pub const STATUS: &str = "STATUS";
    /// Owning utility
    pub const OWNER: &str = "OWNER";
    /// Line length (numeric)
    pub const SHAPE_LENGTH: &str = "SHAPE__Len";
}

/// One record of the dataset: a geometry plus named attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Optional GeoJSON feature id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Line geography, carried opaquely
    #[serde(default)]
    pub geometry: Value,
    /// Attribute fields
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Creates a feature from attributes, without geometry
    pub fn new(properties: Map<String, Value>) -> Self {
        Self {
            id: None,
            geometry: Value::Null,
            properties,
        }
    }

    /// Sets the geometry
    pub fn with_geometry(mut self, geometry: Value) -> Self {
        self.geometry = geometry;
        self
    }

    /// Returns a field value. Null values are treated as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self.properties.get(field) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// Returns a numeric field, or None if absent or not a number
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Returns a text field, or None if absent or not a string
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_geojson_feature() {
        let f = feature(json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
            "properties": {"VOLTAGE": 345, "OWNER": "ACME POWER"}
        }));

        assert_eq!(f.number(fields::VOLTAGE), Some(345.0));
        assert_eq!(f.text(fields::OWNER), Some("ACME POWER"));
        assert_eq!(f.geometry["type"], "LineString");
    }

    #[test]
    fn test_null_properties_become_empty() {
        let f = feature(json!({"type": "Feature", "geometry": null, "properties": null}));
        assert!(f.properties.is_empty());
    }

    #[test]
    fn test_null_field_is_absent() {
        let f = feature(json!({"type": "Feature", "properties": {"STATUS": null}}));
        assert!(f.get(fields::STATUS).is_none());
        assert!(f.text(fields::STATUS).is_none());
    }

    #[test]
    fn test_wrong_type_accessors() {
        let f = feature(json!({"type": "Feature", "properties": {"VOLTAGE": "500", "TYPE": 3}}));
        assert!(f.number(fields::VOLTAGE).is_none());
        assert!(f.text(fields::TYPE).is_none());
    }

    #[test]
    fn test_serialize_as_geojson() {
        let mut props = Map::new();
        props.insert("OWNER".into(), json!("GRIDCO"));
        let f = Feature::new(props).with_geometry(json!({"type": "LineString", "coordinates": []}));

        let out = serde_json::to_value(&f).unwrap();
        assert_eq!(out["type"], "Feature");
        assert_eq!(out["properties"]["OWNER"], "GRIDCO");
        assert!(out.get("id").is_none());
    }
}
