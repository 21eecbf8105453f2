//! Dataset snapshot and GeoJSON loading

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Number, Value};

use super::errors::{DatasetError, DatasetResult};
use super::feature::{fields, Feature};
use super::summary::DatasetSummary;

/// GeoJSON document shape accepted by the loader
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    features: Vec<Feature>,
}

/// An immutable, ordered collection of features
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<Feature>,
    columns: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Builds a dataset from features already in memory.
    ///
    /// Length values are coerced to numbers here, once, so that the
    /// executor only ever sees numbers or nulls in that column.
    pub fn from_features(mut features: Vec<Feature>) -> Self {
        for feature in &mut features {
            coerce_numeric(feature, fields::SHAPE_LENGTH);
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for feature in &features {
            for key in feature.properties.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        Self {
            features,
            columns,
            loaded_at: Utc::now(),
        }
    }

    /// Parses a GeoJSON FeatureCollection
    pub fn from_geojson_str(input: &str) -> DatasetResult<Self> {
        let raw: RawCollection = serde_json::from_str(input)?;

        match raw.kind.as_deref() {
            Some("FeatureCollection") => Ok(Self::from_features(raw.features)),
            Some(other) => Err(DatasetError::NotFeatureCollection(format!(
                "document type is '{}'",
                other
            ))),
            None => Err(DatasetError::NotFeatureCollection(
                "document has no 'type' member".into(),
            )),
        }
    }

    /// Reads and parses a GeoJSON file
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_geojson_str(&content)
    }

    /// Features in source order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the dataset holds no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Attribute names present on at least one feature, in first-seen order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if any feature carries the attribute
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// When this snapshot was built
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Summarizes the dataset, keeping the `top_n` most frequent sample values
    pub fn summary(&self, top_n: usize) -> DatasetSummary {
        DatasetSummary::build(self, top_n)
    }
}

/// Replaces a field with its numeric value; unparsable values become null.
fn coerce_numeric(feature: &mut Feature, field: &str) {
    let Some(value) = feature.properties.get_mut(field) else {
        return;
    };

    let coerced = match value {
        Value::Number(_) | Value::Null => return,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    };

    *value = coerced;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection(features: Value) -> String {
        json!({"type": "FeatureCollection", "features": features}).to_string()
    }

    #[test]
    fn test_parse_feature_collection() {
        let input = collection(json!([
            {"type": "Feature", "geometry": null, "properties": {"VOLTAGE": 500, "OWNER": "A"}},
            {"type": "Feature", "geometry": null, "properties": {"OWNER": "B", "STATUS": "IN SERVICE"}}
        ]));

        let dataset = Dataset::from_geojson_str(&input).unwrap();
        assert_eq!(dataset.len(), 2);
        // Keys of one feature are visited in sorted order
        assert_eq!(dataset.columns(), &["OWNER", "VOLTAGE", "STATUS"]);
        assert!(dataset.has_column("STATUS"));
        assert!(!dataset.has_column("TYPE"));
    }

    #[test]
    fn test_empty_collection() {
        let dataset = Dataset::from_geojson_str(&collection(json!([]))).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
    }

    #[test]
    fn test_rejects_non_collection() {
        let err = Dataset::from_geojson_str(r#"{"type": "Feature", "properties": {}}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotFeatureCollection(_)));

        let err = Dataset::from_geojson_str(r#"{"features": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotFeatureCollection(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = Dataset::from_geojson_str("not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_length_coercion() {
        let input = collection(json!([
            {"type": "Feature", "properties": {"SHAPE__Len": "1200.5"}},
            {"type": "Feature", "properties": {"SHAPE__Len": "n/a"}},
            {"type": "Feature", "properties": {"SHAPE__Len": 10}},
            {"type": "Feature", "properties": {"SHAPE__Len": true}}
        ]));

        let dataset = Dataset::from_geojson_str(&input).unwrap();
        let lengths: Vec<Option<f64>> = dataset
            .features()
            .iter()
            .map(|f| f.number(fields::SHAPE_LENGTH))
            .collect();
        assert_eq!(lengths, vec![Some(1200.5), None, Some(10.0), None]);
        assert!(dataset.has_column(fields::SHAPE_LENGTH));
    }
}
