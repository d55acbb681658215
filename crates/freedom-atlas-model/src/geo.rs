// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

use crate::IsoCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeographyError(pub String);

impl Display for GeographyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GeographyError {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoProperties {
    #[serde(default)]
    pub name: Option<String>,
}

/// One boundary feature. The geometry is carried through untouched for the
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    /// Numeric ids are kept in their decimal form.
    #[serde(default, deserialize_with = "feature_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: GeoProperties,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

impl GeoFeature {
    #[must_use]
    pub fn iso(&self) -> Option<IsoCode> {
        self.id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(IsoCode::from_source)
    }
}

/// The map's boundary document, a GeoJSON-like feature collection keyed by
/// iso code. Read-only once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(rename = "type", default = "feature_collection")]
    pub kind: String,
    pub features: Vec<GeoFeature>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureId {
    Text(String),
    Number(serde_json::Number),
}

fn feature_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let id = Option::<FeatureId>::deserialize(deserializer)?;
    Ok(id.map(|id| match id {
        FeatureId::Text(text) => text,
        FeatureId::Number(number) => number.to_string(),
    }))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn feature_collection() -> String {
    "FeatureCollection".to_string()
}

impl Geography {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, GeographyError> {
        let doc: Self = serde_json::from_slice(bytes)
            .map_err(|e| GeographyError(format!("geography document is not valid: {e}")))?;
        if doc.kind != "FeatureCollection" {
            return Err(GeographyError(format!(
                "geography document must be a FeatureCollection, got `{}`",
                doc.kind
            )));
        }
        Ok(doc)
    }

    #[must_use]
    pub fn feature(&self, iso: &IsoCode) -> Option<&GeoFeature> {
        self.features
            .iter()
            .find(|f| f.id.as_deref() == Some(iso.as_str()))
    }

    #[must_use]
    pub fn feature_isos(&self) -> Vec<IsoCode> {
        self.features.iter().filter_map(GeoFeature::iso).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        {"type": "Feature", "id": "AUT", "properties": {"name": "Austria"},
         "geometry": {"type": "Polygon", "coordinates": [[[9.5, 47.5], [16.9, 48.0], [9.5, 47.5]]]}},
        {"type": "Feature", "id": "ATA", "properties": {"name": "Antarctica"}, "geometry": null},
        {"type": "Feature", "properties": {}}
      ]
    }"#;

    #[test]
    fn parses_features_and_ignores_unknown_members() {
        let geo = Geography::from_slice(DOC.as_bytes()).expect("geography");
        assert_eq!(geo.features.len(), 3);
        let isos: Vec<String> = geo.feature_isos().into_iter().map(IsoCode::into_inner).collect();
        assert_eq!(isos, vec!["AUT", "ATA"]);
        let aut = geo.feature(&IsoCode::from_source("AUT")).expect("aut");
        assert_eq!(aut.properties.name.as_deref(), Some("Austria"));
    }

    #[test]
    fn null_properties_read_as_empty() {
        let geo = Geography::from_slice(
            br#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"AUT","properties":null,"geometry":null}]}"#,
        )
        .expect("geography");
        assert_eq!(geo.features[0].properties, GeoProperties::default());
        assert_eq!(geo.feature_isos(), vec![IsoCode::from_source("AUT")]);
    }

    #[test]
    fn numeric_ids_become_strings() {
        let geo = Geography::from_slice(
            br#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":40,"properties":{"name":"Austria"},"geometry":null},
                {"type":"Feature","id":null,"properties":{},"geometry":null}]}"#,
        )
        .expect("geography");
        assert_eq!(geo.features[0].id.as_deref(), Some("40"));
        assert_eq!(geo.features[1].id, None);
    }

    #[test]
    fn rejects_non_collections() {
        let err = Geography::from_slice(br#"{"type":"Feature","features":[]}"#)
            .expect_err("must reject");
        assert!(err.0.contains("FeatureCollection"));
        assert!(Geography::from_slice(b"not json").is_err());
    }
}
