use super::Feature;
use crate::geojson::json_error;
use geoform_core::{GeoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

#[derive(Serialize, Deserialize)]
struct CollectionObject {
	#[serde(rename = "type")]
	kind: String,
	features: Vec<Box<RawValue>>,
}

/// An ordered list of features, encoded as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
	pub features: Vec<Feature>,
}

impl FeatureCollection {
	pub const KIND: &'static str = "FeatureCollection";

	#[must_use]
	pub fn new(features: Vec<Feature>) -> Self {
		Self { features }
	}

	pub fn push(&mut self, feature: Feature) {
		self.features.push(feature);
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Writes `{"type":"FeatureCollection","features":[...]}`, keeping the order of the features.
	pub fn to_json(&self) -> Result<String> {
		let features = self
			.features
			.iter()
			.map(|feature| RawValue::from_string(feature.to_json()?).map_err(json_error))
			.collect::<Result<Vec<_>>>()?;
		serde_json::to_string(&CollectionObject {
			kind: Self::KIND.to_string(),
			features,
		})
		.map_err(json_error)
	}

	pub fn from_json(json: &str) -> Result<Self> {
		log::trace!("decoding GeoJSON FeatureCollection from {} bytes", json.len());
		let object: CollectionObject = serde_json::from_str(json).map_err(json_error)?;
		if object.kind != Self::KIND {
			return Err(GeoError::FormatMismatch {
				expected: Self::KIND,
				found: object.kind,
			});
		}
		object
			.features
			.iter()
			.map(|raw| Feature::from_json(raw.get()))
			.collect::<Result<_>>()
			.map(Self::new)
	}
}

impl From<Vec<Feature>> for FeatureCollection {
	fn from(features: Vec<Feature>) -> Self {
		Self::new(features)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{LineString, Point};
	use anyhow::Result;
	use pretty_assertions::assert_eq;

	fn example() -> FeatureCollection {
		FeatureCollection::from(vec![
			Feature::new(Point::new(1.0, 2.0)),
			Feature::new(LineString::from([[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]])),
			Feature::new(Point::new(1.0, 2.0)),
		])
	}

	#[test]
	fn json_keeps_order_and_duplicates() -> Result<()> {
		let collection = example();
		let json = collection.to_json()?;
		assert_eq!(
			json,
			concat!(
				r#"{"type":"FeatureCollection","features":["#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]}},"#,
				r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0],[2.0,0.0]]}},"#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]}}"#,
				"]}"
			)
		);
		let decoded = FeatureCollection::from_json(&json)?;
		assert_eq!(decoded.len(), 3);
		assert_eq!(decoded, collection);
		assert_eq!(decoded.to_json()?, json);
		Ok(())
	}

	#[test]
	fn empty_collection() -> Result<()> {
		let mut collection = FeatureCollection::default();
		assert!(collection.is_empty());
		assert_eq!(collection.to_json()?, r#"{"type":"FeatureCollection","features":[]}"#);
		collection.push(Feature::new(Point::new(0.0, 0.0)));
		assert_eq!(collection.len(), 1);
		Ok(())
	}

	#[test]
	fn decode_failures() {
		assert_eq!(
			FeatureCollection::from_json(r#"{"type":"Feature","features":[]}"#),
			Err(GeoError::FormatMismatch {
				expected: "FeatureCollection",
				found: "Feature".to_string()
			})
		);
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[]}}]}"#;
		assert!(matches!(
			FeatureCollection::from_json(json),
			Err(GeoError::UnsupportedFeatureGeometry(_))
		));
	}
}
