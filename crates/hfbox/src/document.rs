//! Cell documents: a serialized list of boxes.
//!
//! ```toml
//! unit = "mm"
//!
//! [[boxes]]
//! name = "Box1"
//! start = [0.0, 0.0, -15.0]
//! size = [10.8, 10.8, 50.0]
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoxError, Result};
use crate::rect_box::RectBox;

/// Unit used when neither the box nor the document names one.
pub const DEFAULT_UNIT: &str = "mm";

/// Declarative description of one box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Modeler object name.
    pub name: String,
    /// Unit suffix; falls back to the document unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Start point.
    pub start: Vec<f64>,
    /// Signed size.
    pub size: Vec<f64>,
}

/// A set of boxes sharing a default unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellDocument {
    /// Default unit for boxes that omit one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Box descriptions.
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,
}

impl CellDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize from TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BoxError::Parse(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| BoxError::Parse(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BoxError::Serialize(e.to_string()))
    }

    /// Resolved unit for `spec`.
    pub fn unit_for<'a>(&'a self, spec: &'a BoxSpec) -> &'a str {
        spec.unit
            .as_deref()
            .or(self.unit.as_deref())
            .unwrap_or(DEFAULT_UNIT)
    }

    /// Validate every spec and construct the boxes in document order.
    ///
    /// Names must be unique: boxes are matched to modeler objects by name.
    pub fn build(&self) -> Result<Vec<RectBox>> {
        let mut seen = HashSet::new();
        let mut boxes = Vec::with_capacity(self.boxes.len());
        for spec in &self.boxes {
            if spec.name.is_empty() {
                return Err(BoxError::MalformedInput("box with empty name".into()));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(BoxError::MalformedInput(format!(
                    "duplicate box name {:?}",
                    spec.name
                )));
            }
            let b = RectBox::try_new(&spec.name, self.unit_for(spec), &spec.start, &spec.size)?;
            boxes.push(b);
        }
        debug!(count = boxes.len(), "built boxes from document");
        Ok(boxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::FaceDirection;

    const CELL: &str = r#"
unit = "mm"

[[boxes]]
name = "Box1"
start = [0.0, 0.0, -15.0]
size = [10.8, 10.8, 50.0]

[[boxes]]
name = "Box2"
unit = "um"
start = [0.0, 0.0, 0.0]
size = [10.8, 10.8, -1.6]
"#;

    #[test]
    fn parse_toml_and_build() {
        let doc = CellDocument::from_toml(CELL).unwrap();
        assert_eq!(doc.boxes.len(), 2);
        let boxes = doc.build().unwrap();
        assert_eq!(boxes[0].name(), "Box1");
        assert_eq!(boxes[0].unit(), "mm");
        assert_eq!(boxes[1].unit(), "um");
        assert!((boxes[1].corner().z + 1.6).abs() < 1e-12);
        assert_eq!(
            boxes[0].face_point(FaceDirection::Down),
            ["5.4mm", "5.4mm", "-15.0mm"]
        );
    }

    #[test]
    fn json_roundtrip() {
        let doc = CellDocument::from_toml(CELL).unwrap();
        let json = doc.to_json().unwrap();
        let back = CellDocument::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn unit_defaults() {
        let doc = CellDocument {
            unit: None,
            boxes: vec![BoxSpec {
                name: "a".into(),
                unit: None,
                start: vec![0.0; 3],
                size: vec![1.0; 3],
            }],
        };
        assert_eq!(doc.unit_for(&doc.boxes[0]), DEFAULT_UNIT);
        assert_eq!(doc.build().unwrap()[0].unit(), "mm");
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let text = r#"
[[boxes]]
name = "bad"
start = [0.0, 0.0]
size = [1.0, 1.0, 1.0]
"#;
        let doc = CellDocument::from_toml(text).unwrap();
        assert!(matches!(doc.build(), Err(BoxError::MalformedInput(_))));
    }

    #[test]
    fn duplicate_names_rejected() {
        let spec = BoxSpec {
            name: "dup".into(),
            unit: None,
            start: vec![0.0; 3],
            size: vec![1.0; 3],
        };
        let doc = CellDocument {
            unit: None,
            boxes: vec![spec.clone(), spec],
        };
        let err = doc.build().unwrap_err();
        assert!(err.to_string().contains("duplicate box name"));
    }

    #[test]
    fn invalid_text_is_parse_error() {
        assert!(matches!(
            CellDocument::from_toml("boxes = 3"),
            Err(BoxError::Parse(_))
        ));
        assert!(matches!(
            CellDocument::from_json("{"),
            Err(BoxError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_values_do_not_roundtrip() {
        let doc = CellDocument {
            unit: None,
            boxes: vec![BoxSpec {
                name: "nan".into(),
                unit: None,
                start: vec![f64::NAN, 0.0, 0.0],
                size: vec![1.0; 3],
            }],
        };
        // serde_json writes NaN as null, which does not read back as a number.
        let json = doc.to_json().unwrap();
        assert!(matches!(
            CellDocument::from_json(&json),
            Err(BoxError::Parse(_))
        ));
        assert!(matches!(doc.build(), Err(BoxError::MalformedInput(_))));
        assert!(BoxError::Serialize("x".into())
            .to_string()
            .starts_with("serialize error"));
    }

    #[test]
    fn empty_document_builds_nothing() {
        let doc = CellDocument::new();
        assert!(doc.build().unwrap().is_empty());
        assert_eq!(CellDocument::from_toml("").unwrap(), doc);
    }
}
