//! Per-face reference data consumed by boundary and port assignment.

use serde::{Deserialize, Serialize};

use crate::direction::FaceDirection;
use crate::rect_box::RectBox;

/// A start/end pair of dimensioned coordinate triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Edge start.
    pub start: [String; 3],
    /// Edge end.
    pub end: [String; 3],
}

/// Everything needed to pick a face and orient a boundary on it.
///
/// `point` locates the face on `object`; `edges[0]` and `edges[1]` share
/// their start point and span the face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnchor {
    /// Modeler object name.
    pub object: String,
    /// Which face.
    pub direction: FaceDirection,
    /// Face center.
    pub point: [String; 3],
    /// The two in-plane reference edges.
    pub edges: [Edge; 2],
}

impl FaceAnchor {
    /// Flat `[P0, P1, P0, P2]` form for APIs that take four points.
    pub fn edge_points(&self) -> [[String; 3]; 4] {
        let [first, second] = &self.edges;
        [
            first.start.clone(),
            first.end.clone(),
            second.start.clone(),
            second.end.clone(),
        ]
    }
}

impl RectBox {
    /// Face anchor for `dir`.
    pub fn face_anchor(&self, dir: FaceDirection) -> FaceAnchor {
        let [p0, p1, p0b, p2] = self.face_edge(dir);
        FaceAnchor {
            object: self.name().to_string(),
            direction: dir,
            point: self.face_point(dir),
            edges: [
                Edge { start: p0, end: p1 },
                Edge {
                    start: p0b,
                    end: p2,
                },
            ],
        }
    }

    /// Anchors for all six faces in [`FaceDirection::ALL`] order.
    pub fn anchors(&self) -> Vec<FaceAnchor> {
        FaceDirection::ALL
            .iter()
            .map(|&dir| self.face_anchor(dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> RectBox {
        RectBox::new("Box1", "mm", [0.0, 0.0, -15.0], [10.8, 10.8, 50.0])
    }

    #[test]
    fn anchor_matches_queries() {
        let b = cell();
        for dir in FaceDirection::ALL {
            let anchor = b.face_anchor(dir);
            assert_eq!(anchor.object, "Box1");
            assert_eq!(anchor.direction, dir);
            assert_eq!(anchor.point, b.face_point(dir));
            assert_eq!(anchor.edge_points(), b.face_edge(dir));
            assert_eq!(anchor.edges[0].start, anchor.edges[1].start);
        }
    }

    #[test]
    fn anchors_cover_all_faces_in_order() {
        let anchors = cell().anchors();
        let dirs: Vec<_> = anchors.iter().map(|a| a.direction).collect();
        assert_eq!(dirs, FaceDirection::ALL.to_vec());
    }

    #[test]
    fn floquet_anchor_on_top_face() {
        let anchor = cell().face_anchor(FaceDirection::Up);
        assert_eq!(anchor.point, ["5.4mm", "5.4mm", "35.0mm"]);
        assert_eq!(anchor.edges[0].start, ["0.0mm", "0.0mm", "35.0mm"]);
        assert_eq!(anchor.edges[0].end, ["0.0mm", "10.8mm", "35.0mm"]);
        assert_eq!(anchor.edges[1].end, ["10.8mm", "0.0mm", "35.0mm"]);
    }

    #[test]
    fn anchor_json_shape() {
        let anchor = cell().face_anchor(FaceDirection::Down);
        let json = serde_json::to_value(&anchor).unwrap();
        assert_eq!(json["object"], "Box1");
        assert_eq!(json["direction"], "down");
        assert_eq!(json["point"][2], "-15.0mm");
        assert_eq!(json["edges"][1]["end"][0], "10.8mm");

        let back: FaceAnchor = serde_json::from_value(json).unwrap();
        assert_eq!(back, anchor);
    }
}
