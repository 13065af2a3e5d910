//! Face directions and the fixed vertex-index tables behind them.
//!
//! Vertices are indexed 0..8 with bit 0 selecting the high x side, bit 1 the
//! high y side and bit 2 the high z side. The labels follow the modeler
//! convention the tables were written for:
//!
//! | label | face |
//! |---|---|
//! | `left` / `right` | y-low / y-high |
//! | `front` / `rear` | x-high / x-low |
//! | `up` / `down` | z-high / z-low |

use std::fmt;
use std::str::FromStr;

use hfbox_math::Axis;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// One of the six faces of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceDirection {
    /// The y-low face.
    Left,
    /// The y-high face.
    Right,
    /// The z-high face.
    Up,
    /// The z-low face.
    Down,
    /// The x-high face.
    Front,
    /// The x-low face.
    Rear,
}

impl FaceDirection {
    /// All six directions.
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::Left,
        FaceDirection::Right,
        FaceDirection::Up,
        FaceDirection::Down,
        FaceDirection::Front,
        FaceDirection::Rear,
    ];

    /// The lowercase label used on the command line and in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FaceDirection::Left => "left",
            FaceDirection::Right => "right",
            FaceDirection::Up => "up",
            FaceDirection::Down => "down",
            FaceDirection::Front => "front",
            FaceDirection::Rear => "rear",
        }
    }

    /// The face on the other side of the box.
    ///
    /// Periodic boundaries pair a face with its opposite (master/slave).
    pub fn opposite(self) -> Self {
        match self {
            FaceDirection::Left => FaceDirection::Right,
            FaceDirection::Right => FaceDirection::Left,
            FaceDirection::Up => FaceDirection::Down,
            FaceDirection::Down => FaceDirection::Up,
            FaceDirection::Front => FaceDirection::Rear,
            FaceDirection::Rear => FaceDirection::Front,
        }
    }

    /// Axis this face is perpendicular to.
    pub fn normal_axis(self) -> Axis {
        match self {
            FaceDirection::Left | FaceDirection::Right => Axis::Y,
            FaceDirection::Up | FaceDirection::Down => Axis::Z,
            FaceDirection::Front | FaceDirection::Rear => Axis::X,
        }
    }

    /// Whether this face sits on the high side of its normal axis.
    pub fn is_high(self) -> bool {
        matches!(
            self,
            FaceDirection::Right | FaceDirection::Up | FaceDirection::Front
        )
    }

    /// Diagonal vertex pair whose midpoint is the face center.
    pub(crate) fn center_pair(self) -> (usize, usize) {
        match self {
            FaceDirection::Left => (1, 4),
            FaceDirection::Right => (3, 6),
            FaceDirection::Up => (4, 7),
            FaceDirection::Down => (0, 3),
            FaceDirection::Front => (1, 7),
            FaceDirection::Rear => (0, 6),
        }
    }

    /// `[v0, v1, v2]`: reference edges `v0 -> v1` and `v0 -> v2` on the face.
    ///
    /// For `Left` the second edge `5 -> 0` is the face diagonal.
    pub(crate) fn edge_indices(self) -> [usize; 3] {
        match self {
            FaceDirection::Left => [5, 4, 0],
            FaceDirection::Right => [7, 6, 3],
            FaceDirection::Up => [4, 6, 5],
            FaceDirection::Down => [0, 2, 1],
            FaceDirection::Front => [5, 7, 1],
            FaceDirection::Rear => [4, 6, 0],
        }
    }
}

impl fmt::Display for FaceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaceDirection {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceDirection::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| BoxError::InvalidDirection(s.to_string()))
    }
}
