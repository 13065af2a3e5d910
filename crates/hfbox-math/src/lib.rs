#![warn(missing_docs)]

//! Math types for hfbox geometry.
//!
//! Thin aliases over nalgebra plus the few domain helpers the box model
//! needs: a closed axis enumeration and tolerance constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis (component 0).
    X,
    /// The Y axis (component 1).
    Y,
    /// The Z axis (component 2).
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes orthogonal to this one, in component order.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 model units).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check that `v` has no component off `axis`.
    pub fn is_along(&self, v: &Vec3, axis: Axis) -> bool {
        axis.others().iter().all(|a| self.is_zero(v[a.index()]))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn axis_indices_follow_component_order() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_relative_eq!(v[axis.index()], (i + 1) as f64);
        }
    }

    #[test]
    fn axis_others_excludes_self() {
        for axis in Axis::ALL {
            let others = axis.others();
            assert!(!others.contains(&axis));
            assert_ne!(others[0], others[1]);
        }
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }

    #[test]
    fn tolerance_is_along() {
        let tol = Tolerance::default();
        assert!(tol.is_along(&Vec3::new(0.0, -4.0, 0.0), Axis::Y));
        assert!(!tol.is_along(&Vec3::new(1.0, -4.0, 0.0), Axis::Y));
        assert!(tol.is_zero(-1e-12));
    }
}
