//! Axis-aligned rectangular box with face-point and face-edge queries.

use hfbox_math::{Point3, Tolerance, Vec3};
use tracing::{debug, trace};

use crate::coord::format_point;
use crate::direction::FaceDirection;
use crate::error::{BoxError, Result};

/// An axis-aligned box, normalized to a minimum corner and non-negative size.
///
/// Vertex layout (bit 0 = high x, bit 1 = high y, bit 2 = high z):
/// ```text
///     v6----v7
///    /|    /|
///   v4----v5|    z
///   | v2--|-v3   | y
///   |/    |/     |/
///   v0----v1     +---x
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RectBox {
    name: String,
    unit: String,
    corner: Point3,
    size: Vec3,
    vertices: [Point3; 8],
}

/// Local frame on a face: origin `P0` and the two in-plane edge vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    /// Shared corner of both edges.
    pub origin: Point3,
    /// `P1 - P0`.
    pub u: Vec3,
    /// `P2 - P0`.
    pub v: Vec3,
}

impl FaceFrame {
    /// `u x v`; zero for a degenerate face.
    pub fn normal(&self) -> Vec3 {
        self.u.cross(&self.v)
    }

    /// Whether the two edges are perpendicular within `tol`.
    pub fn is_orthogonal(&self, tol: &Tolerance) -> bool {
        tol.is_zero(self.u.dot(&self.v))
    }
}

impl RectBox {
    /// Build a box from a start point and a signed size.
    ///
    /// A negative size component extends the box from `start` in the
    /// negative direction; it is folded into the corner so that the stored
    /// size is non-negative on every axis.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        start: [f64; 3],
        size: [f64; 3],
    ) -> Self {
        let name = name.into();
        let mut corner = Point3::origin();
        let mut extent = Vec3::zeros();
        for axis in 0..3 {
            corner[axis] = if size[axis] < 0.0 {
                start[axis] + size[axis]
            } else {
                start[axis]
            };
            extent[axis] = size[axis].abs();
        }
        if corner.coords != Vec3::from(start) {
            debug!(box_name = %name, ?start, ?size, "folded negative extent into corner");
        }

        Self {
            vertices: enumerate_vertices(&corner, &extent),
            name,
            unit: unit.into(),
            corner,
            size: extent,
        }
    }

    /// Checked constructor for untyped input.
    ///
    /// Fails with [`BoxError::MalformedInput`] unless both slices hold exactly
    /// three finite numbers.
    pub fn try_new(
        name: impl Into<String>,
        unit: impl Into<String>,
        start: &[f64],
        size: &[f64],
    ) -> Result<Self> {
        let name = name.into();
        let start = triple(&name, "start", start)?;
        let size = triple(&name, "size", size)?;
        Ok(Self::new(name, unit, start, size))
    }

    /// Object name in the modeler.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit suffix for emitted coordinates.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Minimum corner (vertex 0).
    pub fn corner(&self) -> Point3 {
        self.corner
    }

    /// Non-negative size.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Maximum corner (vertex 7).
    pub fn max_corner(&self) -> Point3 {
        self.vertices[7]
    }

    /// Box centroid.
    pub fn center(&self) -> Point3 {
        self.corner + self.size * 0.5
    }

    /// The 8 vertices in bit order.
    pub fn vertices(&self) -> &[Point3; 8] {
        &self.vertices
    }

    /// Whether `p` lies in the closed box, within the default tolerance.
    pub fn contains(&self, p: &Point3) -> bool {
        let tol = Tolerance::DEFAULT.linear;
        let max = self.max_corner();
        (0..3).all(|a| p[a] >= self.corner[a] - tol && p[a] <= max[a] + tol)
    }

    /// Center of the face `dir`.
    pub fn face_center(&self, dir: FaceDirection) -> Point3 {
        let (a, b) = dir.center_pair();
        let (pa, pb) = (self.vertices[a], self.vertices[b]);
        pa + 0.5 * (pb - pa)
    }

    /// Edge points `[P0, P1, P0, P2]` of the face `dir`.
    ///
    /// `P0 -> P1` is a face edge. `P0 -> P2` is the adjacent edge, except on
    /// `Left` where it is the face diagonal from `P0`.
    pub fn face_edge_points(&self, dir: FaceDirection) -> [Point3; 4] {
        let [v0, v1, v2] = dir.edge_indices();
        let v = &self.vertices;
        [v[v0], v[v1], v[v0], v[v2]]
    }

    /// Reference edges as an origin plus the vectors `P1 - P0` and `P2 - P0`.
    pub fn face_frame(&self, dir: FaceDirection) -> FaceFrame {
        let [p0, p1, _, p2] = self.face_edge_points(dir);
        FaceFrame {
            origin: p0,
            u: p1 - p0,
            v: p2 - p0,
        }
    }

    /// Face center as dimensioned coordinate strings.
    pub fn face_point(&self, dir: FaceDirection) -> [String; 3] {
        trace!(box_name = %self.name, %dir, "face point");
        format_point(&self.face_center(dir), &self.unit)
    }

    /// Face edge points as dimensioned coordinate strings.
    pub fn face_edge(&self, dir: FaceDirection) -> [[String; 3]; 4] {
        trace!(box_name = %self.name, %dir, "face edge");
        self.face_edge_points(dir)
            .map(|p| format_point(&p, &self.unit))
    }

    /// [`face_point`](Self::face_point) keyed by direction label.
    pub fn face_point_named(&self, direction: &str) -> Result<[String; 3]> {
        Ok(self.face_point(direction.parse()?))
    }

    /// [`face_edge`](Self::face_edge) keyed by direction label.
    pub fn face_edge_named(&self, direction: &str) -> Result<[[String; 3]; 4]> {
        Ok(self.face_edge(direction.parse()?))
    }
}

/// All 2^3 low/high combinations, x varying fastest.
fn enumerate_vertices(corner: &Point3, size: &Vec3) -> [Point3; 8] {
    let mut vertices = [*corner; 8];
    let mut i = 0;
    for z_high in [false, true] {
        for y_high in [false, true] {
            for x_high in [false, true] {
                let offset = Vec3::new(
                    if x_high { size.x } else { 0.0 },
                    if y_high { size.y } else { 0.0 },
                    if z_high { size.z } else { 0.0 },
                );
                vertices[i] = *corner + offset;
                i += 1;
            }
        }
    }
    vertices
}

fn triple(name: &str, field: &str, values: &[f64]) -> Result<[f64; 3]> {
    let arr: [f64; 3] = values.try_into().map_err(|_| {
        BoxError::MalformedInput(format!(
            "box {name:?}: {field} needs 3 components, got {}",
            values.len()
        ))
    })?;
    if let Some(bad) = arr.iter().find(|v| !v.is_finite()) {
        return Err(BoxError::MalformedInput(format!(
            "box {name:?}: {field} has non-finite component {bad}"
        )));
    }
    Ok(arr)
}
