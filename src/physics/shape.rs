// Collision shapes that can be attached to a rigid body

use super::PhysicsError;
use crate::core::math::{cross, rotate};
use glam::Vec2;
use parry2d::shape::{Shape as ParryShape, SharedShape};
use std::fmt;
use std::sync::Arc;

/// Geometry the body needs from a shape to aggregate its mass properties
///
/// All quantities are expressed in the shape's local frame. The bounding radius
/// is measured from the shape origin, the moment of inertia about the centroid.
pub trait Shape: Send + Sync {
    /// Radius of the smallest circle around the shape origin that encloses the shape
    fn bounding_radius(&self) -> f32;

    /// Moment of inertia about the centroid if the shape had the given mass
    fn compute_moment_of_inertia(&self, mass: f32) -> f32;

    /// Centroid relative to the shape origin
    fn center_of_mass(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// A shape placed on a body: the shared shape plus its body-local transform
#[derive(Clone)]
pub struct AttachedShape {
    /// The shape itself, possibly shared with other bodies
    pub shape: Arc<dyn Shape>,
    /// Offset from the body's center of mass
    pub offset: Vec2,
    /// Rotation relative to the body
    pub angle: f32,
}

impl AttachedShape {
    pub fn new(shape: Arc<dyn Shape>, offset: Vec2, angle: f32) -> Self {
        Self {
            shape,
            offset,
            angle,
        }
    }

    /// Centroid of the shape in the body frame
    pub fn center_of_mass(&self) -> Vec2 {
        self.offset + rotate(self.shape.center_of_mass(), self.angle)
    }

    /// Distance from the body origin to the farthest point of the shape
    pub fn reach(&self) -> f32 {
        self.offset.length() + self.shape.bounding_radius()
    }
}

impl fmt::Debug for AttachedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedShape")
            .field("bounding_radius", &self.shape.bounding_radius())
            .field("offset", &self.offset)
            .field("angle", &self.angle)
            .finish()
    }
}

/// A solid disc centered on its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f32,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn bounding_radius(&self) -> f32 {
        self.radius
    }

    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        mass * self.radius * self.radius / 2.0
    }
}

/// A point mass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle;

impl Shape for Particle {
    fn bounding_radius(&self) -> f32 {
        0.0
    }

    fn compute_moment_of_inertia(&self, _mass: f32) -> f32 {
        0.0
    }
}

/// An infinite half-plane, usually the ground of a static body
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Shape for Plane {
    fn bounding_radius(&self) -> f32 {
        f32::INFINITY
    }

    fn compute_moment_of_inertia(&self, _mass: f32) -> f32 {
        0.0
    }
}

/// A thin rod along the local x axis, centered on its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub length: f32,
}

impl Line {
    pub fn new(length: f32) -> Self {
        Self { length }
    }
}

impl Shape for Line {
    fn bounding_radius(&self) -> f32 {
        self.length / 2.0
    }

    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        mass * self.length * self.length / 12.0
    }
}

/// An axis-aligned box centered on its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn bounding_radius(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }

    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        mass * (self.width * self.width + self.height * self.height) / 12.0
    }
}

/// A stadium: a segment of `length` along the local x axis swept by `radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub length: f32,
    pub radius: f32,
}

impl Capsule {
    pub fn new(length: f32, radius: f32) -> Self {
        Self { length, radius }
    }
}

impl Shape for Capsule {
    fn bounding_radius(&self) -> f32 {
        self.radius + self.length / 2.0
    }

    // Approximated by a box of (length + radius) x (2 * radius)
    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        let w = self.length + self.radius;
        let h = self.radius * 2.0;
        mass * (h * h + w * w) / 12.0
    }
}

/// A convex polygon given by its vertices in the shape's local frame
///
/// The vertices need not surround the origin; the centroid is computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Convex {
    vertices: Vec<Vec2>,
    centroid: Vec2,
    /// Moment of inertia about the centroid per unit mass
    unit_inertia: f32,
}

impl Convex {
    /// Create a polygon from at least three vertices enclosing a non-zero area
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PhysicsError> {
        let degenerate = || PhysicsError::DegenerateConvex {
            vertices: vertices.len(),
        };

        if vertices.len() < 3 {
            return Err(degenerate());
        }

        let (centroid, unit_inertia) =
            polygon_mass_properties(&vertices).ok_or_else(degenerate)?;

        Ok(Self {
            vertices,
            centroid,
            unit_inertia,
        })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Signed area, positive for counter-clockwise winding
    pub fn area(&self) -> f32 {
        edges(&self.vertices).map(|(a, b)| cross(a, b)).sum::<f32>() / 2.0
    }
}

/// Centroid and centroidal moment of inertia per unit mass of a simple polygon
///
/// Returns None when the vertices enclose no area, relative to their extent.
fn polygon_mass_properties(vertices: &[Vec2]) -> Option<(Vec2, f32)> {
    let first = *vertices.first()?;
    let extent = vertices
        .iter()
        .map(|v| (*v - first).length_squared())
        .fold(0.0, f32::max);

    let mut twice_area = 0.0;
    let mut first_moment = Vec2::ZERO;
    let mut second_moment = 0.0;
    for (a, b) in edges(vertices) {
        let c = cross(a, b);
        twice_area += c;
        first_moment += (a + b) * c;
        second_moment += c * (a.dot(a) + a.dot(b) + b.dot(b));
    }

    if twice_area.abs() <= f32::EPSILON * extent {
        return None;
    }

    let centroid = first_moment / (3.0 * twice_area);
    let about_origin = second_moment / (6.0 * twice_area);
    Some((centroid, about_origin - centroid.length_squared()))
}

/// Consecutive vertex pairs, closing the loop from the last vertex to the first
fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let last = vertices.last().copied();
    last.into_iter()
        .chain(vertices.iter().copied())
        .zip(vertices.iter().copied())
}

impl Shape for Convex {
    fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }

    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        mass * self.unit_inertia
    }

    fn center_of_mass(&self) -> Vec2 {
        self.centroid
    }
}

/// Vertices of a parry triangle or convex polygon
fn parry_polygon(shape: &dyn ParryShape) -> Option<Vec<Vec2>> {
    if let Some(triangle) = shape.as_triangle() {
        let [a, b, c] = [triangle.a, triangle.b, triangle.c];
        return Some(vec![
            Vec2::new(a.x, a.y),
            Vec2::new(b.x, b.y),
            Vec2::new(c.x, c.y),
        ]);
    }
    shape
        .as_convex_polygon()
        .map(|polygon| polygon.points().iter().map(|p| Vec2::new(p.x, p.y)).collect())
}

/// Any parry2d shape can be attached to a body
///
/// Triangles and convex polygons go through the same polygon integration as
/// [`Convex`]. Other shapes use parry's mass properties, which are computed
/// at unit density and rescaled to the requested mass.
impl Shape for SharedShape {
    fn bounding_radius(&self) -> f32 {
        let shape: &dyn ParryShape = &*self.0;
        let sphere = shape.compute_local_bounding_sphere();
        sphere.center().coords.norm() + sphere.radius()
    }

    fn compute_moment_of_inertia(&self, mass: f32) -> f32 {
        let shape: &dyn ParryShape = &*self.0;
        if let Some(vertices) = parry_polygon(shape) {
            return polygon_mass_properties(&vertices)
                .map_or(0.0, |(_, unit_inertia)| mass * unit_inertia);
        }

        let unit = shape.mass_properties(1.0);
        let unit_mass = unit.mass();
        if unit_mass > 0.0 {
            unit.principal_inertia() * mass / unit_mass
        } else {
            0.0
        }
    }

    fn center_of_mass(&self) -> Vec2 {
        let shape: &dyn ParryShape = &*self.0;
        if let Some(vertices) = parry_polygon(shape) {
            return polygon_mass_properties(&vertices)
                .map_or(Vec2::ZERO, |(centroid, _)| centroid);
        }

        let com = shape.mass_properties(1.0).local_com;
        Vec2::new(com.x, com.y)
    }
}
