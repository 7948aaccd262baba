// Mass property and bounding radius aggregation over a body's shapes

use super::shape::AttachedShape;

/// Mass properties of a whole body, derived from its mass and shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    /// Total mass (0 for static bodies)
    pub mass: f32,
    /// Inverse mass (0 for infinite mass)
    pub inv_mass: f32,
    /// Moment of inertia around the body's center of mass
    pub inertia: f32,
    /// Inverse inertia (0 when the body cannot rotate)
    pub inv_inertia: f32,
}

impl MassProperties {
    /// Mass properties of a static body
    pub const ZERO: Self = Self {
        mass: 0.0,
        inv_mass: 0.0,
        inertia: 0.0,
        inv_inertia: 0.0,
    };

    /// Aggregate the inertia of all shapes, splitting the mass evenly between them
    ///
    /// Each shape contributes its centroidal moment of inertia for `mass / N`
    /// plus the parallel-axis term `mass / N * |r|^2`, where `r` is the shape's
    /// centroid in the body frame (its offset for centered shapes). Without
    /// shapes the inertia is 0.
    pub fn from_shapes(mass: f32, shapes: &[AttachedShape]) -> Self {
        let inertia: f32 = if shapes.is_empty() {
            0.0
        } else {
            let m = mass / shapes.len() as f32;
            shapes
                .iter()
                .map(|s| {
                    s.shape.compute_moment_of_inertia(m) + m * s.center_of_mass().length_squared()
                })
                .sum()
        };

        Self {
            mass,
            inv_mass: inverse(mass),
            inertia,
            inv_inertia: inverse(inertia),
        }
    }
}

impl Default for MassProperties {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Radius around the body origin enclosing every shape, 0 without shapes
pub fn bounding_radius(shapes: &[AttachedShape]) -> f32 {
    shapes.iter().map(AttachedShape::reach).fold(0.0, f32::max)
}

fn inverse(value: f32) -> f32 {
    if value > 0.0 {
        1.0 / value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::shape::{Circle, Convex, Particle, Rectangle, Shape};
    use approx::assert_relative_eq;
    use glam::Vec2;
    use std::sync::Arc;

    fn attach(shape: impl Shape + 'static, x: f32, y: f32) -> AttachedShape {
        AttachedShape::new(Arc::new(shape), Vec2::new(x, y), 0.0)
    }

    #[test]
    fn test_no_shapes() {
        let props = MassProperties::from_shapes(5.0, &[]);
        assert_eq!(props.inertia, 0.0);
        assert_eq!(props.inv_inertia, 0.0);
        assert_relative_eq!(props.inv_mass, 0.2);
        assert_eq!(bounding_radius(&[]), 0.0);
    }

    #[test]
    fn test_zero_mass() {
        let shapes = [attach(Circle::new(1.0), 2.0, 0.0)];
        let props = MassProperties::from_shapes(0.0, &shapes);
        assert_eq!(props, MassProperties::ZERO);
    }

    #[test]
    fn test_single_centered_shape() {
        let shapes = [attach(Rectangle::new(3.0, 4.0), 0.0, 0.0)];
        let props = MassProperties::from_shapes(12.0, &shapes);
        assert_relative_eq!(props.inertia, 25.0);
        assert_relative_eq!(props.inv_inertia, 0.04);
    }

    #[test]
    fn test_parallel_axis_with_equal_split() {
        // Two unit circles, 4 kg total, 2 kg each, at distance 3 and 1
        let shapes = [attach(Circle::new(1.0), 3.0, 0.0), attach(Circle::new(1.0), 0.0, -1.0)];
        let props = MassProperties::from_shapes(4.0, &shapes);

        let expected: f32 = (1.0 + 2.0 * 9.0) + (1.0 + 2.0 * 1.0);
        assert_relative_eq!(props.inertia, expected);
        assert_relative_eq!(props.inv_inertia, 1.0 / expected);
        assert_relative_eq!(props.inv_mass, 0.25);
    }

    #[test]
    fn test_point_masses_only_use_offsets() {
        let shapes = [attach(Particle, 1.0, 1.0), attach(Particle, -1.0, -1.0)];
        let props = MassProperties::from_shapes(2.0, &shapes);
        assert_relative_eq!(props.inertia, 4.0);
    }

    #[test]
    fn test_off_center_polygon_uses_its_centroid() {
        // Unit square spanning [1, 2] x [0, 1] in its own frame, placed at (2, 0)
        let square = Convex::new(vec![
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
        ])
        .unwrap();
        let shapes = [attach(square, 2.0, 0.0)];
        let props = MassProperties::from_shapes(1.0, &shapes);

        // Centroid sits at (3.5, 0.5) in the body frame
        assert_relative_eq!(props.inertia, 1.0 / 6.0 + 12.5, epsilon = 1e-4);
    }

    #[test]
    fn test_bounding_radius_takes_farthest_shape() {
        let shapes = [
            attach(Circle::new(0.5), 3.0, 4.0),
            attach(Circle::new(2.0), 0.0, 0.0),
            attach(Particle, -1.0, 0.0),
        ];
        assert_relative_eq!(bounding_radius(&shapes), 5.5);
    }
}
