// Rigid body physics: shapes, mass properties and body state

pub mod body;
mod id;
mod mass;
pub mod shape;

pub use body::{BodyBuilder, MotionState, RigidBody};
pub use id::{global_allocator, BodyId, BodyIdAllocator};
pub use mass::MassProperties;
pub use shape::{AttachedShape, Capsule, Circle, Convex, Line, Particle, Plane, Rectangle, Shape};

/// Errors raised while building physics objects
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    #[error("Degenerate convex polygon: {vertices} vertices enclose no area")]
    DegenerateConvex { vertices: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_error_display() {
        let err = PhysicsError::DegenerateConvex { vertices: 2 };
        assert_eq!(
            err.to_string(),
            "Degenerate convex polygon: 2 vertices enclose no area"
        );
    }
}
