//! # rigid-body2d
//!
//! A single 2D rigid body, the entity a physics simulation steps every frame.
//!
//! A body is built from a mass and a set of shapes placed at body-local
//! offsets. The mass is split evenly between the shapes, and the body's
//! moment of inertia is the sum of each shape's own inertia plus its
//! parallel-axis term. Forces applied at world points feed a linear force and
//! a torque accumulator that an integrator can consume.
//!
//! ```rust
//! use rigid_body2d::prelude::*;
//! use std::sync::Arc;
//!
//! let mut body = BodyBuilder::new_dynamic(2.0)
//!     .position(Vec2::new(0.0, 5.0))
//!     .build();
//! body.add_shape(Arc::new(Circle::new(0.5)), Vec2::new(1.0, 0.0), 0.0);
//!
//! // Push up on the shape: linear force plus counter-clockwise torque
//! let point = body.to_world_frame(Vec2::new(1.0, 0.0));
//! body.apply_force(Vec2::new(0.0, 10.0), point);
//!
//! assert_eq!(body.force, Vec2::new(0.0, 10.0));
//! assert_eq!(body.angular_force, 10.0);
//! assert_eq!(body.bounding_radius(), 1.5);
//! ```

pub mod core;
pub mod physics;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::physics::{
        AttachedShape, BodyBuilder, BodyId, BodyIdAllocator, Capsule, Circle, Convex, Line,
        MassProperties, MotionState, Particle, PhysicsError, Plane, Rectangle, RigidBody, Shape,
    };
    pub use glam::Vec2;
}
