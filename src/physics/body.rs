use super::id::{global_allocator, BodyId, BodyIdAllocator};
use super::mass::{self, MassProperties};
use super::shape::{AttachedShape, Shape};
use crate::core::math::{cross, cross_scalar, rotate, to_global_frame, to_local_frame};
use glam::Vec2;
use log::{debug, trace};
use std::sync::Arc;

/// How a body takes part in the simulation
///
/// The discriminants match the raw tags some simulations store (1, 2, 4), but
/// the states are mutually exclusive and never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotionState {
    /// Moved by forces and collisions
    Dynamic = 0b001,

    /// Never moves
    Static = 0b010,

    /// Moved by its velocity only, not by forces
    Kinematic = 0b100,
}

impl MotionState {
    /// Default classification for a body of the given mass
    pub fn from_mass(mass: f32) -> Self {
        if mass > 0.0 {
            MotionState::Dynamic
        } else {
            MotionState::Static
        }
    }

    /// The raw tag value
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Initial configuration of a rigid body
///
/// Every field defaults to zero, which gives a static body at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyBuilder {
    pub mass: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
    pub force: Vec2,
    pub angular_force: f32,
    /// Overrides the classification derived from the mass
    pub motion_state: Option<MotionState>,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dynamic body description with the given mass
    pub fn new_dynamic(mass: f32) -> Self {
        Self::default().mass(mass)
    }

    /// Create a static body description
    pub fn new_static() -> Self {
        Self::default()
    }

    /// Create a kinematic body description (zero mass, driven by its velocity)
    pub fn new_kinematic() -> Self {
        Self::default().motion_state(MotionState::Kinematic)
    }

    /// Set the mass (0 makes the body static)
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set the initial position
    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the initial linear velocity
    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial angle (radians, counter-clockwise)
    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Set the initial angular velocity (radians per second)
    pub fn angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the initial accumulated force
    pub fn force(mut self, force: Vec2) -> Self {
        self.force = force;
        self
    }

    /// Set the initial accumulated torque
    pub fn angular_force(mut self, angular_force: f32) -> Self {
        self.angular_force = angular_force;
        self
    }

    /// Force a motion state instead of deriving it from the mass
    pub fn motion_state(mut self, motion_state: MotionState) -> Self {
        self.motion_state = Some(motion_state);
        self
    }

    /// Build the body, taking its ID from the process-wide allocator
    pub fn build(self) -> RigidBody {
        self.build_with(global_allocator())
    }

    /// Build the body, taking its ID from `ids`
    pub fn build_with(self, ids: &BodyIdAllocator) -> RigidBody {
        let shapes: Vec<AttachedShape> = Vec::new();
        let mass_properties = MassProperties::from_shapes(self.mass, &shapes);
        let motion_state = self
            .motion_state
            .unwrap_or_else(|| MotionState::from_mass(self.mass));

        let body = RigidBody {
            id: ids.allocate(),
            shapes,
            mass_properties,
            position: self.position,
            angle: self.angle,
            velocity: self.velocity,
            angular_velocity: self.angular_velocity,
            lambda_velocity: Vec2::ZERO,
            lambda_angular_velocity: 0.0,
            force: self.force,
            angular_force: self.angular_force,
            motion_state,
            bounding_radius: 0.0,
        };
        trace!(
            "Created body {} ({:?}, mass {})",
            body.id,
            body.motion_state,
            body.mass()
        );
        body
    }
}

/// A rigid body made of one or more shapes
///
/// Pose, velocities and force accumulators are plain fields that the owning
/// simulation reads and writes every step. Mass properties and the bounding
/// radius are derived from the shapes and only change through the methods
/// below.
#[derive(Debug, Clone)]
pub struct RigidBody {
    id: BodyId,
    shapes: Vec<AttachedShape>,
    mass_properties: MassProperties,
    bounding_radius: f32,

    /// Type of motion (dynamic, static, kinematic)
    pub motion_state: MotionState,

    // Pose
    /// Position of the center of mass in world space
    pub position: Vec2,
    /// Orientation in radians, counter-clockwise
    pub angle: f32,

    // Velocities
    /// Linear velocity
    pub velocity: Vec2,
    /// Angular velocity (radians per second)
    pub angular_velocity: f32,

    // Constraint solver scratch, rebuilt every solve
    /// Linear velocity added by the constraint solver during the last step
    pub lambda_velocity: Vec2,
    /// Angular velocity added by the constraint solver during the last step
    pub lambda_angular_velocity: f32,

    // Forces
    /// Accumulated force (cleared by the simulation each step)
    pub force: Vec2,
    /// Accumulated torque (cleared by the simulation each step)
    pub angular_force: f32,
}

impl RigidBody {
    /// Create a static body at the origin with no shapes
    pub fn new() -> Self {
        BodyBuilder::default().build()
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f32 {
        self.mass_properties.mass
    }

    /// Inverse mass (0 for static bodies)
    pub fn inv_mass(&self) -> f32 {
        self.mass_properties.inv_mass
    }

    /// Moment of inertia around the center of mass
    pub fn inertia(&self) -> f32 {
        self.mass_properties.inertia
    }

    pub fn inv_inertia(&self) -> f32 {
        self.mass_properties.inv_inertia
    }

    pub fn mass_properties(&self) -> MassProperties {
        self.mass_properties
    }

    /// Radius around `position` enclosing all shapes
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    pub fn shapes(&self) -> &[AttachedShape] {
        &self.shapes
    }

    /// Direct access to the attached shapes
    ///
    /// Call [`update_mass_properties`](Self::update_mass_properties) and
    /// [`update_bounding_radius`](Self::update_bounding_radius) after changing them.
    pub fn shapes_mut(&mut self) -> &mut Vec<AttachedShape> {
        &mut self.shapes
    }

    /// Change the mass and recompute the derived properties
    ///
    /// The motion state is left untouched.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass_properties.mass = mass;
        self.update_mass_properties();
    }

    pub fn set_motion_state(&mut self, motion_state: MotionState) {
        if motion_state != self.motion_state {
            debug!(
                "Body {} motion state {:?} -> {:?}",
                self.id, self.motion_state, motion_state
            );
        }
        self.motion_state = motion_state;
    }

    pub fn is_dynamic(&self) -> bool {
        self.motion_state == MotionState::Dynamic
    }

    pub fn is_static(&self) -> bool {
        self.motion_state == MotionState::Static
    }

    pub fn is_kinematic(&self) -> bool {
        self.motion_state == MotionState::Kinematic
    }

    /// Attach a shape at a body-local offset and angle
    ///
    /// Recomputes the mass properties, then the bounding radius.
    pub fn add_shape(&mut self, shape: Arc<dyn Shape>, offset: Vec2, angle: f32) {
        self.shapes.push(AttachedShape::new(shape, offset, angle));
        debug!(
            "Body {}: attached shape #{} at {:?}",
            self.id,
            self.shapes.len(),
            offset
        );
        self.update_mass_properties();
        self.update_bounding_radius();
    }

    /// Attach a shape at the center of mass with no rotation
    pub fn add_shape_at_origin(&mut self, shape: Arc<dyn Shape>) {
        self.add_shape(shape, Vec2::ZERO, 0.0);
    }

    /// Detach the first occurrence of `shape` (compared by identity)
    ///
    /// Returns false if the shape is not attached to this body.
    pub fn remove_shape(&mut self, shape: &Arc<dyn Shape>) -> bool {
        let Some(index) = self
            .shapes
            .iter()
            .position(|attached| Arc::ptr_eq(&attached.shape, shape))
        else {
            return false;
        };

        self.shapes.remove(index);
        debug!("Body {}: detached shape #{}", self.id, index + 1);
        self.update_mass_properties();
        self.update_bounding_radius();
        true
    }

    /// Recompute inertia, inverse mass and inverse inertia from the shapes
    pub fn update_mass_properties(&mut self) {
        self.mass_properties = MassProperties::from_shapes(self.mass(), &self.shapes);
        trace!(
            "Body {}: inertia {} (inv mass {}, inv inertia {})",
            self.id,
            self.mass_properties.inertia,
            self.mass_properties.inv_mass,
            self.mass_properties.inv_inertia
        );
    }

    /// Recompute the bounding radius from the shapes and their offsets
    pub fn update_bounding_radius(&mut self) {
        self.bounding_radius = mass::bounding_radius(&self.shapes);
        trace!("Body {}: bounding radius {}", self.id, self.bounding_radius);
    }

    /// Apply a force at a world point
    ///
    /// The force is added to `force` and its moment around the body position to
    /// `angular_force`.
    pub fn apply_force(&mut self, force: Vec2, world_point: Vec2) {
        let r = world_point - self.position;
        self.force += force;
        self.angular_force += cross(r, force);
    }

    /// Apply a force given in the body frame at a body-local point
    pub fn apply_force_local(&mut self, local_force: Vec2, local_point: Vec2) {
        let force = self.vector_to_world_frame(local_force);
        let world_point = self.to_world_frame(local_point);
        self.apply_force(force, world_point);
    }

    /// Clear the force and torque accumulators
    pub fn set_zero_force(&mut self) {
        self.force = Vec2::ZERO;
        self.angular_force = 0.0;
    }

    /// Clear the constraint solver velocities
    pub fn reset_lambda_velocity(&mut self) {
        self.lambda_velocity = Vec2::ZERO;
        self.lambda_angular_velocity = 0.0;
    }

    /// Add the constraint solver velocities to the body velocities
    pub fn add_lambda_velocity(&mut self) {
        self.velocity += self.lambda_velocity;
        self.angular_velocity += self.lambda_angular_velocity;
    }

    /// Transform a world point to the body frame
    pub fn to_local_frame(&self, world_point: Vec2) -> Vec2 {
        to_local_frame(world_point, self.position, self.angle)
    }

    /// Transform a body-local point to world space
    pub fn to_world_frame(&self, local_point: Vec2) -> Vec2 {
        to_global_frame(local_point, self.position, self.angle)
    }

    /// Rotate a world direction into the body frame
    pub fn vector_to_local_frame(&self, world_vector: Vec2) -> Vec2 {
        rotate(world_vector, -self.angle)
    }

    /// Rotate a body-local direction into world space
    pub fn vector_to_world_frame(&self, local_vector: Vec2) -> Vec2 {
        rotate(local_vector, self.angle)
    }

    /// Velocity of the body material at a world point
    pub fn velocity_at_point(&self, world_point: Vec2) -> Vec2 {
        self.velocity + cross_scalar(self.angular_velocity, world_point - self.position)
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}
