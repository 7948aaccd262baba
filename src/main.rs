use anyhow::Result;
use log::info;
use parry2d::shape::SharedShape;
use rigid_body2d::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting rigid body demo...");

    let ids = BodyIdAllocator::new();

    // A static ground body
    let mut ground = BodyBuilder::new_static().build_with(&ids);
    ground.add_shape_at_origin(Arc::new(Plane));
    report(&ground);

    // A dumbbell: two discs joined by a bar, plus a wedge from parry and a convex fin
    let mut dumbbell = BodyBuilder::new_dynamic(6.0)
        .position(Vec2::new(0.0, 4.0))
        .angle(0.25)
        .build_with(&ids);
    dumbbell.add_shape(Arc::new(Circle::new(0.5)), Vec2::new(-2.0, 0.0), 0.0);
    dumbbell.add_shape(Arc::new(Circle::new(0.5)), Vec2::new(2.0, 0.0), 0.0);
    dumbbell.add_shape(Arc::new(Rectangle::new(4.0, 0.2)), Vec2::ZERO, 0.0);

    let wedge = SharedShape::triangle(
        [0.0, 0.0].into(),
        [1.0, 0.0].into(),
        [0.0, 1.0].into(),
    );
    dumbbell.add_shape(Arc::new(wedge), Vec2::new(0.0, 0.5), 0.0);

    let fin = Convex::new(vec![
        Vec2::new(-0.5, -0.25),
        Vec2::new(0.5, -0.25),
        Vec2::new(0.0, 0.5),
    ])?;
    dumbbell.add_shape(Arc::new(fin), Vec2::new(0.0, -0.5), 0.0);
    report(&dumbbell);

    // Push one end up and the other down: pure torque
    let left = dumbbell.to_world_frame(Vec2::new(-2.0, 0.0));
    let right = dumbbell.to_world_frame(Vec2::new(2.0, 0.0));
    let up = dumbbell.vector_to_world_frame(Vec2::new(0.0, 1.0));
    dumbbell.apply_force(-up * 5.0, left);
    dumbbell.apply_force(up * 5.0, right);
    info!(
        "Body {}: force {:?}, torque {:.3}, angular acceleration {:.3}",
        dumbbell.id(),
        dumbbell.force,
        dumbbell.angular_force,
        dumbbell.angular_force * dumbbell.inv_inertia()
    );

    let target = Vec2::new(3.0, 3.0);
    let local = dumbbell.to_local_frame(target);
    info!(
        "World point {:?} is {:?} in body {} (back to world: {:?})",
        target,
        local,
        dumbbell.id(),
        dumbbell.to_world_frame(local)
    );

    dumbbell.set_zero_force();
    info!("Done");

    Ok(())
}

fn report(body: &RigidBody) {
    info!(
        "Body {} [{:?}]: {} shapes, mass {}, inertia {:.4}, inv mass {:.4}, inv inertia {:.4}, bounding radius {:.3}",
        body.id(),
        body.motion_state,
        body.shapes().len(),
        body.mass(),
        body.inertia(),
        body.inv_mass(),
        body.inv_inertia(),
        body.bounding_radius()
    );
}
