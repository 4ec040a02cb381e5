use glam::{Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, PI};
use super::*;

const EPS: f32 = 1e-5;

fn create_test_actor(flags: PassFlags) -> ActorData {
    ActorData::new(
        MeshHandle(3),
        PipelineHandle(1),
        BoundingSphere::new(Vec3::new(0.0, 1.0, 0.0), 2.0),
        flags,
    )
}

// ============================================================================
// BoundingSphere
// ============================================================================

#[test]
fn test_bounding_sphere_packing() {
    let packed = Vec4::new(1.0, 2.0, 3.0, 4.5);
    let sphere = BoundingSphere::from(packed);

    assert_eq!(sphere.center, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(sphere.radius, 4.5);
    assert_eq!(sphere.to_vec4(), packed);
}

#[test]
fn test_bounding_sphere_translated_keeps_radius() {
    let sphere = BoundingSphere::new(Vec3::ONE, 0.5).translated(Vec3::new(10.0, 0.0, -1.0));
    assert_eq!(sphere.center, Vec3::new(11.0, 1.0, 0.0));
    assert_eq!(sphere.radius, 0.5);
}

// ============================================================================
// Construction / pass participation
// ============================================================================

#[test]
fn test_new_actor_defaults() {
    let actor = create_test_actor(PassFlags::FINAL);

    assert_eq!(actor.mesh, MeshHandle(3));
    assert_eq!(actor.pipeline, PipelineHandle(1));
    assert_eq!(actor.diffuse_multiplier, Vec3::ONE);
    assert_eq!(actor.model_position, Vec3::ZERO);
    assert_eq!(actor.instance_count_in_reflection, 0);
    assert!(!actor.visible_in_final);
}

#[test]
fn test_actor_participation() {
    let both = create_test_actor(PassFlags::REFLECTION | PassFlags::FINAL);
    assert!(both.participates_in(PassFlags::REFLECTION));
    assert!(both.participates_in(PassFlags::FINAL));
    assert!(both.participates_in(PassFlags::ALL_PASS));

    let none = create_test_actor(PassFlags::empty());
    for pass in PassFlags::DEFINED {
        assert!(!none.participates_in(pass));
    }
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn test_update_model_position_orbits_rotation_point() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.rotation_point = Vec3::new(5.0, 0.0, 0.0);
    actor.translation = Vec3::new(1.0, 0.0, 0.0);
    actor.rotation_axis = Vec3::Y;
    actor.rotation_amount = FRAC_PI_2;

    actor.update_model_position();

    // +X rotated a quarter turn around +Y lands on -Z
    assert!((actor.model_position - Vec3::new(5.0, 0.0, -1.0)).length() < EPS);
}

#[test]
fn test_advance_rotation_uses_speed() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.translation = Vec3::new(0.0, 0.0, 2.0);
    actor.rotation_speed = PI;

    actor.advance_rotation(0.5);
    assert!((actor.rotation_amount - FRAC_PI_2).abs() < EPS);

    actor.advance_rotation(0.5);
    assert!((actor.rotation_amount - PI).abs() < EPS);
    assert!((actor.model_position - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-4);
}

#[test]
fn test_zero_axis_means_no_rotation() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.rotation_axis = Vec3::ZERO;
    actor.rotation_amount = 1.0;
    actor.translation = Vec3::new(1.0, 2.0, 3.0);

    actor.update_model_position();

    assert_eq!(actor.model_position, Vec3::new(1.0, 2.0, 3.0));
    assert!(!actor.model_matrix().is_nan());
}

#[test]
fn test_model_matrix_places_origin_at_model_position() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.translation = Vec3::new(3.0, 0.0, 0.0);
    actor.rotation_amount = 0.7;
    actor.update_model_position();

    let origin = actor.model_matrix().transform_point3(Vec3::ZERO);
    assert!((origin - actor.model_position).length() < EPS);
}

#[test]
fn test_world_bounding_sphere_follows_model_position() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.model_position = Vec3::new(-4.0, 0.0, 9.0);

    let world = actor.world_bounding_sphere();
    assert_eq!(world.center, Vec3::new(-4.0, 1.0, 9.0));
    assert_eq!(world.radius, 2.0);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_accepts_zero_radius() {
    let mut actor = create_test_actor(PassFlags::FINAL);
    actor.bounding_sphere.radius = 0.0;
    assert!(actor.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_spheres() {
    let mut negative = create_test_actor(PassFlags::FINAL);
    negative.bounding_sphere.radius = -1.0;

    let mut nan_radius = create_test_actor(PassFlags::FINAL);
    nan_radius.bounding_sphere.radius = f32::NAN;

    let mut inf_center = create_test_actor(PassFlags::FINAL);
    inf_center.bounding_sphere.center.x = f32::INFINITY;

    let mut nan_position = create_test_actor(PassFlags::FINAL);
    nan_position.model_position.y = f32::NAN;

    for actor in [negative, nan_radius, inf_center, nan_position] {
        assert!(matches!(actor.validate(), Err(Error::InvalidActor(_))));
    }
}
