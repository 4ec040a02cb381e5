use glam::{Mat3, Vec3, Vec4};
use std::f32::consts::FRAC_PI_4;
use super::*;

const EPS: f32 = 1e-5;

fn create_test_camera() -> Camera {
    Camera::new(
        Vec3::new(3.0, 2.0, -8.0),
        Vec3::new(0.5, 0.0, 1.0),
        16.0 / 9.0,
        0.5,
        0.1,
        100.0,
    )
}

// ============================================================================
// view_matrix
// ============================================================================

#[test]
fn test_view_rotation_block_is_orthonormal() {
    let cameras = [
        create_test_camera(),
        Camera::new(Vec3::ZERO, Vec3::Z, 1.0, FRAC_PI_4, 0.1, 100.0),
        Camera::new(Vec3::new(-4.0, 10.0, 2.0), Vec3::new(1.0, -1.0, 0.0), 1.3, 0.7, 0.5, 50.0),
    ];

    for camera in cameras {
        let view = camera.view_matrix();
        let rows = [
            view.row(0).truncate(),
            view.row(1).truncate(),
            view.row(2).truncate(),
        ];

        for row in &rows {
            assert!((row.length() - 1.0).abs() < EPS, "row should be unit length");
        }
        assert!(rows[0].dot(rows[1]).abs() < EPS);
        assert!(rows[0].dot(rows[2]).abs() < EPS);
        assert!(rows[1].dot(rows[2]).abs() < EPS);

        let det = Mat3::from_mat4(view).determinant();
        assert!((det - 1.0).abs() < EPS, "determinant should be +1, got {}", det);
    }
}

#[test]
fn test_view_matrix_maps_target_onto_positive_z() {
    let camera = create_test_camera();
    let view = camera.view_matrix();

    let target_in_view = view.transform_point3(camera.target);
    let distance = (camera.target - camera.position).length();

    assert!(target_in_view.x.abs() < 1e-4);
    assert!(target_in_view.y.abs() < 1e-4);
    assert!((target_in_view.z - distance).abs() < 1e-4);
}

#[test]
fn test_view_matrix_maps_position_to_origin() {
    let camera = create_test_camera();
    let eye = camera.view_matrix().transform_point3(camera.position);
    assert!(eye.length() < 1e-4);
}

#[test]
fn test_view_matrix_ignores_rotation_field() {
    let mut camera = create_test_camera();
    let before = camera.view_matrix();
    camera.rotation = 1.25;
    assert_eq!(camera.view_matrix(), before);
}

// ============================================================================
// projection_matrix
// ============================================================================

#[test]
fn test_projection_matches_left_handed_formula() {
    let camera = Camera::new(Vec3::ZERO, Vec3::Z, 2.0, FRAC_PI_4, 1.0, 11.0);
    let proj = camera.projection_matrix();

    // ys = 1 / tan(π/4) = 1, xs = ys / aspect, zs = far / (far - near)
    assert!((proj.x_axis - Vec4::new(0.5, 0.0, 0.0, 0.0)).length() < EPS);
    assert!((proj.y_axis - Vec4::new(0.0, 1.0, 0.0, 0.0)).length() < EPS);
    assert!((proj.z_axis - Vec4::new(0.0, 0.0, 1.1, 1.0)).length() < EPS);
    assert!((proj.w_axis - Vec4::new(0.0, 0.0, -1.1, 0.0)).length() < EPS);
}

#[test]
fn test_projection_depth_range() {
    let camera = Camera::new(Vec3::ZERO, Vec3::Z, 1.0, 0.6, 0.5, 20.0);
    let proj = camera.projection_matrix();

    let near = proj * Vec4::new(0.0, 0.0, 0.5, 1.0);
    let far = proj * Vec4::new(0.0, 0.0, 20.0, 1.0);

    assert!((near.z / near.w).abs() < EPS);
    assert!((far.z / far.w - 1.0).abs() < EPS);
}

#[test]
fn test_view_projection_matrix() {
    let camera = create_test_camera();
    assert_eq!(
        camera.view_projection_matrix(),
        camera.projection_matrix() * camera.view_matrix()
    );
}

#[test]
fn test_forward_is_unit_view_direction() {
    let camera = create_test_camera();
    let forward = camera.forward();
    assert!((forward.length() - 1.0).abs() < EPS);
    assert!((forward - camera.view_matrix().row(2).truncate()).length() < EPS);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_accepts_regular_camera() {
    assert!(create_test_camera().validate().is_ok());
}

#[test]
fn test_validate_rejects_degenerate_cameras() {
    let base = create_test_camera();

    let mut same_point = base;
    same_point.target = same_point.position;

    let mut looking_up = base;
    looking_up.target = looking_up.position + Vec3::new(0.0, 5.0, 0.0);

    let mut bad_near = base;
    bad_near.distance_near = 0.0;

    let mut bad_far = base;
    bad_far.distance_far = bad_far.distance_near;

    let mut bad_aspect = base;
    bad_aspect.aspect_ratio = -1.0;

    let mut bad_fov = base;
    bad_fov.fov_vert_half = f32::NAN;

    for camera in [same_point, looking_up, bad_near, bad_far, bad_aspect, bad_fov] {
        match camera.validate() {
            Err(Error::InvalidCamera(_)) => {}
            other => panic!("expected InvalidCamera, got {:?}", other),
        }
    }
}
