// Camera picking rays and orbit controls.

use glam::{Vec2, Vec3};
use planet_core::{Camera, OrbitControls, OrbitParams, CAMERA_EYE, ORBIT_MAX_POLAR, ORBIT_MIN_POLAR};
use std::f32::consts::FRAC_PI_4;

#[test]
fn center_ray_points_at_target() {
    let cam = Camera::default();
    let ray = cam.ray_through(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert!((ray.origin - CAMERA_EYE).length() < 1e-5);
    assert!((ray.direction - expected).length() < 1e-4);
}

#[test]
fn upper_ndc_ray_tilts_up() {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.5);
    let up = cam.ray_through(Vec2::new(0.0, 0.5));
    let right = cam.ray_through(Vec2::new(0.5, 0.0));
    assert!(up.direction.y > 0.0);
    assert!(right.direction.x > 0.0);
}

#[test]
fn aspect_guards_zero_height() {
    assert_eq!(Camera::aspect_for(800, 400), 2.0);
    assert_eq!(Camera::aspect_for(800, 0), 800.0);
}

#[test]
fn orbit_starts_at_the_default_eye() {
    let orbit = OrbitControls::default();
    assert!((orbit.polar - FRAC_PI_4).abs() < 1e-5);
    assert!(orbit.azimuth.abs() < 1e-6);
    assert!((orbit.eye() - CAMERA_EYE).length() < 1e-4);
}

#[test]
fn update_without_drag_keeps_camera_still() {
    let mut orbit = OrbitControls::default();
    let before = orbit.eye();
    for _ in 0..10 {
        orbit.update();
    }
    assert!((orbit.eye() - before).length() < 1e-5);
}

#[test]
fn polar_angle_is_clamped() {
    let mut orbit = OrbitControls::default();
    orbit.begin_drag(Vec2::new(0.0, 500.0));
    orbit.drag_to(Vec2::new(0.0, 0.0), 100.0);
    orbit.end_drag();
    for _ in 0..500 {
        orbit.update();
    }
    assert!((orbit.polar - ORBIT_MAX_POLAR).abs() < 1e-5);

    orbit.begin_drag(Vec2::new(0.0, 0.0));
    orbit.drag_to(Vec2::new(0.0, 500.0), 100.0);
    orbit.end_drag();
    for _ in 0..500 {
        orbit.update();
    }
    assert!((orbit.polar - ORBIT_MIN_POLAR).abs() < 1e-5);
}

#[test]
fn damped_drag_glides_to_full_turn() {
    let mut orbit = OrbitControls::default();
    orbit.begin_drag(Vec2::ZERO);
    orbit.drag_to(Vec2::new(10.0, 0.0), 100.0);
    orbit.end_drag();
    assert!(!orbit.is_dragging());

    let first = {
        orbit.update();
        orbit.azimuth
    };
    assert!(first < 0.0);
    for _ in 0..1000 {
        orbit.update();
    }
    let total = -std::f32::consts::TAU / 100.0 * 10.0;
    assert!((orbit.azimuth - total).abs() < 1e-3);
    assert!(((orbit.eye() - orbit.target).length() - CAMERA_EYE.length()).abs() < 1e-4);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut orbit = OrbitControls::new(CAMERA_EYE, Vec3::ZERO, OrbitParams::default());
    orbit.drag_to(Vec2::new(50.0, 50.0), 100.0);
    orbit.update();
    assert!((orbit.eye() - CAMERA_EYE).length() < 1e-5);
}
