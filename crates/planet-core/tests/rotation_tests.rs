// Frame-based rotation easing.

use planet_core::rotation::{lerp, RotationEasing};
use planet_core::{ROTATION_SPEED_HOVER, ROTATION_SPEED_IDLE};

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
    assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
    assert!((lerp(1.0, 3.0, 0.5) - 2.0).abs() < 1e-6);
}

#[test]
fn starts_at_idle_speed() {
    let r = RotationEasing::default();
    assert_eq!(r.speed, ROTATION_SPEED_IDLE);
    assert_eq!(r.angle, 0.0);
}

#[test]
fn first_hovered_frame_moves_five_percent_of_the_gap() {
    let mut r = RotationEasing::default();
    r.step(true);
    let expected = 0.004 + (0.001 - 0.004) * 0.05;
    assert!((r.speed - expected).abs() < 1e-9);
    assert!((r.angle - expected).abs() < 1e-9);
}

#[test]
fn hovering_slows_monotonically_without_overshoot() {
    let mut r = RotationEasing::default();
    let mut prev = r.speed;
    for _ in 0..300 {
        r.step(true);
        assert!(r.speed <= prev);
        assert!(r.speed >= ROTATION_SPEED_HOVER);
        prev = r.speed;
    }
    assert!((r.speed - ROTATION_SPEED_HOVER).abs() < 1e-6);
}

#[test]
fn leaving_recovers_idle_speed() {
    let mut r = RotationEasing::default();
    for _ in 0..300 {
        r.step(true);
    }
    let mut prev = r.speed;
    for _ in 0..300 {
        r.step(false);
        assert!(r.speed >= prev);
        assert!(r.speed <= ROTATION_SPEED_IDLE);
        prev = r.speed;
    }
    assert!((r.speed - ROTATION_SPEED_IDLE).abs() < 1e-6);
}

#[test]
fn angle_accumulates_speed_every_frame() {
    let mut r = RotationEasing::default();
    let mut sum = 0.0;
    for i in 0..50 {
        let angle = r.step(i % 2 == 0);
        sum += r.speed;
        assert!((angle - sum).abs() < 1e-5);
    }
}

#[test]
fn gap_to_target_shrinks_strictly_every_frame() {
    let mut r = RotationEasing::default();
    let mut gap = (r.speed - ROTATION_SPEED_HOVER).abs();
    for _ in 0..100 {
        r.step(true);
        let next = (r.speed - ROTATION_SPEED_HOVER).abs();
        assert!(next < gap);
        gap = next;
    }

    let mut gap = (r.speed - ROTATION_SPEED_IDLE).abs();
    for _ in 0..100 {
        r.step(false);
        let next = (r.speed - ROTATION_SPEED_IDLE).abs();
        assert!(next < gap);
        gap = next;
    }
}
