// Hover uniform feed: hard strength switch and stale hover point.

use glam::Vec3;
use planet_core::{HoverParams, HoverUniforms, HOVER_RADIUS, HOVER_STRENGTH};

#[test]
fn starts_with_no_displacement() {
    let u = HoverUniforms::default();
    assert_eq!(u.hover_strength, 0.0);
    assert_eq!(u.hover_radius, HOVER_RADIUS);
    assert_eq!(u.hover_point, Vec3::ZERO);
}

#[test]
fn hit_while_hovered_sets_point_and_full_strength() {
    let mut u = HoverUniforms::default();
    let p = Vec3::new(0.1, 0.9, 0.4);
    u.apply_raycast(Some(p), true);
    assert_eq!(u.hover_point, p);
    assert_eq!(u.hover_strength, HOVER_STRENGTH);
    assert_eq!(u.hover_strength, 0.05);
}

#[test]
fn hit_without_hover_flag_is_ignored() {
    let mut u = HoverUniforms::default();
    u.apply_raycast(Some(Vec3::X), false);
    assert_eq!(u.hover_strength, 0.0);
    assert_eq!(u.hover_point, Vec3::ZERO);
}

#[test]
fn miss_cuts_strength_and_leaves_point_stale() {
    let mut u = HoverUniforms::default();
    let p = Vec3::new(0.0, 1.0, 0.0);
    u.apply_raycast(Some(p), true);

    u.apply_raycast(None, true);
    assert_eq!(u.hover_strength, 0.0);
    assert_eq!(u.hover_point, p);

    u.apply_raycast(None, false);
    assert_eq!(u.hover_strength, 0.0);
    assert_eq!(u.hover_point, p);
}

#[test]
fn strength_never_takes_intermediate_values() {
    let mut u = HoverUniforms::default();
    let inputs = [
        (Some(Vec3::X), true),
        (None, true),
        (Some(Vec3::Y), false),
        (Some(Vec3::Z), true),
        (None, false),
    ];
    for (hit, active) in inputs {
        u.apply_raycast(hit, active);
        assert!(u.hover_strength == 0.0 || u.hover_strength == HOVER_STRENGTH);
    }
}

#[test]
fn custom_params_are_respected() {
    let mut u = HoverUniforms::new(HoverParams {
        strength: 0.2,
        radius: 0.5,
    });
    assert_eq!(u.hover_radius, 0.5);
    u.apply_raycast(Some(Vec3::ONE), true);
    assert_eq!(u.hover_strength, 0.2);
}
