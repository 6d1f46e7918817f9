// Host-side tests for pure input functions.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const RECT: [f32; 4] = [100.0, 50.0, 400.0, 200.0];

#[test]
fn rect_center_is_ndc_origin() {
    let [l, t, w, h] = RECT;
    let ndc = rect_ndc(Vec2::new(300.0, 150.0), l, t, w, h).unwrap();
    assert!(ndc.length() < 1e-6);
}

#[test]
fn rect_corners_map_to_unit_square() {
    let [l, t, w, h] = RECT;
    let tl = rect_ndc(Vec2::new(100.0, 50.0), l, t, w, h).unwrap();
    assert!((tl - Vec2::new(-1.0, 1.0)).length() < 1e-6);
    let br = rect_ndc(Vec2::new(500.0, 250.0), l, t, w, h).unwrap();
    assert!((br - Vec2::new(1.0, -1.0)).length() < 1e-6);
}

#[test]
fn points_outside_rect_are_rejected() {
    let [l, t, w, h] = RECT;
    assert!(rect_ndc(Vec2::new(99.0, 150.0), l, t, w, h).is_none());
    assert!(rect_ndc(Vec2::new(300.0, 251.0), l, t, w, h).is_none());
    assert!(rect_ndc(Vec2::new(300.0, 150.0), l, t, 0.0, 0.0).is_none());
}

#[test]
fn sample_keeps_viewport_coordinates_for_tracking() {
    let viewport = Vec2::new(1024.0, 768.0);
    let s = make_sample(Vec2::new(300.0, 150.0), viewport, RECT);
    assert_eq!(s.client, Vec2::new(300.0, 150.0));
    assert_eq!(s.viewport, viewport);
    assert!(s.surface_ndc.is_some());

    let outside = make_sample(Vec2::new(900.0, 700.0), viewport, RECT);
    assert!(outside.surface_ndc.is_none());
}
