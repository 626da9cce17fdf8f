// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn normalize_pointer_top_left() {
    let ndc = normalize_pointer(0.0, 0.0, 800.0, 600.0);
    assert_eq!(ndc.x, -1.0);
    assert_eq!(ndc.y, 1.0);
}

#[test]
fn normalize_pointer_bottom_right() {
    let ndc = normalize_pointer(800.0, 600.0, 800.0, 600.0);
    assert_eq!(ndc.x, 1.0);
    assert_eq!(ndc.y, -1.0);
}

#[test]
fn normalize_pointer_center() {
    let ndc = normalize_pointer(400.0, 300.0, 800.0, 600.0);
    assert!(ndc.x.abs() < 1e-6);
    assert!(ndc.y.abs() < 1e-6);
}

#[test]
fn normalize_pointer_stays_in_range() {
    let sizes = [(800.0_f32, 600.0_f32), (1.0, 1.0), (1920.0, 1080.0), (333.0, 777.0)];
    for (w, h) in sizes {
        for i in 0..=10 {
            for j in 0..=10 {
                let sx = w * i as f32 / 10.0;
                let sy = h * j as f32 / 10.0;
                let ndc = normalize_pointer(sx, sy, w, h);
                assert!((-1.0..=1.0).contains(&ndc.x), "x out of range: {}", ndc.x);
                assert!((-1.0..=1.0).contains(&ndc.y), "y out of range: {}", ndc.y);
            }
        }
    }
}

#[test]
fn normalize_pointer_y_is_flipped() {
    // Moving the pointer down the screen must move normalized y down too.
    let top = normalize_pointer(100.0, 50.0, 800.0, 600.0);
    let bottom = normalize_pointer(100.0, 550.0, 800.0, 600.0);
    assert!(top.y > bottom.y);
    assert_eq!(top.x, bottom.x);
}
