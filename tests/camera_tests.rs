// Host-side tests for the camera math and orbit navigation.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::{Vec2, Vec3};

fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 4.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 75.0_f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    }
}

fn test_params() -> OrbitParams {
    OrbitParams {
        rotate_speed: 0.005,
        pan_speed: 0.002,
        zoom_speed: 0.1,
        damping: 0.25,
        min_distance: 0.5,
        max_distance: 100.0,
    }
}

#[test]
fn ray_direction_is_unit_length() {
    let cam = test_camera();
    for ndc in [
        Vec2::new(0.0, 0.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(0.3, -0.7),
    ] {
        let (_, dir) = screen_to_world_ray(ndc, &cam);
        assert!((dir.length() - 1.0).abs() < 1e-4, "non-unit dir {:?}", dir);
    }
}

#[test]
fn ray_origin_is_camera_eye() {
    let cam = test_camera();
    let (origin, _) = screen_to_world_ray(Vec2::new(0.4, -0.2), &cam);
    assert_eq!(origin, cam.eye);
}

#[test]
fn center_ray_points_at_target() {
    let cam = test_camera();
    let (_, dir) = screen_to_world_ray(Vec2::ZERO, &cam);
    let expected = (cam.target - cam.eye).normalize();
    assert!((dir - expected).length() < 1e-4, "{:?} vs {:?}", dir, expected);
}

#[test]
fn corner_rays_diverge_from_center() {
    let cam = test_camera();
    let (_, center) = screen_to_world_ray(Vec2::ZERO, &cam);
    for corner in [
        Vec2::new(-1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
    ] {
        let (_, dir) = screen_to_world_ray(corner, &cam);
        assert!(center.dot(dir) < 1.0 - 1e-4);
    }
}

#[test]
fn orbit_reproduces_initial_framing() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    controls.update(&mut cam);
    assert!((cam.eye - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-4);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn disabled_controls_ignore_input() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    controls.enabled = false;
    controls.rotate(Vec2::new(250.0, 120.0));
    controls.zoom(3.0);
    controls.pan(Vec2::new(40.0, 40.0));
    let before = cam.eye;
    for _ in 0..10 {
        controls.update(&mut cam);
    }
    assert!((cam.eye - before).length() < 1e-5);
}

#[test]
fn rotate_moves_eye_at_constant_distance() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    controls.rotate(Vec2::new(120.0, 0.0));
    for _ in 0..60 {
        controls.update(&mut cam);
    }
    assert!((cam.eye - Vec3::new(0.0, 0.0, 4.0)).length() > 0.1, "eye did not move");
    assert!((cam.eye.length() - 4.0).abs() < 1e-3, "distance drifted");
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn zoom_clamps_to_distance_limits() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    for _ in 0..200 {
        controls.zoom(5.0);
        controls.update(&mut cam);
    }
    assert!(controls.distance() >= 0.5 - 1e-6);
    for _ in 0..400 {
        controls.zoom(-5.0);
        controls.update(&mut cam);
    }
    assert!(controls.distance() <= 100.0 + 1e-3);
}

#[test]
fn damping_settles_after_input_stops() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    controls.rotate(Vec2::new(80.0, 30.0));
    for _ in 0..300 {
        controls.update(&mut cam);
    }
    let settled = cam.eye;
    for _ in 0..10 {
        controls.update(&mut cam);
    }
    assert!((cam.eye - settled).length() < 1e-4, "orbit did not settle");
}

#[test]
fn pan_keeps_focus_height() {
    let mut cam = test_camera();
    let mut controls = OrbitControls::new(cam.eye, Vec3::ZERO, test_params());
    controls.pan(Vec2::new(50.0, 35.0));
    for _ in 0..60 {
        controls.update(&mut cam);
    }
    assert!(cam.target.y.abs() < 1e-5, "pan drifted vertically");
    assert!(cam.target.length() > 1e-3, "pan had no effect");
}
