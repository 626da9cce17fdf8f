// Host-side tests for the ray/mesh picking query.

#![allow(dead_code)]
mod picking {
    include!("../src/picking.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use glam::{Mat4, Vec3};
use picking::*;
use scene::SceneState;

/// One large triangle in the XY plane at local z = 0.
fn triangle_node(position: Vec3) -> MeshNode {
    MeshNode {
        positions: vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        normals: vec![Vec3::Z; 3],
        indices: vec![0, 1, 2],
        position,
        linear: Mat4::IDENTITY,
    }
}

fn down_z_ray() -> Ray {
    Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::new(0.0, 0.0, -1.0),
    }
}

#[test]
fn ray_triangle_hit() {
    let t = ray_triangle(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let t = t.expect("expected a hit");
    assert!((t - 5.0).abs() < 1e-5);
}

#[test]
fn ray_triangle_miss_outside() {
    let t = ray_triangle(
        Vec3::new(5.0, 5.0, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none());
}

#[test]
fn ray_triangle_parallel() {
    let t = ray_triangle(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none());
}

#[test]
fn ray_triangle_behind_origin() {
    let t = ray_triangle(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    assert!(t.is_none(), "triangle behind the ray must not hit");
}

#[test]
fn intersect_empty_root_is_empty() {
    let root = PickRoot { nodes: Vec::new() };
    assert!(root.intersect(&down_z_ray()).is_empty());
}

#[test]
fn intersect_unset_scene_root_is_empty() {
    let scene = SceneState::new();
    assert!(scene.intersect(&down_z_ray()).is_empty());
}

#[test]
fn intersect_orders_hits_nearest_first() {
    // Node 1 sits closer to the ray origin than node 0.
    let root = PickRoot {
        nodes: vec![
            triangle_node(Vec3::ZERO),
            triangle_node(Vec3::new(0.0, 0.0, 2.0)),
        ],
    };
    let hits = root.intersect(&down_z_ray());
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].node, 1);
    assert_eq!(hits[1].node, 0);
    assert!(hits[0].distance <= hits[1].distance);
    assert!((hits[0].distance - 3.0).abs() < 1e-4);
    assert!((hits[1].distance - 5.0).abs() < 1e-4);
}

#[test]
fn intersect_is_idempotent_for_unchanged_scene() {
    let root = PickRoot {
        nodes: vec![
            triangle_node(Vec3::ZERO),
            triangle_node(Vec3::new(0.0, 0.0, 2.0)),
        ],
    };
    let ray = down_z_ray();
    let a = root.intersect(&ray);
    let b = root.intersect(&ray);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.node, y.node);
        assert_eq!(x.point, y.point);
        assert_eq!(x.distance, y.distance);
    }
}

#[test]
fn hit_distance_matches_point() {
    let root = PickRoot {
        nodes: vec![triangle_node(Vec3::new(0.2, 0.1, 1.0))],
    };
    let ray = down_z_ray();
    let hits = root.intersect(&ray);
    assert_eq!(hits.len(), 1);
    let hit = hits[0];
    assert!(((hit.point - ray.origin).length() - hit.distance).abs() < 1e-5);
}

#[test]
fn moved_node_shifts_the_hit_point() {
    let mut root = PickRoot {
        nodes: vec![triangle_node(Vec3::ZERO)],
    };
    let before = root.intersect(&down_z_ray())[0].point;
    root.set_node_xz(0, 0.3, 1.5);
    let after = root.intersect(&down_z_ray())[0].point;
    assert!((after.z - (before.z + 1.5)).abs() < 1e-5);
    // The ray still goes through x = 0; the hit lands on the moved surface.
    assert_eq!(after.x, 0.0);
}

#[test]
fn scaled_node_reports_world_distance() {
    let mut node = triangle_node(Vec3::ZERO);
    node.linear = Mat4::from_scale(Vec3::splat(0.5));
    let root = PickRoot { nodes: vec![node] };
    let hits = root.intersect(&down_z_ray());
    assert_eq!(hits.len(), 1);
    // Plane stays at world z = 0 under uniform scale about the origin.
    assert!((hits[0].distance - 5.0).abs() < 1e-4);
}

#[test]
fn marker_follows_hover_state() {
    let mut scene = SceneState::new();
    assert!(!scene.marker.visible);
    scene.apply_hover(Some(Vec3::new(1.0, 2.0, 3.0)));
    assert!(scene.marker.visible);
    assert_eq!(scene.marker.position, Vec3::new(1.0, 2.0, 3.0));
    scene.apply_hover(None);
    assert!(!scene.marker.visible);
    // Position is stale but hidden; the next hit overwrites it.
    scene.apply_hover(Some(Vec3::ZERO));
    assert!(scene.marker.visible);
    assert_eq!(scene.marker.position, Vec3::ZERO);
}
