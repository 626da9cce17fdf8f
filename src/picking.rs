use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

/// One ray/geometry intersection. Transient query output; never retained
/// across pointer events.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Index of the mesh node that was hit.
    pub node: usize,
    /// World-space distance from the ray origin.
    pub distance: f32,
}

/// Ray/triangle intersection (Möller–Trumbore). Returns the ray parameter t
/// of the hit, in units of `ray_dir`'s length.
pub fn ray_triangle(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// One pickable mesh with its world placement.
///
/// The world transform is kept split: `position` is the translation part
/// (the component dragging mutates) and `linear` holds rotation/scale with a
/// zeroed translation column, so moving a node never disturbs its
/// orientation.
pub struct MeshNode {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub position: Vec3,
    pub linear: Mat4,
}

impl MeshNode {
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * self.linear
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Minimal geometry capability the drag controller needs; lets the state
/// machine be exercised against a fake provider with no renderer behind it.
pub trait PickTarget {
    fn intersect(&self, ray: &Ray) -> Vec<Hit>;
    fn node_position(&self, node: usize) -> Vec3;
    /// Horizontal-plane move: writes x and z, leaves y untouched.
    fn set_node_xz(&mut self, node: usize, x: f32, z: f32);
}

/// The loaded model, flattened to a list of mesh nodes at load time.
pub struct PickRoot {
    pub nodes: Vec<MeshNode>,
}

impl PickRoot {
    /// Test the ray against every triangle of every node and return the
    /// hits ordered nearest first. No hit is a normal outcome, not an
    /// error. Nothing is cached between calls; nodes may have moved.
    pub fn intersect(&self, ray: &Ray) -> Vec<Hit> {
        let mut hits = Vec::new();
        for (node_index, node) in self.nodes.iter().enumerate() {
            let world = node.world_transform();
            let inv = world.inverse();
            // Intersect in node-local space; the local direction is left
            // unnormalized so the local t maps straight back to a point.
            let lo = inv.transform_point3(ray.origin);
            let ld = inv.transform_vector3(ray.direction);
            for tri in node.indices.chunks_exact(3) {
                let v0 = node.positions[tri[0] as usize];
                let v1 = node.positions[tri[1] as usize];
                let v2 = node.positions[tri[2] as usize];
                if let Some(t) = ray_triangle(lo, ld, v0, v1, v2) {
                    let point = world.transform_point3(lo + ld * t);
                    hits.push(Hit {
                        point,
                        node: node_index,
                        distance: (point - ray.origin).length(),
                    });
                }
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl PickTarget for PickRoot {
    fn intersect(&self, ray: &Ray) -> Vec<Hit> {
        PickRoot::intersect(self, ray)
    }

    fn node_position(&self, node: usize) -> Vec3 {
        self.nodes[node].position
    }

    fn set_node_xz(&mut self, node: usize, x: f32, z: f32) {
        let p = &mut self.nodes[node].position;
        p.x = x;
        p.z = z;
    }
}

/// Strip the translation column off an affine transform.
pub fn linear_part(world: Mat4) -> Mat4 {
    let mut linear = world;
    linear.w_axis = Vec4::W;
    linear
}
