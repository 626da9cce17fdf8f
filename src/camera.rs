use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Compute a world-space ray from a normalized device coordinate.
///
/// The origin is the camera eye. The direction comes from un-projecting the
/// point (ndc.x, ndc.y, 0.5) through the inverse view-projection and
/// subtracting the eye; any depth strictly inside the frustum gives the same
/// direction after normalization.
///
/// Returns `(ray_origin, ray_direction)` with a unit-length direction.
#[inline]
pub fn screen_to_world_ray(ndc: Vec2, camera: &Camera) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p = inv * Vec4::new(ndc.x, ndc.y, 0.5, 1.0);
    let p: Vec3 = p.truncate() / p.w;
    let ro = camera.eye;
    let rd = (p - ro).normalize();
    (ro, rd)
}

// Keep the pole singularities out of reach when pitching.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit-style camera navigation around a focus point.
///
/// Input deltas accumulate into angular/zoom velocities; `update` applies
/// them with exponential damping each frame, so motion eases out after the
/// pointer stops. While `enabled` is false (e.g. during an object drag) new
/// input is ignored but residual velocity still damps to rest.
pub struct OrbitControls {
    pub enabled: bool,
    focus: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_vel: f32,
    pitch_vel: f32,
    zoom_vel: f32,
    pan_vel: Vec3,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
}

pub struct OrbitParams {
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    /// Build controls that reproduce the given eye/focus framing.
    pub fn new(eye: Vec3, focus: Vec3, params: OrbitParams) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(params.min_distance);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            enabled: true,
            focus,
            yaw,
            pitch,
            distance,
            yaw_vel: 0.0,
            pitch_vel: 0.0,
            zoom_vel: 0.0,
            pan_vel: Vec3::ZERO,
            rotate_speed: params.rotate_speed,
            pan_speed: params.pan_speed,
            zoom_speed: params.zoom_speed,
            damping: params.damping,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
        }
    }

    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        self.yaw_vel -= delta.x * self.rotate_speed;
        self.pitch_vel -= delta.y * self.rotate_speed;
    }

    pub fn pan(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let dir = self.offset_dir();
        let right = dir.cross(Vec3::Y).normalize_or_zero();
        // Pan stays in the horizontal plane rather than the screen plane,
        // so the focus height never drifts while panning.
        let forward = Vec3::Y.cross(right);
        self.pan_vel +=
            (right * delta.x + forward * delta.y) * (self.pan_speed * self.distance);
    }

    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.zoom_vel += delta * self.zoom_speed;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply pending motion with damping and write the result into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        self.yaw += self.yaw_vel;
        self.pitch = (self.pitch + self.pitch_vel).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = (self.distance * (1.0 - self.zoom_vel))
            .clamp(self.min_distance, self.max_distance);
        self.focus += self.pan_vel;

        let retain = 1.0 - self.damping;
        self.yaw_vel *= retain;
        self.pitch_vel *= retain;
        self.zoom_vel *= retain;
        self.pan_vel *= retain;

        camera.eye = self.focus + self.offset_dir() * self.distance;
        camera.target = self.focus;
        camera.up = Vec3::Y;
    }

    fn offset_dir(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }
}
