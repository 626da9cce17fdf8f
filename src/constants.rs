use glam::Vec3;

// Asset and DOM ids
pub const MODEL_URL: &str = "./assets/model.glb";
pub const CANVAS_ID: &str = "viewer-canvas";
pub const VR_BUTTON_ID: &str = "vr-button";

// Camera startup framing
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 4.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit navigation tuning
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;
pub const ORBIT_PAN_SPEED: f32 = 0.002;
pub const ORBIT_ZOOM_SPEED: f32 = 0.1;
pub const ORBIT_DAMPING: f32 = 0.25;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;

// Lighting: one directional key light plus soft ambient
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const AMBIENT_COLOR: Vec3 = Vec3::new(0.25, 0.25, 0.25);

// Intersection marker (small red sphere at the pointer hit point)
pub const MARKER_RADIUS: f32 = 0.05;
pub const MARKER_SECTORS: u32 = 32;
pub const MARKER_STACKS: u32 = 32;
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// Loaded model surface color (the glTF's own materials are not sampled)
pub const MODEL_COLOR: [f32; 4] = [0.78, 0.76, 0.72, 1.0];
