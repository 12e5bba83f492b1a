use glam::Vec3;

// Shared scene/audio tuning constants. Render space and audio space share one
// right-handed convention (X right, Y up, Z toward the viewer).

// Listener (the mannequin's head)
pub const LISTENER_POSITION: Vec3 = Vec3::new(0.0, 1.6, 0.0);
pub const LISTENER_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0); // looking down -Z
pub const LISTENER_UP: Vec3 = Vec3::Y;

// Speaker
pub const SPEAKER_START: Vec3 = Vec3::new(2.0, 0.0, 0.0);
pub const GROUND_Y: f32 = 0.0;
// Pick box around the speaker group origin (body, grill, cone and base)
pub const SPEAKER_PICK_MIN: Vec3 = Vec3::new(-0.25, -0.4, -0.15);
pub const SPEAKER_PICK_MAX: Vec3 = Vec3::new(0.25, 0.3, 0.3);

// Panner defaults
pub const PANNER_REF_DISTANCE: f64 = 1.0;
pub const PANNER_MAX_DISTANCE: f64 = 10_000.0;
pub const PANNER_ROLLOFF: f64 = 1.0;
pub const PANNER_CONE_INNER_DEG: f64 = 360.0;
pub const PANNER_CONE_OUTER_DEG: f64 = 0.0;
pub const PANNER_CONE_OUTER_GAIN: f64 = 0.0;
pub const SESSION_GAIN: f32 = 0.5;

// Visual smoothing (per frame, not per second)
pub const IDLE_EASE_FACTOR: f32 = 0.1;
pub const DRAG_PULSE_RATE: f32 = 10.0;
pub const DRAG_PULSE_DEPTH: f32 = 0.1;
pub const MANNEQUIN_SWAY_RATE: f32 = 0.3;
pub const MANNEQUIN_SWAY_ANGLE: f32 = 0.05;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOV_Y_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Ground grid
pub const GRID_HALF_EXTENT: i32 = 10;
pub const GRID_LINE_WIDTH: f32 = 0.02;
pub const GRID_SECTION_EVERY: i32 = 5;
pub const GROUND_SLAB_THICKNESS: f32 = 0.02;

// Palette (linear-ish sRGB values, alpha 1)
pub const COLOR_SKIN: [f32; 3] = [0.992, 0.737, 0.706]; // #fdbcb4
pub const COLOR_SHIRT: [f32; 3] = [0.290, 0.565, 0.886]; // #4a90e2
pub const COLOR_TROUSERS: [f32; 3] = [0.173, 0.243, 0.314]; // #2c3e50
pub const COLOR_STAND: [f32; 3] = [0.204, 0.286, 0.369]; // #34495e
pub const COLOR_EMERALD: [f32; 3] = [0.180, 0.800, 0.443]; // #2ecc71
pub const COLOR_SPEAKER_IDLE: [f32; 3] = [0.902, 0.494, 0.133]; // #e67e22
pub const COLOR_SPEAKER_DRAG: [f32; 3] = [0.906, 0.298, 0.235]; // #e74c3c
pub const COLOR_GROUND: [f32; 3] = [0.11, 0.12, 0.14];
pub const COLOR_GRID_CELL: [f32; 3] = [0.435, 0.435, 0.435]; // #6f6f6f
pub const COLOR_GRID_SECTION: [f32; 3] = [0.616, 0.294, 0.294]; // #9d4b4b
