// Host page wiring and web-only tuning.
// Element ids must match `index.html`; scene and audio tuning lives in
// `core/constants.rs`.

// Elements
pub const CANVAS_ID: &str = "app-canvas";
pub const UPLOAD_BUTTON_ID: &str = "upload-button";
pub const FILE_INPUT_ID: &str = "audio-file";
pub const STOP_BUTTON_ID: &str = "stop-button";

// Pointer cursors
pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

// Messages
pub const INVALID_FILE_ALERT: &str = "Please select a valid audio file (MP3, WAV, etc.)";

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.05, 0.06, 0.09];

// Light direction (towards the light, world space) and ambient term
pub const LIGHT_DIR: [f32; 3] = [0.5, 1.0, 0.6];
pub const AMBIENT_LIGHT: f32 = 0.35;
