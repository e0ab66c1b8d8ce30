// Assembly sizing, parameter domains, and shared render constants

/// Millimeters per model unit; the base asset is authored in meters.
pub const MM_PER_UNIT: f32 = 1000.0;

/// Gap between the glass edge and a frame bar's seating edge (model units).
pub const EDGE_CLEARANCE: f32 = 0.015;

// Parameter panel domains (millimeters, step 1)
pub const COMMON_WIDTH_MIN_MM: f32 = 100.0;
pub const COMMON_WIDTH_MAX_MM: f32 = 3000.0;
pub const COMMON_HEIGHT_MIN_MM: f32 = 10.0;
pub const COMMON_HEIGHT_MAX_MM: f32 = 3000.0;
pub const CORNER_LEG_MIN_MM: f32 = 10.0;
pub const CORNER_LEG_MAX_MM: f32 = 1000.0;
pub const DEFAULT_CORNER_LEG_MM: f32 = 500.0;

// Width of the cut band subtracted from the glass at a chamfered corner
// (model units). The band runs along the chamfer line for the length of the
// diagonal and cuts through the whole slab.
pub const CUT_BAND_WIDTH: f32 = 1.0;

/// Integer grid used when handing outlines to the overlay evaluator.
pub const OVERLAY_UNIT_SCALE: f32 = 1000.0;

// Part tints consumed by both renderers
pub const FRAME_COLOR: [f32; 4] = [0.23, 0.25, 0.27, 1.0];
pub const SPACER_COLOR: [f32; 4] = [0.62, 0.64, 0.66, 1.0];
pub const ROD_COLOR: [f32; 4] = [0.23, 0.25, 0.27, 1.0];
pub const GLASS_COLOR: [f32; 4] = [0.55, 0.78, 0.90, 0.35];
pub const BACKGROUND_COLOR: [f32; 3] = [0.627, 0.851, 0.937];

// Camera tuning shared by the front-ends
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * core::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
