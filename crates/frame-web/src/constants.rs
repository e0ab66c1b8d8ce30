// Asset locations and DOM ids for the web front-end

pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "app-panel";

pub const BASE_FRAME_URL: &str = "/models/BaseFrame.glb";
pub const ROD_PROFILE_URL: &str = "/models/FrameProfile.glb";
