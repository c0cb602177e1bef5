// Tick and timing
pub const DEFAULT_TICK_RATE_HZ: u32 = 30;
pub const MIN_TICK_RATE_HZ: u32 = 1;
pub const MAX_TICK_RATE_HZ: u32 = 120;
/// Longest gap a single `FrameClock::advance` call will simulate.
pub const MAX_FRAME_DT_MS: u64 = 250;

// Bounce world scale (world pixels per terminal cell)
pub const PIXELS_PER_COL: i32 = 8;
pub const PIXELS_PER_ROW: i32 = 16;

// Files under ~/.arcade/
pub const CONFIG_FILE_NAME: &str = "config.json";

// Layout
pub const INFO_PANEL_WIDTH: u16 = 24;
pub const MIN_CONTENT_HEIGHT: u16 = 10;
