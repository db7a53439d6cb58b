//! Ball colors (0xRRGGBB)

pub const COLOR_RED: u32 = 0xff0000;
pub const COLOR_BLUE: u32 = 0x0000ff;
pub const COLOR_GREEN: u32 = 0x00ff00;
pub const COLOR_YELLOW: u32 = 0xffff00;
pub const COLOR_MAGENTA: u32 = 0xff00ff;
pub const COLOR_CYAN: u32 = 0x00ffff;

/// Palette used when placing the initial population.
pub const DEFAULT_PALETTE: [u32; 5] = [COLOR_RED, COLOR_BLUE, COLOR_GREEN, COLOR_YELLOW, COLOR_MAGENTA];

/// Color of balls spawned by hand.
pub const TEST_BALL_COLOR: u32 = COLOR_CYAN;
