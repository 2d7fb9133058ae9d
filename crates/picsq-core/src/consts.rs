/// Default display viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 600;

/// Default display viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Subfolder created next to each source file when no output folder is set.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "square_output";

/// Canvas fill for pad mode: opaque white.
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Smallest edge a scaled preview may have, so the inverse mapping never divides by zero.
pub const MIN_DISPLAY_EDGE: u32 = 1;

/// Largest pad canvas (in bytes) allocated for one image: 512 MiB, the same
/// ceiling `image` applies when decoding.
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;
