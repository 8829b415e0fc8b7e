//! Generation constants and runtime configuration defaults

// Lattice defaults
/// Default number of tiles along one side of the lattice
pub const DEFAULT_GRID_SIZE: usize = 9;
/// Smallest supported lattice
pub const MIN_GRID_SIZE: usize = 5;
/// Largest supported lattice
pub const MAX_GRID_SIZE: usize = 9;
/// Default distance in pixels between adjacent grid points
pub const DEFAULT_TILE_SPACING: f64 = 40.0;
/// Margin in pixels around the tile lattice
pub const LATTICE_MARGIN: f64 = 50.0;
/// Default stroke width in pixels
pub const DEFAULT_LINE_THICKNESS: f64 = 3.0;

// Direct-draw motif defaults
/// Default recursion depth for recursive motifs
pub const DEFAULT_DEPTH: u8 = 3;
/// Shallowest recursive layout
pub const MIN_DEPTH: u8 = 1;
/// Deepest recursive layout
pub const MAX_DEPTH: u8 = 5;
/// Default motif size for fractal motifs
pub const DEFAULT_MOTIF_SIZE: f64 = 40.0;
/// Recursive base motif size as a fraction of the canvas side
pub const RECURSIVE_BASE_FRACTION: f64 = 0.15;
/// Upper bound on the recursive base motif size at scale 1
pub const RECURSIVE_BASE_CAP: f64 = 120.0;
/// Inset from the canvas edge that fractal motifs must respect
pub const FRACTAL_CANVAS_MARGIN: f64 = 10.0;

// Randomness
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Lower bound of the per-generation connection threshold
pub const LIMIT_MIN: f64 = 0.4;
/// Upper bound (exclusive) of the per-generation connection threshold
pub const LIMIT_MAX: f64 = 0.7;

// Animation
/// Interpolation increment applied per animation frame
pub const ANIMATION_STEP: f64 = 0.02;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the settled frame is held at the end of a GIF
pub const FINAL_FRAME_HOLD: u32 = 25;

// Canvas
/// Default canvas side in pixels (odd so the centre falls on a pixel)
pub const DEFAULT_CANVAS_SIZE: u32 = 601;
/// Largest canvas side in pixels, both as configured and after export scaling
///
/// One RGBA canvas of this side takes 256 MiB.
pub const MAX_CANVAS_SIDE: u32 = 8192;

// Output settings
/// Suffix added to generated filenames
pub const OUTPUT_SUFFIX: &str = "_kolam";
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
