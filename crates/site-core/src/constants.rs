// Shared tuning constants used by the interactive visuals on the landing page.

// Glow grid
pub const GLOW_CELL_PX: f32 = 48.0; // tile edge, CSS px
pub const GLOW_RADIUS_PX: f32 = 150.0; // pointer influence radius
pub const GLOW_DECAY: f32 = 0.92; // per-frame intensity multiplier
pub const GLOW_EPSILON: f32 = 0.02; // cells below this are evicted

// Repulsion defaults (all five are live-tunable from the page)
pub const REPEL_SPRING: f32 = 0.02; // restoring force per px of offset
pub const REPEL_DAMPING: f32 = 0.90; // per-frame velocity multiplier
pub const REPEL_STRENGTH: f32 = 12.0; // impulse at zero distance, px/frame
pub const REPEL_RADIUS_PX: f32 = 150.0; // falloff reaches zero here
pub const REPEL_SPREAD: f32 = 0.35; // 0 = point push, 1 = wall push

// Distributed ("wall") repulsion mode
pub const SPREAD_POINT_THRESHOLD: f32 = 0.05; // below this, a single point source
pub const SOURCE_COUNT_MIN: usize = 3;
pub const SOURCE_COUNT_MAX: usize = 15;

// Edge escape
pub const EDGE_MARGIN_PX: f32 = 40.0; // "near the boundary" band
pub const EDGE_KICK: f32 = 1.6; // escape impulse, px/frame
pub const EDGE_KICK_SPREAD_DAMP: f32 = 0.6; // wall-like pushes are harder to dodge

// Play area
pub const BOUNDS_INSET_PX: f32 = 30.0; // clamp rectangle inset from container edges
pub const BOUNCE_RETAIN: f32 = 0.4; // velocity kept (and inverted) on clamp

// Glyph presentation
pub const ROTOR_DEG_PER_FRAME: f32 = 0.25; // the "1" spins at this fixed rate

// Cursor follower
pub const FOLLOWER_EASE: f32 = 0.12; // fraction of remaining distance per frame
pub const FOLLOWER_OFFSET_PX: f32 = 8.0; // half the dot size, centers it on the cursor

// Card grid
pub const GRID_COLS: u32 = 18;
pub const GRID_ROWS: u32 = 9;
pub const COMPACT_AREA_MAX: u32 = 16; // placements at or below this render dense
pub const LAYOUT_PERIOD_MS: i32 = 3500; // layout cycle timer period
