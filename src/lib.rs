//! Orb Pop - a tap-the-targets reaction game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, particles, rounds, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `session`: Host-facing lifecycle API and notifications

pub mod renderer;
pub mod session;
pub mod sim;

pub use session::GameSession;
pub use sim::{GameEvent, GameState};

/// Game tuning constants
pub mod consts {
    /// Target speed at round 1 (pixels/s)
    pub const BASE_SPEED: f32 = 500.0;
    /// Speed gain per round past the first, as a fraction of `BASE_SPEED`
    pub const SPEED_GROWTH_PER_ROUND: f32 = 0.2;

    /// Round-1 target radius as a fraction of the smaller screen dimension
    pub const RADIUS_START_FRACTION: f32 = 0.10;
    /// Radius floor as a fraction of the smaller screen dimension
    pub const RADIUS_MIN_FRACTION: f32 = 0.03;
    /// Per-round radius shrink factor
    pub const RADIUS_DECAY: f32 = 0.95;
    /// Through this round the target count equals the round number;
    /// later rounds draw a random count instead
    pub const FIXED_COUNT_ROUNDS: u32 = 10;

    /// Points awarded per target hit
    pub const POINTS_PER_HIT: u32 = 10;
    /// Tap tolerance as a multiple of target radius
    pub const HIT_RADIUS_SCALE: f32 = 1.5;
    /// Touch feedback flash duration (seconds)
    pub const FLASH_DURATION: f32 = 0.15;

    /// Frame deltas above this are treated as hitches and replaced
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Substitute step used when a hitch is detected (seconds)
    pub const FALLBACK_DT: f32 = 0.016;

    /// Downward acceleration on burst particles (pixels/s², y-down)
    pub const PARTICLE_GRAVITY: f32 = 600.0;

    /// Concentric rings per shaded target
    pub const RING_COUNT: u32 = 24;
    /// Angular segments per ring
    pub const RING_SEGMENTS: u32 = 48;
    /// Extra brightness at full flash strength
    pub const FLASH_BOOST: f32 = 0.8;
    /// Highlight disc radius as a fraction of target radius
    pub const HIGHLIGHT_RADIUS_FRACTION: f32 = 0.22;
    /// Highlight offset toward the screen center, as a fraction of target radius
    pub const HIGHLIGHT_OFFSET_FRACTION: f32 = 0.3;
    /// Segments in the highlight fan
    pub const HIGHLIGHT_SEGMENTS: u32 = 28;
}
