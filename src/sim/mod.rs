//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use input::handle_tap;
pub use level::{generate_round, radius_for_round, speed_for_round};
pub use state::{GameEvent, GameState, Gradient, Particle, Rgb, Target};
pub use tick::update;
