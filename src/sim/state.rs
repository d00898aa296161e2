//! Game state and core simulation types
//!
//! Everything the presenter reads and the determinism tests snapshot lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// As an RGBA array for vertex colors
    pub const fn to_array(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// Two-stop vertical background gradient
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Gradient {
    /// Mean of all six channel samples, used to pick contrasting target colors
    pub fn average_brightness(&self) -> f32 {
        (self.top.r + self.top.g + self.top.b + self.bottom.r + self.bottom.g + self.bottom.b)
            / 6.0
    }
}

/// A bouncing tappable target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Seconds of touch feedback remaining (counts down to 0, never below)
    pub flash_timer: f32,
    /// Reserved for a future inert-target variant; nothing spawns decoys yet
    #[serde(default)]
    pub decoy: bool,
}

/// A burst particle (visual only, never gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgb,
    /// Seconds alive so far
    pub lifetime: f32,
    /// Removed the moment `lifetime` reaches this
    pub max_lifetime: f32,
}

impl Particle {
    /// Opacity, 1.0 at spawn fading linearly to 0.0 at expiry
    pub fn alpha(&self) -> f32 {
        (1.0 - self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}

/// Facts the simulation reports back to the host layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A target was tapped and removed
    TargetHit { points: u32 },
    /// The last target of a round was cleared; `round` is the new round
    RoundCleared { round: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Viewport width in pixels, fixed at init
    pub width: f32,
    /// Viewport height in pixels, fixed at init
    pub height: f32,
    pub score: u32,
    /// Current round, starting at 1
    pub round: u32,
    /// When set, `update` and `handle_tap` are no-ops. Nothing sets it yet.
    pub game_over: bool,
    pub background: Gradient,
    /// Live targets in spawn order; taps resolve against the first match
    pub targets: Vec<Target>,
    pub particles: Vec<Particle>,
    /// Events queued since the last drain (not part of the snapshot)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh state with an empty target set; `generate_round` populates it
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            seed,
            width,
            height,
            score: 0,
            round: 1,
            game_over: false,
            background: Gradient::default(),
            targets: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Screen center, where the shading highlight leans toward
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_alpha_fades_linearly() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 4.0,
            color: Rgb::new(1.0, 0.5, 0.0),
            lifetime: 0.0,
            max_lifetime: 0.8,
        };
        assert_eq!(p.alpha(), 1.0);

        p.lifetime = 0.4;
        assert!((p.alpha() - 0.5).abs() < 1e-6);

        p.lifetime = 0.8;
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_average_brightness() {
        let gradient = Gradient {
            top: Rgb::new(1.0, 1.0, 1.0),
            bottom: Rgb::new(0.0, 0.0, 0.0),
        };
        assert!((gradient.average_brightness() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_new_state_is_round_one() {
        let state = GameState::new(1080.0, 1920.0, 7);
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.targets.is_empty());
        assert_eq!(state.center(), Vec2::new(540.0, 960.0));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(100.0, 100.0, 1);
        state.events.push(GameEvent::TargetHit { points: 10 });
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.events.is_empty());
    }
}
