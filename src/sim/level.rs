//! Round generation
//!
//! Each round picks a fresh background gradient, then scatters targets whose
//! size shrinks and speed grows as the rounds escalate.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Gradient, Rgb, Target};
use crate::consts::*;

/// Target radius for a round, shrinking 5% per round down to a floor
pub fn radius_for_round(round: u32, width: f32, height: f32) -> f32 {
    let min_dim = width.min(height);
    let shrunk = min_dim * RADIUS_START_FRACTION * RADIUS_DECAY.powi(round as i32 - 1);
    shrunk.max(min_dim * RADIUS_MIN_FRACTION)
}

/// Target speed for a round in pixels per second
pub fn speed_for_round(round: u32) -> f32 {
    BASE_SPEED * (1.0 + (round - 1) as f32 * SPEED_GROWTH_PER_ROUND)
}

/// Replace the target set for the current round and reroll the background
pub fn generate_round(state: &mut GameState) {
    state.targets.clear();

    let radius = radius_for_round(state.round, state.width, state.height);
    let speed = speed_for_round(state.round);

    state.background = random_gradient(&mut state.rng);
    // Dark targets on a bright backdrop, bright targets on a dark one
    let bright_backdrop = state.background.average_brightness() > 0.5;

    let count = if state.round <= FIXED_COUNT_ROUNDS {
        state.round
    } else {
        state.rng.random_range(2..=10)
    };

    for _ in 0..count {
        let pos = Vec2::new(
            state.rng.random_range(radius..state.width - radius),
            state.rng.random_range(radius..state.height - radius),
        );
        let color = if bright_backdrop {
            random_color(&mut state.rng, 0.0, 0.4)
        } else {
            random_color(&mut state.rng, 0.6, 1.0)
        };
        let angle = state.rng.random_range(0.0..TAU);

        state.targets.push(Target {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            radius,
            color,
            flash_timer: 0.0,
            decoy: false,
        });
    }

    log::info!(
        "Round {}: {} targets, radius {:.1}, speed {:.0}",
        state.round,
        state.targets.len(),
        radius,
        speed
    );
}

fn random_color(rng: &mut Pcg32, lo: f32, hi: f32) -> Rgb {
    Rgb::new(
        rng.random_range(lo..hi),
        rng.random_range(lo..hi),
        rng.random_range(lo..hi),
    )
}

fn random_gradient(rng: &mut Pcg32) -> Gradient {
    let bottom = random_color(rng, 0.3, 1.0);
    let top = random_color(rng, 0.3, 1.0);
    Gradient { top, bottom }
}
