//! Tap handling
//!
//! Taps resolve against targets with a forgiving hit radius. A hit scores
//! and bursts particles at the tap point itself, not the target center.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::level::generate_round;
use super::state::{GameEvent, GameState, Particle, Rgb};
use crate::consts::*;

/// Resolve a tap at `point`. Returns whether a target was hit.
pub fn handle_tap(state: &mut GameState, point: Vec2) -> bool {
    if state.game_over {
        return false;
    }

    // First match in spawn order wins when hit zones overlap
    let Some(index) = state
        .targets
        .iter()
        .position(|t| point.distance(t.pos) <= t.radius * HIT_RADIUS_SCALE)
    else {
        return false;
    };

    state.targets[index].flash_timer = FLASH_DURATION;
    let radius = state.targets[index].radius;
    let color = state.targets[index].color;
    spawn_burst(state, point, radius, color);

    state.score += POINTS_PER_HIT;
    state.events.push(GameEvent::TargetHit {
        points: POINTS_PER_HIT,
    });
    state.targets.remove(index);

    if state.targets.is_empty() {
        state.round += 1;
        state.events.push(GameEvent::RoundCleared { round: state.round });
        generate_round(state);
    }

    true
}

/// Scatter a burst of particles at the tap point, tinted like the target
fn spawn_burst(state: &mut GameState, at: Vec2, radius: f32, color: Rgb) {
    let count = state.rng.random_range(20..=30);
    for _ in 0..count {
        let angle = state.rng.random_range(0.0..TAU);
        let speed = state.rng.random_range(200.0..600.0);
        let size = radius * state.rng.random_range(0.15..0.25);
        let color = Rgb::new(
            jittered(color.r, &mut state.rng),
            jittered(color.g, &mut state.rng),
            jittered(color.b, &mut state.rng),
        );
        let max_lifetime = state.rng.random_range(0.5..1.0);

        state.particles.push(Particle {
            pos: at,
            // Upward bias so bursts fountain before gravity wins
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - 200.0),
            size,
            color,
            lifetime: 0.0,
            max_lifetime,
        });
    }
}

fn jittered(base: f32, rng: &mut rand_pcg::Pcg32) -> f32 {
    (base + (rng.random::<f32>() - 0.5) * 0.2).clamp(0.0, 1.0)
}
