//! Frame tick
//!
//! Advances targets and particles by a frame's worth of time.

use super::state::GameState;
use crate::consts::*;

/// Advance the simulation by `dt` seconds
pub fn update(state: &mut GameState, dt: f32) {
    if state.game_over {
        return;
    }

    // Long hitches (app resumed, debugger pause) get swapped for one nominal
    // frame so nothing tunnels through a wall.
    let dt = if dt > MAX_FRAME_DT { FALLBACK_DT } else { dt };

    for target in &mut state.targets {
        target.pos += target.vel * dt;
        target.flash_timer = (target.flash_timer - dt).max(0.0);

        if target.pos.x - target.radius < 0.0 || target.pos.x + target.radius > state.width {
            target.vel.x = -target.vel.x;
            target.pos.x = target.pos.x.clamp(target.radius, state.width - target.radius);
        }
        if target.pos.y - target.radius < 0.0 || target.pos.y + target.radius > state.height {
            target.vel.y = -target.vel.y;
            target.pos.y = target.pos.y.clamp(target.radius, state.height - target.radius);
        }
    }

    for particle in &mut state.particles {
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
        particle.lifetime += dt;
    }
    state.particles.retain(|p| p.lifetime < p.max_lifetime);
}
