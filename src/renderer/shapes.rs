//! Shape generation for 2D primitives
//!
//! Everything tessellates to flat triangles in screen pixels; the pipeline
//! maps to NDC when it uploads the frame.

use std::f32::consts::PI;

use glam::Vec2;

use super::shading;
use super::vertex::Vertex;
use crate::consts::*;
use crate::sim::{GameState, Gradient, Particle, Target};

/// Full-screen quad carrying the background gradient in its vertex colors
pub fn background_quad(width: f32, height: f32, gradient: &Gradient) -> Vec<Vertex> {
    let top = gradient.top.to_array(1.0);
    let bottom = gradient.bottom.to_array(1.0);

    vec![
        Vertex::new(Vec2::new(0.0, 0.0), top),
        Vertex::new(Vec2::new(width, 0.0), top),
        Vertex::new(Vec2::new(0.0, height), bottom),
        Vertex::new(Vec2::new(0.0, height), bottom),
        Vertex::new(Vec2::new(width, 0.0), top),
        Vertex::new(Vec2::new(width, height), bottom),
    ]
}

/// Tessellate a target as concentric shaded rings plus a specular highlight
pub fn shaded_orb(target: &Target, screen_center: Vec2) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity((RING_COUNT * RING_SEGMENTS * 6 + HIGHLIGHT_SEGMENTS * 3) as usize);

    let boost = shading::flash_boost(target.flash_timer);
    for ring in 0..RING_COUNT {
        let inner = target.radius * ring as f32 / RING_COUNT as f32;
        let outer = target.radius * (ring + 1) as f32 / RING_COUNT as f32;
        let brightness = shading::ring_brightness(ring, RING_COUNT) + boost;
        let color = shading::shade(target.color, brightness);
        push_ring(&mut vertices, target.pos, inner, outer, color, RING_SEGMENTS);
    }

    let hub = target.pos + shading::highlight_offset(target.pos, screen_center, target.radius);
    push_disc(
        &mut vertices,
        hub,
        target.radius * HIGHLIGHT_RADIUS_FRACTION,
        [1.0, 1.0, 1.0, 0.6],
        HIGHLIGHT_SEGMENTS,
    );

    vertices
}

/// A burst particle as a small quad fading out over its lifetime
pub fn particle_quad(particle: &Particle) -> Vec<Vertex> {
    let half = particle.size / 2.0;
    let color = particle.color.to_array(particle.alpha());
    let (x, y) = (particle.pos.x, particle.pos.y);

    vec![
        Vertex::new(Vec2::new(x - half, y - half), color),
        Vertex::new(Vec2::new(x + half, y - half), color),
        Vertex::new(Vec2::new(x - half, y + half), color),
        Vertex::new(Vec2::new(x - half, y + half), color),
        Vertex::new(Vec2::new(x + half, y - half), color),
        Vertex::new(Vec2::new(x + half, y + half), color),
    ]
}

/// Everything visible this frame: background, then targets, then particles
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = background_quad(state.width, state.height, &state.background);
    let center = state.center();
    for target in &state.targets {
        vertices.extend(shaded_orb(target, center));
    }
    for particle in &state.particles {
        vertices.extend(particle_quad(particle));
    }
    vertices
}

fn push_ring(
    vertices: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + inner_radius * Vec2::new(theta1.cos(), theta1.sin());
        let outer1 = center + outer_radius * Vec2::new(theta1.cos(), theta1.sin());
        let inner2 = center + inner_radius * Vec2::new(theta2.cos(), theta2.sin());
        let outer2 = center + outer_radius * Vec2::new(theta2.cos(), theta2.sin());

        // Two triangles per segment
        vertices.push(Vertex::new(inner1, color));
        vertices.push(Vertex::new(outer1, color));
        vertices.push(Vertex::new(inner2, color));

        vertices.push(Vertex::new(inner2, color));
        vertices.push(Vertex::new(outer1, color));
        vertices.push(Vertex::new(outer2, color));
    }
}

fn push_disc(vertices: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center, color));
        vertices.push(Vertex::new(
            center + radius * Vec2::new(theta1.cos(), theta1.sin()),
            color,
        ));
        vertices.push(Vertex::new(
            center + radius * Vec2::new(theta2.cos(), theta2.sin()),
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rgb;

    fn sample_target() -> Target {
        Target {
            pos: Vec2::new(400.0, 600.0),
            vel: Vec2::ZERO,
            radius: 80.0,
            color: Rgb::new(0.7, 0.3, 0.9),
            flash_timer: 0.0,
            decoy: false,
        }
    }

    #[test]
    fn test_background_spans_viewport() {
        let gradient = Gradient {
            top: Rgb::new(0.9, 0.1, 0.1),
            bottom: Rgb::new(0.1, 0.1, 0.9),
        };
        let quad = background_quad(800.0, 600.0, &gradient);
        assert_eq!(quad.len(), 6);
        assert_eq!(quad[0].position, [0.0, 0.0]);
        assert_eq!(quad[0].color, [0.9, 0.1, 0.1, 1.0]);
        assert_eq!(quad[5].position, [800.0, 600.0]);
        assert_eq!(quad[5].color, [0.1, 0.1, 0.9, 1.0]);
    }

    #[test]
    fn test_orb_vertex_count() {
        let orb = shaded_orb(&sample_target(), Vec2::new(540.0, 960.0));
        let expected = RING_COUNT * RING_SEGMENTS * 6 + HIGHLIGHT_SEGMENTS * 3;
        assert_eq!(orb.len() as u32, expected);
    }

    #[test]
    fn test_orb_stays_within_radius() {
        let target = sample_target();
        let orb = shaded_orb(&target, Vec2::new(540.0, 960.0));
        for vertex in &orb {
            let d = Vec2::from(vertex.position).distance(target.pos);
            assert!(d <= target.radius * 1.001, "vertex {d} px from center");
        }
    }

    #[test]
    fn test_flash_brightens_orb() {
        let calm = sample_target();
        let mut flashed = sample_target();
        flashed.flash_timer = FLASH_DURATION;

        let center = Vec2::new(540.0, 960.0);
        let calm_orb = shaded_orb(&calm, center);
        let flashed_orb = shaded_orb(&flashed, center);

        // Compare an outer-ring vertex, where neither color saturates
        let i = (RING_COUNT - 1) as usize * RING_SEGMENTS as usize * 6;
        assert!(flashed_orb[i].color[0] > calm_orb[i].color[0]);
    }

    #[test]
    fn test_particle_quad_fades() {
        let particle = Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            size: 10.0,
            color: Rgb::new(1.0, 0.5, 0.0),
            lifetime: 0.3,
            max_lifetime: 0.6,
        };
        let quad = particle_quad(&particle);
        assert_eq!(quad.len(), 6);
        assert_eq!(quad[0].position, [95.0, 95.0]);
        assert!((quad[0].color[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_frame_assembles_all_layers() {
        let mut state = GameState::new(1000.0, 1000.0, 4);
        state.targets.push(sample_target());
        state.particles.push(Particle {
            pos: Vec2::new(50.0, 50.0),
            vel: Vec2::ZERO,
            size: 8.0,
            color: Rgb::new(1.0, 1.0, 1.0),
            lifetime: 0.0,
            max_lifetime: 1.0,
        });

        let frame = frame_vertices(&state);
        let orb = RING_COUNT * RING_SEGMENTS * 6 + HIGHLIGHT_SEGMENTS * 3;
        assert_eq!(frame.len() as u32, 6 + orb + 6);
    }
}
