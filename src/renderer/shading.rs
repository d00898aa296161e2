//! Sphere shading math
//!
//! Targets render as concentric ring strips faking a lit sphere. The
//! brightness curve runs hot in the core and rolls off toward the edge,
//! with a thin rim glow past 0.9 of the radius.

use glam::Vec2;

use crate::consts::*;
use crate::sim::Rgb;

/// Brightness of the fake sphere at a normalized radius in [0, 1]
pub fn sphere_brightness(nr: f32) -> f32 {
    let base = if nr < 0.15 {
        2.4 - (nr / 0.15) * 0.6
    } else if nr < 0.35 {
        let t = (nr - 0.15) / 0.2;
        1.8 - t * 0.4
    } else if nr < 0.6 {
        let t = (nr - 0.35) / 0.25;
        1.4 - t * t * 0.35
    } else if nr < 0.85 {
        let t = (nr - 0.6) / 0.25;
        1.05 - t * t * 0.35
    } else {
        let t = (nr - 0.85) / 0.15;
        0.7 - t * t * t * 0.35
    };

    let rim = if nr > 0.9 {
        let t = (nr - 0.9) / 0.1;
        t * t * 0.25
    } else {
        0.0
    };

    base + rim
}

/// Brightness for one ring of the strip, sampled at the ring's middle and
/// remapped so even the darkest edge keeps some color
pub fn ring_brightness(ring: u32, ring_count: u32) -> f32 {
    let brightness = if ring == 0 {
        2.4
    } else {
        sphere_brightness((ring as f32 + 0.5) / ring_count as f32)
    };
    brightness * 0.88 + 0.12
}

/// Extra brightness while a tapped target flashes, fading with the timer
pub fn flash_boost(flash_timer: f32) -> f32 {
    if flash_timer > 0.0 {
        (flash_timer / FLASH_DURATION) * FLASH_BOOST
    } else {
        0.0
    }
}

/// Apply a brightness to a target color, clamping each channel at full
pub fn shade(color: Rgb, brightness: f32) -> [f32; 4] {
    [
        (color.r * brightness).min(1.0),
        (color.g * brightness).min(1.0),
        (color.b * brightness).min(1.0),
        1.0,
    ]
}

/// Where the specular highlight sits: offset from the target center toward
/// the screen center, straight up when the target sits dead center
pub fn highlight_offset(pos: Vec2, screen_center: Vec2, radius: f32) -> Vec2 {
    let to_center = screen_center - pos;
    if to_center.length() > 0.01 {
        to_center.normalize() * radius * HIGHLIGHT_OFFSET_FRACTION
    } else {
        Vec2::new(0.0, -radius * HIGHLIGHT_OFFSET_FRACTION)
    }
}
