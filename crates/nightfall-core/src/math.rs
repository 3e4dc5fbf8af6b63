//! Vector and scalar helpers shared by every system.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Unit vector in the direction of `v`; the zero vector stays zero.
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    let len = if len > 0.0 { len } else { 1.0 };
    v / len
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Absolute angular difference between two headings, wrapped into `[0, PI]`.
pub fn angle_diff(a: f32, b: f32) -> f32 {
    ((a - b + PI).rem_euclid(TAU) - PI).abs()
}

/// Heading of `v` in radians (atan2 convention, 0 = +x).
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Point at `radius` from `center` along `angle`.
pub fn point_on_ring(center: Vec2, angle: f32, radius: f32) -> Vec2 {
    center + Vec2::new(angle.cos(), angle.sin()) * radius
}
