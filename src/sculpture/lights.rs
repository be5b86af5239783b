//! # Light Animator
//!
//! Moves the point lights in a slow carousel around the sculpture: evenly
//! phase-offset circular orbits in the horizontal plane, with an independent
//! vertical bob per light. Pure function of (light index, time); the caller
//! re-invokes it every frame for each light.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Horizontal orbit radius.
pub const ORBIT_RADIUS: f32 = 1.8;
/// Angular speed of the horizontal orbit, radians per second.
pub const ORBIT_SPEED: f32 = 0.7;
/// Phase offset between adjacent lights, a quarter turn.
pub const PHASE_STEP: f32 = FRAC_PI_2;
/// Center height of the vertical bob.
pub const BASE_HEIGHT: f32 = 1.0;
/// Amplitude of the vertical bob.
pub const BOB_AMPLITUDE: f32 = 0.4;
/// Angular speed of the vertical bob, radians per second.
pub const BOB_SPEED: f32 = 1.3;

/// World-space position of point light `index` at time `time`.
pub fn position(index: usize, time: f32) -> Vec3 {
    let phase = index as f32 * PHASE_STEP;
    Vec3::new(
        ORBIT_RADIUS * (ORBIT_SPEED * time + phase).sin(),
        BASE_HEIGHT + BOB_AMPLITUDE * (BOB_SPEED * time + index as f32).sin(),
        ORBIT_RADIUS * (ORBIT_SPEED * time + phase).cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_zero_starts_on_the_z_axis() {
        let p = position(0, 0.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.z - ORBIT_RADIUS).abs() < 1e-6);
        assert!((p.y - BASE_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn lights_orbit_at_constant_horizontal_distance() {
        for index in 0..4 {
            for t in [0.0, 0.37, 2.5, 19.83, 120.0] {
                let p = position(index, t);
                let horizontal = (p.x * p.x + p.z * p.z).sqrt();
                assert!(
                    (horizontal - ORBIT_RADIUS).abs() < 1e-4,
                    "light {index} at t={t}: horizontal distance {horizontal}"
                );
            }
        }
    }

    #[test]
    fn adjacent_lights_differ_by_a_quarter_turn() {
        // sin(a + π/2) = cos(a), cos(a + π/2) = -sin(a): light i+1's
        // horizontal position is light i's rotated by exactly 90 degrees.
        for index in 0..3 {
            for t in [0.0, 1.1, 7.6] {
                let a = position(index, t);
                let b = position(index + 1, t);
                assert!((b.x - a.z).abs() < 1e-4);
                assert!((b.z + a.x).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn bob_stays_within_amplitude() {
        for index in 0..4 {
            for t in [0.0, 0.5, 3.3, 42.0] {
                let y = position(index, t).y;
                assert!(y >= BASE_HEIGHT - BOB_AMPLITUDE - 1e-6);
                assert!(y <= BASE_HEIGHT + BOB_AMPLITUDE + 1e-6);
            }
        }
    }
}
