//! # Surface Sampler
//!
//! Evaluates the parametric sculpture surface on a (ring, segment) grid for a
//! given time, producing one [`MeshVertex`] per grid point.
//!
//! ## The Surface
//!
//! For ring `r` and segment `c`:
//!
//! ```text
//! v = r / (rings - 1)            0..1 along Y
//! y = (v - 0.5) * height
//! u = c / segments               0..1 around (never reaches 1; the seam
//! theta = u * 2π                  is closed by the topology, not by a
//!                                 duplicated vertex column)
//! ```
//!
//! The cross-section radius is a superellipse `|x/a|^n + |z/b|^n = 1`
//! evaluated at `theta`, scaled by a traveling wave
//! `1 + A·sin(k_u·u·2π − k_v·v·2π + ω·t)` whose phase depends on both grid
//! position and time. This is what makes the sculpture ripple.
//!
//! ## Normal Approximation
//!
//! The normal is the normalized cross product of the θ-tangent with the Y
//! axis. This ignores the wave's rate of change along Y, so it is not the
//! exact analytic normal; the approximation is intentional and reads well
//! under shading. Do not replace it with the full parametric derivative.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::SculptError;
use crate::render::vertex::MeshVertex;

/// Shape constants for the sculpture surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceParams {
    /// Total vertical extent. Rings span `[-height/2, height/2]`.
    pub height: f32,
    /// Superellipse radius along X.
    pub radius_a: f32,
    /// Superellipse radius along Z.
    pub radius_b: f32,
    /// Superellipse exponent. 2 is an ellipse; higher values square off the
    /// cross-section.
    pub exponent: f32,
    /// Traveling wave amplitude, as a fraction of the base radius.
    pub wave_amplitude: f32,
    /// Wave cycles around the circumference.
    pub wave_freq_u: f32,
    /// Wave cycles along the height.
    pub wave_freq_v: f32,
    /// Angular speed of the wave phase, radians per second.
    pub wave_speed: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            height: 3.0,
            radius_a: 1.0,
            radius_b: 0.5,
            exponent: 2.5,
            wave_amplitude: 0.25,
            wave_freq_u: 6.0,
            wave_freq_v: 4.0,
            wave_speed: 1.5,
        }
    }
}

/// Sample the surface at every (ring, segment) grid point for time `time`.
///
/// Output is ring-major, segment-minor: `vertices[r * segments + c]`. Pure
/// and deterministic: identical inputs produce bit-identical output.
pub fn sample(
    params: &SurfaceParams,
    rings: u32,
    segments: u32,
    time: f32,
) -> Result<Vec<MeshVertex>, SculptError> {
    crate::sculpture::validate_grid(rings, segments)?;

    let mut vertices = Vec::with_capacity((rings * segments) as usize);
    for r in 0..rings {
        let v = r as f32 / (rings - 1) as f32;
        let y = (v - 0.5) * params.height;
        for c in 0..segments {
            let u = c as f32 / segments as f32;
            let theta = u * TAU;
            let radius = modulated_radius(params, u, v, theta, time);

            vertices.push(MeshVertex {
                position: [radius * theta.cos(), y, radius * theta.sin()],
                normal: approximate_normal(radius, theta),
                uv: [u, v],
            });
        }
    }
    Ok(vertices)
}

/// Superellipse base radius at `theta`, scaled by the traveling wave.
fn modulated_radius(params: &SurfaceParams, u: f32, v: f32, theta: f32, time: f32) -> f32 {
    let (sin_t, cos_t) = theta.sin_cos();
    let cx = cos_t.abs().powf(2.0 / params.exponent) * params.radius_a * cos_t.signum();
    let cz = sin_t.abs().powf(2.0 / params.exponent) * params.radius_b * sin_t.signum();
    let base = (cx * cx + cz * cz).sqrt();

    let phase = params.wave_freq_u * u * TAU - params.wave_freq_v * v * TAU
        + params.wave_speed * time;
    base * (1.0 + params.wave_amplitude * phase.sin())
}

/// Cross the θ-tangent with the vertical axis and normalize.
///
/// A zero radius collapses the tangent to zero length; fall back to straight
/// up rather than normalizing a zero vector.
fn approximate_normal(radius: f32, theta: f32) -> [f32; 3] {
    let tangent = Vec3::new(-radius * theta.sin(), 0.0, radius * theta.cos());
    let normal = tangent.cross(Vec3::Y);
    if normal.length_squared() > 1e-12 {
        normal.normalize().to_array()
    } else {
        Vec3::Y.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_bits(v: &MeshVertex) -> Vec<u32> {
        v.position
            .iter()
            .chain(v.normal.iter())
            .chain(v.uv.iter())
            .map(|f| f.to_bits())
            .collect()
    }

    #[test]
    fn four_by_four_grid_at_time_zero() {
        let verts = sample(&SurfaceParams::default(), 4, 4, 0.0).unwrap();
        assert_eq!(verts.len(), 16);
        // Ring 0 sits at the bottom of the height extent, ring 3 at the top.
        assert!((verts[0].position[1] - (-1.5)).abs() < 1e-6);
        assert!((verts[3 * 4].position[1] - 1.5).abs() < 1e-6);
    }

    #[test]
    fn normals_are_unit_length() {
        let verts = sample(&SurfaceParams::default(), 16, 24, 1.3).unwrap();
        for v in &verts {
            let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "normal should be unit length, got {len}");
        }
    }

    #[test]
    fn texcoords_cover_the_unit_square() {
        let verts = sample(&SurfaceParams::default(), 8, 12, 0.4).unwrap();
        for v in &verts {
            assert!((0.0..1.0).contains(&v.uv[0]), "u out of [0,1): {}", v.uv[0]);
            assert!((0.0..=1.0).contains(&v.uv[1]), "v out of [0,1]: {}", v.uv[1]);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let a = sample(&SurfaceParams::default(), 10, 14, 2.75).unwrap();
        let b = sample(&SurfaceParams::default(), 10, 14, 2.75).unwrap();
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(&b) {
            assert_eq!(vertex_bits(va), vertex_bits(vb));
        }
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(sample(&SurfaceParams::default(), 1, 8, 0.0).is_err());
        assert!(sample(&SurfaceParams::default(), 4, 2, 0.0).is_err());
        assert!(sample(&SurfaceParams::default(), u32::MAX, u32::MAX, 0.0).is_err());
    }

    #[test]
    fn zero_radius_falls_back_to_a_unit_normal() {
        let params = SurfaceParams {
            radius_a: 0.0,
            radius_b: 0.0,
            ..Default::default()
        };
        let verts = sample(&params, 4, 6, 0.0).unwrap();
        for v in &verts {
            let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }
}
