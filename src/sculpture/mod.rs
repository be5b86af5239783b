//! # Sculpture: Procedural Geometry and Light Choreography
//!
//! The sculpture is a surface of revolution around the Y axis whose radius is
//! modulated by a superellipse cross-section and a traveling sine wave. It is
//! sampled on a (ring, segment) grid:
//!
//! - A **ring** is one latitude-like loop of samples at constant height.
//! - A **segment** is one sample position around the circumference.
//!
//! Because the wave phase depends on time, vertex positions must be resampled
//! every frame ([`surface::sample`]). The triangle topology only depends on
//! the grid dimensions, so it is stitched once at startup
//! ([`topology::build`]) and reused.
//!
//! [`lights`] animates the orbiting point lights that circle the sculpture.
//! All three submodules are pure functions of their inputs: no globals, no
//! caches, no frame-to-frame state.

pub mod lights;
pub mod surface;
pub mod topology;

pub use surface::SurfaceParams;

use crate::error::SculptError;

/// Upper bound on `rings * segments`. One million samples is a 32 MB vertex
/// buffer rewritten every frame, already far past real-time territory; the
/// cap also keeps the index math (6 indices per sample) comfortably inside
/// `u32`.
pub const MAX_GRID_SAMPLES: u64 = 1 << 20;

/// Reject grids that cannot be stitched into a valid closed strip, or that
/// are too large to resample per frame.
///
/// Fewer than 2 rings produces no quads at all; fewer than 3 segments cannot
/// wrap around the circumference without degenerate triangles. The sample
/// count is checked in 64-bit so huge dimensions fail here instead of
/// overflowing the 32-bit buffer-size arithmetic downstream.
pub fn validate_grid(rings: u32, segments: u32) -> Result<(), SculptError> {
    if rings < 2 || segments < 3 {
        return Err(SculptError::InvalidGridDimensions { rings, segments });
    }
    if rings as u64 * segments as u64 > MAX_GRID_SAMPLES {
        return Err(SculptError::GridTooLarge {
            rings,
            segments,
            max_samples: MAX_GRID_SAMPLES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_grid_is_accepted() {
        assert!(validate_grid(2, 3).is_ok());
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(validate_grid(1, 3).is_err());
        assert!(validate_grid(2, 2).is_err());
        assert!(validate_grid(0, 0).is_err());
    }

    #[test]
    fn oversized_grids_are_rejected() {
        // 1024 * 1024 sits exactly at the cap; one more ring goes over.
        assert!(validate_grid(1024, 1024).is_ok());
        assert!(validate_grid(1025, 1024).is_err());
        assert!(matches!(
            validate_grid(2, u32::MAX),
            Err(SculptError::GridTooLarge { .. })
        ));
    }
}
