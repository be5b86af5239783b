//! # Topology Builder
//!
//! Stitches the (ring, segment) sample grid into a triangle index list. The
//! segment dimension wraps: segment `segments - 1` joins back to segment 0,
//! closing the circumference without a duplicated seam column. The ring
//! dimension does not wrap; the sculpture is open at the top and bottom (no
//! cap geometry).
//!
//! The output depends only on the grid dimensions, never on time, so the
//! index buffer is built once at startup and reused for every frame.

use crate::error::SculptError;

/// Build the triangle index list for a `rings` × `segments` sample grid.
///
/// Each quad between adjacent rings emits two triangles, wound so the face
/// pointing away from the vertical axis is front-facing under the
/// right-handed, counter-clockwise-front convention.
///
/// The result always contains `(rings - 1) * segments * 6` indices, each
/// less than `rings * segments`.
pub fn build(rings: u32, segments: u32) -> Result<Vec<u32>, SculptError> {
    crate::sculpture::validate_grid(rings, segments)?;

    let idx = |r: u32, c: u32| r * segments + (c % segments);

    let mut indices = Vec::with_capacity(((rings - 1) * segments * 6) as usize);
    for r in 0..rings - 1 {
        for c in 0..segments {
            let i0 = idx(r, c);
            let i1 = idx(r, c + 1);
            let i2 = idx(r + 1, c);
            let i3 = idx(r + 1, c + 1);
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_by_four_grid_has_72_indices() {
        let indices = build(4, 4).unwrap();
        assert_eq!(indices.len(), (4 - 1) * 4 * 6);
    }

    #[test]
    fn indices_stay_in_range() {
        for (rings, segments) in [(2, 3), (4, 4), (5, 7), (140, 180)] {
            let indices = build(rings, segments).unwrap();
            assert_eq!(indices.len(), ((rings - 1) * segments * 6) as usize);
            for &i in &indices {
                assert!(i < rings * segments, "index {i} out of range for {rings}x{segments}");
            }
        }
    }

    #[test]
    fn seam_wraps_back_to_segment_zero() {
        let segments = 4u32;
        let indices = build(3, segments).unwrap();
        // The last quad of ring 0 spans segments 3 and 0.
        let quad = &indices[((segments - 1) * 6) as usize..(segments * 6) as usize];
        let i0 = 3; // idx(0, 3)
        let i1 = 0; // idx(0, 0), wrapped
        let i2 = segments + 3; // idx(1, 3)
        let i3 = segments; // idx(1, 0), wrapped
        assert_eq!(quad, &[i0, i2, i1, i1, i2, i3]);
    }

    #[test]
    fn no_duplicated_seam_column() {
        // Every sample slot is referenced; none exist beyond rings*segments,
        // so the seam is closed by index wrap, not duplicated vertices.
        let (rings, segments) = (4u32, 5u32);
        let indices = build(rings, segments).unwrap();
        let mut seen = vec![false; (rings * segments) as usize];
        for &i in &indices {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(build(1, 4).is_err());
        assert!(build(4, 2).is_err());
    }

    #[test]
    fn huge_grids_fail_instead_of_overflowing() {
        // (rings - 1) * segments * 6 would wrap u32 for these; validation
        // must reject them before any index arithmetic runs.
        assert!(build(2, u32::MAX).is_err());
        assert!(build(u32::MAX, 3).is_err());
    }
}
