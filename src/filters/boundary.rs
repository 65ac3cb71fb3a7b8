//! Boundary resolution for neighborhood sampling.
//!
//! An out-of-range sample `x + dx` is replaced by `x - dx`, i.e. the offset
//! is reflected through the center pixel rather than through the image edge.
//! Each axis is resolved independently.
//!
//! When the raster is at least as large as the kernel or window (the
//! size-floor every filter checks first), the reflected coordinate is always
//! in range. For callers that skip that check, a reflected coordinate that is
//! still out of range is clamped to the nearest edge so the resolver never
//! yields an invalid index.

/// Resolve one axis: `center + offset`, reflected through `center` when it
/// falls outside `[0, len - 1]`.
///
/// `len` must be non-zero.
#[inline]
pub fn resolve_axis(center: usize, offset: isize, len: usize) -> usize {
    let last = len as isize - 1;
    let center = center as isize;

    let forward = center + offset;
    if (0..=last).contains(&forward) {
        return forward as usize;
    }

    (center - offset).clamp(0, last) as usize
}

/// Resolve a sample at `(x + dx, y + dy)` inside a `width x height` raster.
#[inline]
pub fn resolve(
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    width: usize,
    height: usize,
) -> (usize, usize) {
    (resolve_axis(x, dx, width), resolve_axis(y, dy, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_offsets_pass_through() {
        assert_eq!(resolve(2, 2, -1, 1, 5, 5), (1, 3));
        assert_eq!(resolve(0, 4, 0, 0, 5, 5), (0, 4));
    }

    #[test]
    fn test_reflects_through_center_not_edge() {
        // x = 1, dx = -3: x + dx = -2 is out, so x - dx = 4 is read.
        // An edge mirror would have read 2 instead.
        assert_eq!(resolve_axis(1, -3, 7), 4);
        // Right edge: 5 + 2 = 7 is out on a width of 7, read 3.
        assert_eq!(resolve_axis(5, 2, 7), 3);
    }

    #[test]
    fn test_axes_resolve_independently() {
        assert_eq!(resolve(0, 3, -1, -1, 4, 4), (1, 2));
        assert_eq!(resolve(3, 0, 1, -2, 4, 4), (2, 2));
    }

    #[test]
    fn test_single_pixel_always_reads_itself() {
        for d in -3..=3 {
            assert_eq!(resolve(0, 0, d, d, 1, 1), (0, 0));
        }
    }

    #[test]
    fn test_clamps_when_reflection_still_out_of_range() {
        // A width of 2 is below the size-floor of a 7-wide window; the
        // reflected coordinate 0 + 3 = 3 is clamped to the last column.
        assert_eq!(resolve_axis(0, -3, 2), 1);
        assert_eq!(resolve_axis(1, 3, 2), 0);
    }

    #[test]
    fn test_reflection_in_range_above_size_floor() {
        for size in [3usize, 5, 7] {
            let r = (size / 2) as isize;
            for len in size..size + 3 {
                for center in 0..len {
                    for d in -r..=r {
                        let forward = center as isize + d;
                        let expected = if forward >= 0 && forward < len as isize {
                            forward
                        } else {
                            center as isize - d
                        };
                        assert!(expected >= 0 && expected < len as isize);
                        assert_eq!(resolve_axis(center, d, len), expected as usize);
                    }
                }
            }
        }
    }
}
