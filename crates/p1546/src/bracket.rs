//! Nearest-neighbour bracket search over the nominal curve grids.

/// Bracketing pair returned by [`bracket`].
///
/// For a query inside the grid range, `lo <= v <= hi`. A query beyond either
/// end yields the two nearest grid entries so callers extrapolate rather
/// than fail. A query coinciding with a grid value yields a degenerate
/// bracket with `lo == hi` and equal indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
    pub lo_idx: usize,
    pub hi_idx: usize,
}

impl Bracket {
    /// True when the query coincided with a grid value and no interpolation
    /// is needed.
    pub fn is_exact(&self) -> bool {
        self.lo_idx == self.hi_idx
    }
}

/// Find the two grid values bracketing `v` in the ascending array `x`.
///
/// `x` must be sorted ascending and hold at least two entries.
pub fn bracket(x: &[f64], v: f64) -> Bracket {
    let last = x.len() - 1;
    if v > x[last] {
        return Bracket {
            lo: x[last - 1],
            hi: x[last],
            lo_idx: last - 1,
            hi_idx: last,
        };
    }
    if v < x[0] {
        return Bracket {
            lo: x[0],
            hi: x[1],
            lo_idx: 0,
            hi_idx: 1,
        };
    }
    // First index whose grid value is >= v; v is within [x[0], x[last]] here.
    let hi_idx = x.partition_point(|&b| b < v);
    if x[hi_idx] == v {
        return Bracket {
            lo: v,
            hi: v,
            lo_idx: hi_idx,
            hi_idx,
        };
    }
    Bracket {
        lo: x[hi_idx - 1],
        hi: x[hi_idx],
        lo_idx: hi_idx - 1,
        hi_idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISTANCES, HEIGHTS};

    #[test]
    fn brackets_interior_query() {
        let b = bracket(&HEIGHTS, 50.0);
        assert_eq!((b.lo, b.hi), (37.5, 75.0));
        assert_eq!((b.lo_idx, b.hi_idx), (2, 3));
        assert!(!b.is_exact());
    }

    #[test]
    fn exact_match_is_degenerate() {
        let b = bracket(&HEIGHTS, 37.5);
        assert_eq!((b.lo, b.hi), (37.5, 37.5));
        assert_eq!((b.lo_idx, b.hi_idx), (2, 2));
        assert!(b.is_exact());

        let ends = bracket(&HEIGHTS, 10.0);
        assert!(ends.is_exact());
        assert_eq!(ends.lo_idx, 0);
        let top = bracket(&HEIGHTS, 1200.0);
        assert!(top.is_exact());
        assert_eq!(top.hi_idx, 7);
    }

    #[test]
    fn query_above_range_returns_top_pair() {
        let b = bracket(&HEIGHTS, 2500.0);
        assert_eq!((b.lo, b.hi), (600.0, 1200.0));
        assert_eq!((b.lo_idx, b.hi_idx), (6, 7));
    }

    #[test]
    fn query_below_range_returns_bottom_pair() {
        let b = bracket(&DISTANCES, 0.3);
        assert_eq!((b.lo, b.hi), (1.0, 2.0));
        assert_eq!((b.lo_idx, b.hi_idx), (0, 1));
    }

    #[test]
    fn nonuniform_distance_grid() {
        let b = bracket(&DISTANCES, 22.0);
        assert_eq!((b.lo, b.hi), (20.0, 25.0));
        let b = bracket(&DISTANCES, 212.0);
        assert_eq!((b.lo, b.hi), (200.0, 225.0));
    }
}
