use gridway_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i64 {
    i64::from((a.row - b.row).abs()) + i64::from((a.col - b.col).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Coord::new(0, 0), Coord::new(3, 4)), 7);
        assert_eq!(manhattan(Coord::new(3, 4), Coord::new(0, 0)), 7);
        assert_eq!(manhattan(Coord::new(2, 2), Coord::new(2, 2)), 0);
    }
}
