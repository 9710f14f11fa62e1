//! Tests for coordinate arithmetic and bounds checks

#[cfg(test)]
mod tests {
    use resynth::spatial::coord::Coord;

    // Tests component-wise addition and subtraction
    // Verified by swapping x and y in the operator impls
    #[test]
    fn test_add_and_sub() {
        let a = Coord::new(3, -2);
        let b = Coord::new(-1, 5);

        assert_eq!(a + b, Coord::new(2, 3));
        assert_eq!(a - b, Coord::new(4, -7));
        assert_eq!((a + b) - b, a);
    }

    // Tests squared distance used to order offsets
    // Verified by dropping the y term
    #[test]
    fn test_norm_squared() {
        assert_eq!(Coord::new(0, 0).norm_squared(), 0);
        assert_eq!(Coord::new(3, 4).norm_squared(), 25);
        assert_eq!(Coord::new(-3, -4).norm_squared(), 25);
    }

    // Tests half-open bounds on both axes
    // Verified by making the upper bound inclusive
    #[test]
    fn test_is_within() {
        assert!(Coord::new(0, 0).is_within(4, 3));
        assert!(Coord::new(3, 2).is_within(4, 3));
        assert!(!Coord::new(4, 0).is_within(4, 3));
        assert!(!Coord::new(0, 3).is_within(4, 3));
        assert!(!Coord::new(-1, 0).is_within(4, 3));
        assert!(!Coord::new(0, -1).is_within(4, 3));
        assert!(!Coord::new(0, 0).is_within(0, 0));
    }

    // Tests ndarray index order is row then column
    // Verified by returning [x, y]
    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Coord::new(2, 7).index(), [7, 2]);
    }
}
