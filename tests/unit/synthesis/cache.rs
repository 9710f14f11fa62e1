//! Tests for the per-step candidate deduplication map

#[cfg(test)]
mod tests {
    use resynth::spatial::coord::Coord;
    use resynth::synthesis::cache::TriedMap;

    // Tests a fresh map has nothing tried, not even step 0
    // Verified by initializing markers to step 0
    #[test]
    fn test_new_map_untried() {
        let map = TriedMap::new(3, 3);
        assert!(!map.was_tried(Coord::new(0, 0), 0));
        assert!(!map.was_tried(Coord::new(2, 2), 0));
        assert_eq!(map.skipped, 0);
    }

    // Tests a location is claimed once per step
    // Verified by never stamping the marker
    #[test]
    fn test_claim_once_per_step() {
        let mut map = TriedMap::new(3, 3);
        let point = Coord::new(1, 2);

        assert!(map.claim(point, 7));
        assert!(!map.claim(point, 7));
        assert_eq!(map.skipped, 1);

        // A different step sees the location as untried again
        assert!(map.claim(point, 6));
        assert!(!map.was_tried(point, 7));
    }

    // Tests markers are per location
    // Verified by storing a single global marker
    #[test]
    fn test_locations_independent() {
        let mut map = TriedMap::new(3, 3);
        map.mark(Coord::new(0, 0), 4);

        assert!(map.was_tried(Coord::new(0, 0), 4));
        assert!(!map.was_tried(Coord::new(1, 0), 4));
    }

    // Tests out-of-range locations are never reported as tried
    // Verified by wrapping coordinates into the map
    #[test]
    fn test_out_of_range() {
        let mut map = TriedMap::new(2, 2);
        map.mark(Coord::new(-1, 0), 1);
        map.mark(Coord::new(2, 0), 1);

        assert!(!map.was_tried(Coord::new(-1, 0), 1));
        assert!(!map.was_tried(Coord::new(2, 0), 1));
        assert!(!map.was_tried(Coord::new(0, 0), 1));
    }
}
