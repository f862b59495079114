//! Edge case tests for Snowflake ID generation

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_unique_ids, ManualClock};
    use crate::*;
    use std::collections::HashSet;

    /// Test that IDs from different nodes never collide
    #[test]
    fn test_cross_node_uniqueness() {
        let mut all_ids = HashSet::new();

        for node in 0..10 {
            let g = Snowflake::new(SnowflakeConfig::builder().node_id(node).build()).unwrap();
            for _ in 0..100 {
                let id = g.generate_id().unwrap();
                assert!(all_ids.insert(id), "Collision from node {}", node);
            }
        }
        assert_eq!(all_ids.len(), 1000);
    }

    /// Nodes sharing one frozen millisecond still issue distinct IDs
    #[test]
    fn test_same_millisecond_across_nodes() {
        let clock = ManualClock::new(77_777);
        let mut ids = vec![];
        for node in [0, 1, 512, MAX_NODE_ID] {
            let config = SnowflakeConfig::builder().epoch(0).node_id(node).build();
            let g = Snowflake::with_clock(config, clock.clone()).unwrap();
            for _ in 0..64 {
                ids.push(g.generate_id().unwrap());
            }
        }
        assert_unique_ids(&ids, 256);
    }

    /// Epoch equal to the current instant yields a zero timestamp offset
    #[test]
    fn test_epoch_at_now() {
        let clock = ManualClock::new(1_700_000_000_000);
        let config = SnowflakeConfig::builder()
            .epoch(1_700_000_000_000)
            .node_id(1)
            .build();
        let g = Snowflake::with_clock(config, clock).unwrap();

        let id = g.generate_id().unwrap();
        assert_eq!(id >> TIMESTAMP_SHIFT, 0);
        assert_eq!(id, 1i64 << STEP_BITS);
    }

    /// The Unix epoch as start time still produces positive IDs today
    #[test]
    fn test_unix_epoch_start_time() {
        let config = SnowflakeConfig::builder().epoch(0).node_id(1).build();
        let g = Snowflake::new(config).unwrap();
        let id = g.generate_id().unwrap();
        assert!(id > 0);
        assert!(g.parse(id).unwrap().timestamp > 1704067200000);
    }

    /// IDs are numerically sorted in issue order
    #[test]
    fn test_numeric_sorting() {
        let g = Snowflake::new(SnowflakeConfig::builder().node_id(1).build()).unwrap();
        let ids: Vec<i64> = (0..100).map(|_| g.generate_id().unwrap()).collect();

        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(ids, sorted, "IDs should already be numerically sorted");
    }

    /// ID decomposition round-trip
    #[test]
    fn test_decomposition_roundtrip() {
        let g = Snowflake::new(SnowflakeConfig::builder().node_id(42).build()).unwrap();

        for _ in 0..100 {
            let id = g.generate_id().unwrap();
            let parts = g.parse(id).unwrap();

            let reconstructed = ((parts.timestamp - g.epoch()) << 22)
                | ((parts.node_id as i64) << 12)
                | parts.sequence as i64;
            assert_eq!(id, reconstructed, "ID should round-trip through decomposition");
        }
    }

    /// An epoch far in the past wraps the offset instead of panicking
    #[test]
    fn test_extreme_epoch_wraps() {
        let clock = ManualClock::new(10_000);
        let config = SnowflakeConfig::builder().epoch(i64::MIN).node_id(5).build();
        let g = Snowflake::with_clock(config, clock).unwrap();

        let first = g.generate_id().unwrap();
        let second = g.generate_id().unwrap();
        assert_eq!(first, (10_000i64 << TIMESTAMP_SHIFT) | (5i64 << STEP_BITS));
        assert!(second > first);

        let parts = g.parse(second).unwrap();
        assert_eq!(parts.node_id, 5);
        assert_eq!(parts.sequence, 1);
        assert_eq!(parts.timestamp, i64::MIN + 10_000);

        for id in [i64::MIN, -1, 0, i64::MAX] {
            let parts = g.parse(id).unwrap();
            assert!(parts.node_id <= MAX_NODE_ID);
            assert!(parts.sequence <= MAX_SEQUENCE);
        }
    }

    /// The offset is not masked: past 2^41 ms from the epoch it reaches the sign bit
    #[test]
    fn test_offset_beyond_timestamp_bits_sets_sign_bit() {
        let clock = ManualClock::new((1i64 << TIMESTAMP_BITS) - 1);
        let config = SnowflakeConfig::builder().epoch(0).build();
        let g = Snowflake::with_clock(config, clock.clone()).unwrap();

        let last_positive = g.generate_id().unwrap();
        assert_eq!(last_positive, ((1i64 << TIMESTAMP_BITS) - 1) << TIMESTAMP_SHIFT);
        assert!(last_positive > 0);

        clock.advance(1);
        let overflowed = g.generate_id().unwrap();
        assert_eq!(overflowed, i64::MIN);
        assert!(overflowed < last_positive);
    }
}
