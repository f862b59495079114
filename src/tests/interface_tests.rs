#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_strictly_increasing, ManualClock, TEST_EPOCH};
    use crate::*;
    use std::sync::Arc;
    use std::thread;

    fn issue<G: IdGenerator>(generator: &G, n: usize) -> Vec<i64> {
        (0..n).map(|_| generator.generate_id().unwrap()).collect()
    }

    #[test]
    fn test_generic_caller() {
        let generator = Snowflake::new(SnowflakeConfig::builder().node_id(5).build()).unwrap();
        let ids = issue(&generator, 500);
        assert_strictly_increasing(&ids);
        for id in ids {
            assert_eq!(IdGenerator::parse(&generator, id).unwrap().node_id, 5);
        }
    }

    #[test]
    fn test_trait_object_across_threads() {
        let generator: Arc<dyn IdGenerator + Send + Sync> = Arc::new(
            Snowflake::new(SnowflakeConfig::builder().node_id(6).build()).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || issue(&generator, 250))
            })
            .collect();

        let mut all_ids = Vec::new();
        for h in handles {
            all_ids.extend(h.join().unwrap());
        }
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), 1_000);
    }

    #[test]
    fn test_trait_reports_rollback() {
        let clock = ManualClock::new(20_000);
        let config = SnowflakeConfig::builder().epoch(TEST_EPOCH).build();
        let generator: Box<dyn IdGenerator> =
            Box::new(Snowflake::with_clock(config, clock.clone()).unwrap());

        generator.generate_id().unwrap();
        clock.set(19_000);
        assert_eq!(
            generator.generate_id(),
            Err(SnowflakeError::ClockRollback { delta_ms: 1_000 })
        );
    }
}
