use rand::{rng, Rng};
use snowflake::{IdGenerator, Mode, Snowflake, SnowflakeConfig};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator per node; node IDs are handed out externally
    let nodes: Vec<Arc<dyn IdGenerator + Send + Sync>> = (0..4u16)
        .map(|node_id| {
            let config = SnowflakeConfig::builder()
                .mode(Mode::AutoTime)
                .node_id(node_id)
                .build();
            Arc::new(Snowflake::new(config).unwrap()) as Arc<dyn IdGenerator + Send + Sync>
        })
        .collect();

    let mut handles = vec![];

    // Two workers per node share that node's generator
    for (node_id, generator) in nodes.iter().enumerate() {
        for worker in 0..2 {
            let generator = Arc::clone(generator);
            handles.push(thread::spawn(move || {
                let mut ids = HashSet::new();
                let mut rng = rng();

                for i in 0..5 {
                    let id = generator.generate_id().unwrap();
                    let parts = generator.parse(id).unwrap();

                    println!(
                        "Node {} worker {} generated ID {} (ts={}, node={}, seq={})",
                        node_id, worker, i, parts.timestamp, parts.node_id, parts.sequence
                    );

                    assert!(ids.insert(id), "Duplicate ID generated!");

                    // Random delay to simulate work
                    let delay = rng.random_range(0..=9);
                    thread::sleep(Duration::from_millis(delay));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 4 * 2 * 5);
    println!("All IDs are unique across nodes!");
}
