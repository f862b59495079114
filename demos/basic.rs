use chrono::{TimeZone, Utc};
use snowflake::{Snowflake, SnowflakeConfig, SnowflakeParts};

fn main() {
    let config = SnowflakeConfig::builder()
        .node_id(1)
        .start_time(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap())
        .build();
    let generator = Snowflake::new(config).unwrap();

    // Generate some IDs
    let id1 = generator.generate_id().unwrap();
    let id2 = generator.generate_id().unwrap();
    let id3 = generator.generate_id().unwrap();

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [id1, id2, id3] {
        print_id(id, generator.parse(id).unwrap());
    }

    // Or extract components individually
    let ts = generator.extract.timestamp(id2);
    let node = generator.extract.node(id2);
    let seq = generator.extract.sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since Unix epoch");
    println!("  Node ID: {node}");
    println!("  Sequence: {seq}");
}

fn print_id(id: i64, parts: SnowflakeParts) {
    let datetime = parts
        .datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {datetime}, Node ID: {}, Sequence: {}",
        parts.timestamp, parts.node_id, parts.sequence
    );
}
