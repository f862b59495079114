use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use snowflake::{unix_time_ms, Mode, Snowflake, SnowflakeConfig, SnowflakeError, TimeSource};
use tracing_subscriber::EnvFilter;

/// Wall clock with an adjustable skew, standing in for an NTP correction
#[derive(Debug, Clone, Default)]
struct SkewedClock {
    skew_ms: Arc<AtomicI64>,
}

impl TimeSource for SkewedClock {
    fn current_millis(&self) -> i64 {
        unix_time_ms() + self.skew_ms.load(Ordering::SeqCst)
    }
}

fn run(mode: Mode) -> Result<(), SnowflakeError> {
    let clock = SkewedClock::default();
    let config = SnowflakeConfig::builder()
        .mode(mode)
        .node_id(3)
        .max_wait_time(Duration::from_millis(5))
        .build();
    let generator = Snowflake::with_clock(config, clock.clone())?;

    let before = generator.generate_id()?;
    println!("[{mode}] before rollback: {before}");

    // Clock jumps back one second
    clock.skew_ms.store(-1_000, Ordering::SeqCst);

    match generator.generate_id() {
        Ok(id) => {
            let parts = generator.parse(id)?;
            println!(
                "[{mode}] after rollback: {id} (timestamp {}, sequence {})",
                parts.timestamp, parts.sequence
            );
        }
        Err(err) => println!("[{mode}] after rollback: {err}"),
    }
    Ok(())
}

fn main() -> Result<(), SnowflakeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    run(Mode::Normal)?;
    run(Mode::AutoTime)?;
    Ok(())
}
