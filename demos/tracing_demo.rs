//! Demonstrates the log output of handler chains
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::fmt;
use std::io;

use dichotomy::prelude::*;

#[derive(Debug)]
struct Pool {
    name: &'static str,
    fail_close: bool,
}

impl Closeable for Pool {
    type Error = BoxError;

    fn close(self) -> Result<(), BoxError> {
        tracing::info!(pool = self.name, "closing pool");
        if self.fail_close {
            Err(format!("{} did not drain in time", self.name).into())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
struct Throttled;

impl fmt::Display for Throttled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request throttled")
    }
}

impl std::error::Error for Throttled {}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // A catch that matches logs at TRACE
    let quota = resolve(|| -> Result<u32, BoxError> { Err(Box::new(Throttled)) })
        .catch_error(|_: io::Error| 0)
        .catch_error(|_: Throttled| 10)
        .unwrap_or(100);
    tracing::info!(quota, "quota resolved");

    // A failed cast logs the mismatch at DEBUG
    let casted: Resolve<String> = resolve(|| Ok::<_, BoxError>(7_u64)).cast::<String>();
    tracing::info!(is_error = casted.is_error(), "cast finished");

    // Operation and release both fail: the release error is logged as suppressed
    let outcome = with_resource(|| {
        Ok::<_, BoxError>(Pool {
            name: "replica",
            fail_close: true,
        })
    })
    .run_effect_closing(|pool| -> Result<(), BoxError> {
        Err(format!("{} rejected the write", pool.name).into())
    });

    match outcome.into_result() {
        Ok(()) => tracing::info!("Workflow completed successfully"),
        Err(e) => tracing::error!("Workflow failed: {}", e),
    }
}
