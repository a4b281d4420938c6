use std::sync::Arc;

use epocha::{Epocha, SignalQuery};
use epocha_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,epocha=trace,epocha_core=debug
    // Build with `--features tracing` to see spans from the library.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let epocha = Epocha::builder()
        .with_source(Arc::new(MockSource::with_page_size(3)))
        .build()?;

    // `offline` never reports data, so the combined result is empty; this is
    // logged at info level, not raised as an error.
    let report = epocha
        .analyze(&[
            SignalQuery::new("station-a", "data", 1),
            SignalQuery::new("offline", "data", 1),
        ])
        .await?;
    println!("combined epochs: {}", report.combined.len());
    Ok(())
}
