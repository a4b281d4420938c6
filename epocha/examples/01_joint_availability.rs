use std::sync::Arc;

use epocha::{Epocha, SignalQuery, TimelineRenderer, TimelineRow, Timestamp};
use epocha_mock::{MockSource, bin};

/// Prints one line per row, one character per hourly bin.
struct TextTimeline {
    bins: usize,
}

impl TimelineRenderer<Timestamp> for TextTimeline {
    fn render(&self, rows: &[TimelineRow<Timestamp>]) -> Result<(), epocha::EpochaError> {
        let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in rows {
            let line: String = (0..self.bins)
                .map(|i| {
                    let t = bin(i);
                    if row.epochs.iter().any(|e| e.contains(t)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            println!("{:>width$} |{line}|", row.label);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let epocha = Epocha::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    let queries = [
        SignalQuery::new("station-a", "data", 1),
        SignalQuery::new("station-b", "data", 1),
        SignalQuery::new("station-b", "qc", 1).labelled("station-b qc ok"),
    ];
    let report = epocha.analyze(&queries).await?;

    println!("Hourly availability from 2024-03-01T00:00Z:\n");
    epocha.render(&report, &TextTimeline { bins: 12 })?;

    println!("\n## Joint epochs ({}):", report.combined.len());
    for e in &report.combined {
        println!(" - {} .. {}", e.start(), e.end());
    }
    if report.is_empty() {
        println!("no epochs satisfy all conditions");
    }
    Ok(())
}
