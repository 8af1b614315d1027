//! Basic example running one anomaly job end to end
//!
//! Run with: cargo run --example basic -p anomaly
//!
//! Set `RUST_LOG=anomaly=debug` to see the publish lock being taken.

use std::sync::Arc;

use anomaly::{
    AnomalyJob, AnomalyJobConfigBuilder, Column, ErrorVector, Frame, FrameKey, FrameStore,
    InMemoryFrameStore, InMemoryModelRegistry, ModelRef, Result, ScoringModel,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stand-in for a trained auto-encoder: reconstructs each row as the
/// training column means.
struct MeanReconstruction {
    means: Vec<f64>,
    training_error: f64,
}

impl ScoringModel for MeanReconstruction {
    fn is_autoencoder(&self) -> bool {
        true
    }

    fn training_reconstruction_error(&self) -> f64 {
        self.training_error
    }

    fn score(&self, frame: &Frame) -> Result<ErrorVector> {
        let errors = (0..frame.num_rows())
            .map(|i| {
                let row = frame.row(i).unwrap_or_default();
                row.iter()
                    .zip(&self.means)
                    .map(|(x, m)| (x - m).powi(2))
                    .sum::<f64>()
                    / self.means.len() as f64
            })
            .collect();
        Ok(ErrorVector::new(errors))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anomaly=info,anomaly_core=info".into()),
        )
        .init();

    // Sensor readings with two faulty rows
    let temperature = vec![21.0, 21.2, 20.9, 35.5, 21.1, 21.0, 20.8, 21.3, 21.1, 21.0];
    let humidity = vec![40.0, 41.0, 39.5, 40.2, 40.8, 12.0, 40.1, 39.9, 40.3, 40.0];
    let source = Frame::new(
        FrameKey::new("sensors.hex"),
        vec![
            Column::new("temperature", temperature),
            Column::new("humidity", humidity),
        ],
    )?;

    let mut registry = InMemoryModelRegistry::new();
    registry.register(
        ModelRef::new("sensors_autoencoder"),
        Arc::new(MeanReconstruction {
            means: vec![21.05, 40.2],
            training_error: 0.05,
        }),
    );
    let store = InMemoryFrameStore::new();

    let config = AnomalyJobConfigBuilder::new()
        .model("sensors_autoencoder")
        .destination("sensors.scored")
        .build()?;

    let report = AnomalyJob::new(config, source).execute(&registry, &store)?;

    println!("\nOutlier rows: {:?}", report.outlier_rows());
    if let Some(output) = store.get(&report.destination) {
        println!("Published columns: {:?}", output.names());
    }
    println!("Report as JSON:\n{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
