use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting batch validation...");

        // Extract
        tracing::info!("Reading CPF records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} records", records.len());

        // Transform
        tracing::info!("Validating records...");
        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Validated {} records: {} valid, {} invalid",
            result.summary.total,
            result.summary.valid,
            result.summary.invalid
        );

        // Load
        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("📁 Report saved to: {}", output_path);

        Ok(output_path)
    }
}
