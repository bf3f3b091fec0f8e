use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Runs a pipeline's stages in order, each to completion before the next.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    /// Returns the path of the written report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting transfer report run");

        let inputs = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} courses and {} degree programs",
            inputs.courses.len(),
            inputs.catalog.len()
        );
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(inputs).await?;
        tracing::info!("Counted transfers for {} degree programs", result.counts.len());
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
