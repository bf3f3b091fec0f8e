use crate::core::{ConfigProvider, Pipeline, Storage, TransferInputs, TransferResult};
use crate::domain::services::{
    count_transfers, parse_course_list, parse_program_catalog, render_report, report_file_name,
};
use crate::utils::error::{Result, TransferError};
use chrono::Local;
use std::path::Path;

/// Reads the course list and program catalog, counts transfers, and writes the report.
pub struct TransferPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TransferPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_text(&self, file_name: &str) -> Result<String> {
        let path = join(self.config.input_dir(), file_name);
        let bytes = self.storage.read_file(&path).await?;
        String::from_utf8(bytes).map_err(|_| TransferError::InvalidEncoding { path })
    }
}

fn join(dir: &str, file_name: &str) -> String {
    Path::new(dir).join(file_name).to_string_lossy().into_owned()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TransferPipeline<S, C> {
    async fn extract(&self) -> Result<TransferInputs> {
        let courses = parse_course_list(&self.read_text(self.config.courses_file()).await?);
        let catalog = parse_program_catalog(&self.read_text(self.config.programs_file()).await?)?;

        Ok(TransferInputs { courses, catalog })
    }

    async fn transform(&self, inputs: TransferInputs) -> Result<TransferResult> {
        let counts = count_transfers(&inputs.courses, &inputs.catalog);

        Ok(TransferResult {
            courses: inputs.courses,
            counts,
        })
    }

    async fn load(&self, result: TransferResult) -> Result<String> {
        tracing::info!("Generating Course Transfer Report...");

        let generated_on = Local::now();
        let report = render_report(&result.counts, &result.courses, &generated_on);
        let path = join(self.config.reports_dir(), &report_file_name(&generated_on));

        tracing::debug!("Writing report ({} bytes) to {}", report.len(), path);
        self.storage.write_file(&path, report.as_bytes()).await
    }
}
