use crate::config::LocalStorage;
use crate::core::ConfigProvider;
use crate::utils::error::TransferError;
use crate::utils::validation::Validate;
use crate::{EtlEngine, TransferPipeline};

/// Validates `config`, runs the pipeline against the working directory, and
/// reports the outcome. Returns the process exit code.
pub async fn run<C: ConfigProvider + Validate>(config: C, monitor_enabled: bool) -> i32 {
    if let Err(e) = config.validate() {
        return report_failure("Configuration validation failed", &e);
    }

    if monitor_enabled {
        tracing::info!("🔍 Run monitoring enabled");
    }

    let base_path = match std::env::current_dir() {
        Ok(path) => path,
        Err(e) => return report_failure("Cannot resolve working directory", &TransferError::from(e)),
    };

    let storage = LocalStorage::new(base_path);
    let pipeline = TransferPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Transfer report completed successfully!");
            println!("✅ Transfer report saved to: {}", output_path);
            0
        }
        Err(e) => report_failure("Transfer report failed", &e),
    }
}

fn report_failure(context: &str, e: &TransferError) -> i32 {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    println!("❌ {}", e.user_friendly_message());
    println!("💡 {}", e.recovery_suggestion());

    e.exit_code()
}
