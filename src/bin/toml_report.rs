use anyhow::Context;
use clap::Parser;
use std::path::Path;
use transfer_report::core::ConfigProvider;
use transfer_report::utils::logger;
use transfer_report::utils::validation::Validate;
use transfer_report::{app, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Transfer report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "transfer-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show the resolved input and output paths without reading or writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based transfer report");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            println!("❌ Failed to load config file '{}': {}", args.config, e);
            println!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No report will be written");
        if let Err(e) = perform_dry_run(&config) {
            println!("❌ {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let exit_code = app::run(config, monitor_enabled).await;

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Report: {}", config.report_name());
    tracing::info!("  📂 Input dir: {}", config.input_dir());
    tracing::info!("  📄 Courses: {}", config.courses_file());
    tracing::info!("  📄 Programs: {}", config.programs_file());
    tracing::info!("  🗂  Reports dir: {}", config.reports_dir());
}

fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    config.validate().context("configuration is invalid")?;

    let input_dir = Path::new(config.input_dir());
    for file in [config.courses_file(), config.programs_file()] {
        let path = input_dir.join(file);
        let metadata = std::fs::metadata(&path)
            .with_context(|| format!("input file {} is not accessible", path.display()))?;
        println!("✔ {} ({} bytes)", path.display(), metadata.len());
    }

    println!(
        "Report would be written under {}",
        Path::new(config.reports_dir()).display()
    );
    Ok(())
}
