use clap::Parser;
use transfer_report::utils::logger;
use transfer_report::{app, CliConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting transfer-report CLI");
    tracing::debug!("CLI config: {:?}", config);

    let monitor_enabled = config.monitor;
    let exit_code = app::run(config, monitor_enabled).await;

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
