//! Same report as `transfer-report`, but for a student's already completed courses
//! (`completedCourses.txt`) instead of the courses they plan to transfer.

use clap::Parser;
use transfer_report::config::COMPLETED_COURSES_FILE;
use transfer_report::utils::logger;
use transfer_report::{app, CliConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse().with_default_courses_file(COMPLETED_COURSES_FILE);

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting completed-courses report");
    tracing::debug!("CLI config: {:?}", config);

    let monitor_enabled = config.monitor;
    let exit_code = app::run(config, monitor_enabled).await;

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
