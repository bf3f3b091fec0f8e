#[cfg(feature = "cli")]
pub mod cli;
pub mod local_storage;
pub mod toml_config;

pub const DEFAULT_INPUT_DIR: &str = "data";
pub const DEFAULT_COURSES_FILE: &str = "coursesToTransfer.txt";
pub const COMPLETED_COURSES_FILE: &str = "completedCourses.txt";
pub const DEFAULT_PROGRAMS_FILE: &str = "programs.txt";
pub const DEFAULT_REPORTS_DIR: &str = "reports";

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use local_storage::LocalStorage;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path};

/// Checks shared by every config source.
pub(crate) fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("input_dir", config.input_dir())?;
    validate_file_extension("courses_file", config.courses_file(), &["txt"])?;
    validate_file_extension("programs_file", config.programs_file(), &["txt"])?;
    validate_path("reports_dir", config.reports_dir())?;
    Ok(())
}
