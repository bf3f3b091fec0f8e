use crate::config::{
    validate_provider, DEFAULT_COURSES_FILE, DEFAULT_INPUT_DIR, DEFAULT_PROGRAMS_FILE,
    DEFAULT_REPORTS_DIR,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "transfer-report")]
#[command(about = "Counts how many of a student's courses transfer to each degree program")]
pub struct CliConfig {
    /// Directory holding the course list and the program catalog
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    /// Course list file name, defaults to coursesToTransfer.txt
    #[arg(long)]
    pub courses_file: Option<String>,

    #[arg(long, default_value = DEFAULT_PROGRAMS_FILE)]
    pub programs_file: String,

    /// Reports directory, relative to the working directory
    #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log stage timings and memory usage")]
    pub monitor: bool,
}

impl CliConfig {
    /// Fills in the course list name when none was given on the command line.
    pub fn with_default_courses_file(mut self, file: &str) -> Self {
        self.courses_file.get_or_insert_with(|| file.to_string());
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_dir: DEFAULT_INPUT_DIR.to_string(),
            courses_file: None,
            programs_file: DEFAULT_PROGRAMS_FILE.to_string(),
            reports_dir: DEFAULT_REPORTS_DIR.to_string(),
            verbose: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn courses_file(&self) -> &str {
        self.courses_file.as_deref().unwrap_or(DEFAULT_COURSES_FILE)
    }

    fn programs_file(&self) -> &str {
        &self.programs_file
    }

    fn reports_dir(&self) -> &str {
        &self.reports_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COMPLETED_COURSES_FILE;

    #[test]
    fn test_no_flags_uses_fixed_file_names() {
        let config = CliConfig::parse_from(["transfer-report"]);

        assert_eq!(config.input_dir(), "data");
        assert_eq!(config.courses_file(), "coursesToTransfer.txt");
        assert_eq!(config.programs_file(), "programs.txt");
        assert_eq!(config.reports_dir(), "reports");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alternate_course_list_default() {
        let config = CliConfig::parse_from(["completed-courses"])
            .with_default_courses_file(COMPLETED_COURSES_FILE);
        assert_eq!(config.courses_file(), "completedCourses.txt");

        let explicit = CliConfig::parse_from(["completed-courses", "--courses-file", "mine.txt"])
            .with_default_courses_file(COMPLETED_COURSES_FILE);
        assert_eq!(explicit.courses_file(), "mine.txt");
    }

    #[test]
    fn test_non_text_inputs_fail_validation() {
        let config = CliConfig::parse_from(["transfer-report", "--programs-file", "programs.csv"]);
        assert!(config.validate().is_err());
    }
}
