use crate::config::{
    validate_provider, DEFAULT_COURSES_FILE, DEFAULT_INPUT_DIR, DEFAULT_PROGRAMS_FILE,
    DEFAULT_REPORTS_DIR,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TransferError};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub dir: String,
    pub courses: String,
    pub programs: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_INPUT_DIR.to_string(),
            courses: DEFAULT_COURSES_FILE.to_string(),
            programs: DEFAULT_PROGRAMS_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub reports_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reports_dir: DEFAULT_REPORTS_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TransferError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TransferError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRANSFER_DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn report_name(&self) -> &str {
        self.report.name.as_deref().unwrap_or("transfer-report")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dir(&self) -> &str {
        &self.inputs.dir
    }

    fn courses_file(&self) -> &str {
        &self.inputs.courses
    }

    fn programs_file(&self) -> &str {
        &self.inputs.programs
    }

    fn reports_dir(&self) -> &str {
        &self.output.reports_dir
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;

        // 未替換的 ${VAR} 代表環境變數缺失
        for (field, value) in [
            ("inputs.dir", self.input_dir()),
            ("output.reports_dir", self.reports_dir()),
        ] {
            validate_path(field, value)?;
            if ENV_VAR_PATTERN.is_match(value) {
                return Err(TransferError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[report]
name = "fall-intake"

[inputs]
dir = "./intake"
courses = "completedCourses.txt"
programs = "catalog.txt"

[output]
reports_dir = "./out/reports"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.report_name(), "fall-intake");
        assert_eq!(config.input_dir(), "./intake");
        assert_eq!(config.courses_file(), "completedCourses.txt");
        assert_eq!(config.programs_file(), "catalog.txt");
        assert_eq!(config.reports_dir(), "./out/reports");
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_falls_back_to_fixed_names() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_dir(), "data");
        assert_eq!(config.courses_file(), "coursesToTransfer.txt");
        assert_eq!(config.programs_file(), "programs.txt");
        assert_eq!(config.reports_dir(), "reports");
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRANSFER_TEST_INPUT_DIR", "/srv/transfer");

        let config = TomlConfig::from_toml_str(
            r#"
[inputs]
dir = "${TRANSFER_TEST_INPUT_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.input_dir(), "/srv/transfer");

        std::env::remove_var("TRANSFER_TEST_INPUT_DIR");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
reports_dir = "${TRANSFER_TEST_UNSET_REPORTS_DIR}"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[inputs\ndir = ").unwrap_err();
        assert!(matches!(err, TransferError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inputs]\nprograms = \"programs.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.programs_file(), "programs.txt");
    }

    #[test]
    fn test_missing_config_file() {
        let err = TomlConfig::from_file("/nonexistent/transfer-report.toml").unwrap_err();
        assert!(matches!(err, TransferError::ConfigError { .. }));
    }
}
