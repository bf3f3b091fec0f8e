use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to read input file {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} is not valid UTF-8")]
    InvalidEncoding { path: String },

    #[error("Malformed program catalog at line {line}: {message}")]
    MalformedCatalog { line: usize, message: String },

    #[error("Failed to write report {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TransferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransferError::InputNotFound { .. }
            | TransferError::InputRead { .. }
            | TransferError::InvalidEncoding { .. }
            | TransferError::IoError(_) => ErrorCategory::Input,
            TransferError::MalformedCatalog { .. } => ErrorCategory::Parse,
            TransferError::OutputWrite { .. } => ErrorCategory::Output,
            TransferError::ConfigError { .. }
            | TransferError::InvalidConfigValueError { .. }
            | TransferError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TransferError::InputNotFound { path } => {
                format!("Error accessing file: {} does not exist", path)
            }
            TransferError::InputRead { path, source } => {
                format!("Error accessing file: {} ({})", path, source)
            }
            TransferError::InvalidEncoding { path } => {
                format!("Error accessing file: {} is not UTF-8 text", path)
            }
            TransferError::MalformedCatalog { line, message } => {
                format!("The program catalog is malformed (line {}): {}", line, message)
            }
            TransferError::OutputWrite { path, source } => {
                format!("The report could not be saved to {}: {}", path, source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the input directory exists and contains the course and program files"
            }
            ErrorCategory::Parse => {
                "Make sure programs.txt starts with a 'Program: <name>' line before any course"
            }
            ErrorCategory::Output => {
                "Check write permissions and free disk space for the reports directory"
            }
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;
