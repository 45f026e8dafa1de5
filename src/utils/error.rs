use thiserror::Error;

/// CPF 結構或校驗失敗的原因
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpfError {
    #[error("CPF must have 11 digits, found {found}")]
    MalformedLength { found: usize },

    #[error("CPF cannot be a single repeated digit ({digit})")]
    DegenerateSequence { digit: u8 },

    #[error("Check digit {position} mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { position: u8, expected: u8, found: u8 },
}

impl CpfError {
    /// 穩定的錯誤代碼，用於報表與 JSON 輸出
    pub fn code(&self) -> &'static str {
        match self {
            CpfError::MalformedLength { .. } => "malformed_length",
            CpfError::DegenerateSequence { .. } => "degenerate_sequence",
            CpfError::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid CPF: {0}")]
    CpfError(#[from] CpfError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Batch processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AppError::CpfError(_) | AppError::CsvError(_) => ErrorCategory::Input,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::SerializationError(_) | AppError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 無效的 CPF 只是驗證結果，不是系統故障
            AppError::CpfError(_) => ErrorSeverity::Low,
            AppError::CsvError(_) => ErrorSeverity::Medium,
            AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::ProcessingError { .. }
            | AppError::SerializationError(_) => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::CsvError(_) => {
                "Check that the input file is valid CSV and that every row has the same number of columns".to_string()
            }
            AppError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            AppError::SerializationError(_) => "Re-run with --verbose to inspect the failing record".to_string(),
            AppError::CpfError(_) => {
                "Pass an 11-digit CPF; dots, dashes and spaces are ignored".to_string()
            }
            AppError::MissingConfigError { field } => {
                format!("Provide a value for '{}' on the command line or in the config file", field)
            }
            AppError::InvalidConfigValueError { field, .. }
            | AppError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            AppError::ProcessingError { .. } => "Re-run with --verbose for more details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Io => format!("File access problem: {}", self),
            ErrorCategory::Processing => format!("Processing problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
