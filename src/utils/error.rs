use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Invalid request parameter '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ActivityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ActivityNotFound { .. }
            | Self::AlreadySignedUp { .. }
            | Self::NotRegistered { .. } => ErrorCategory::Domain,
            Self::InvalidRequest { .. } => ErrorCategory::Validation,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 請求層級的錯誤，不影響服務
            ErrorCategory::Domain => ErrorSeverity::Low,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// HTTP 狀態碼對應
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ActivityNotFound { .. } => 404,
            Self::AlreadySignedUp { .. } | Self::NotRegistered { .. } => 400,
            Self::InvalidRequest { .. } => 422,
            _ => 500,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ActivityNotFound { activity } => {
                format!("Check the activity name '{}' against GET /activities", activity)
            }
            Self::AlreadySignedUp { .. } => {
                "No action needed, the student is already enrolled".to_string()
            }
            Self::NotRegistered { .. } => {
                "Verify the email address of the enrolled student".to_string()
            }
            Self::InvalidRequest { field, .. } => {
                format!("Provide a non-empty '{}' parameter", field)
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration file or CLI flags", field)
            }
            Self::TomlError(_) => "Make sure the configuration file is valid TOML".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Domain | ErrorCategory::Validation => self.to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
