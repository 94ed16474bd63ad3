use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to load asset '{path}': {source}")]
    AssetLoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Asset pool is empty: at least one asset file is required")]
    EmptyAssetPool,

    #[error("Fragment is not valid UTF-8 text: {0}")]
    FragmentEncodingError(#[from] std::string::FromUtf8Error),

    #[error("Placeholder pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Startup,
    Render,
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

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::AssetLoadError { .. } | DashboardError::EmptyAssetPool => {
                ErrorCategory::Startup
            }
            DashboardError::FragmentEncodingError(_) | DashboardError::PatternError(_) => {
                ErrorCategory::Render
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DashboardError::IoError(_) | DashboardError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 資產池無法建立時，整個流程無法開始
            ErrorCategory::Startup => ErrorSeverity::Critical,
            ErrorCategory::Render | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                DashboardError::SerializationError(_) => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::AssetLoadError { path, .. } => format!(
                "Make sure '{}' exists and is readable, or point --asset-dir at the directory holding the icon images",
                path
            ),
            DashboardError::EmptyAssetPool => {
                "Configure at least one asset file (e.g. --assets image1.png)".to_string()
            }
            DashboardError::FragmentEncodingError(_) => {
                "Pass markup as UTF-8 text before rendering".to_string()
            }
            DashboardError::PatternError(_) => {
                "Check that placeholder classes are plain CSS class names".to_string()
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => {
                "Review the configuration file or command line flags".to_string()
            }
            DashboardError::IoError(_) => {
                "Check file permissions and available disk space for the output path".to_string()
            }
            DashboardError::SerializationError(_) => {
                "Retry without --report, or report the issue".to_string()
            }
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Startup => format!("Dashboard assets could not be loaded: {}", self),
            ErrorCategory::Render => format!("A dashboard fragment could not be rendered: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
