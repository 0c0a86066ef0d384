use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{service} returned HTTP {status}: {message}")]
    ServiceError {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid reporting period: {message}")]
    PeriodError { message: String },
}

impl InvoiceError {
    /// Short message suitable for direct terminal output.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => format!("A request to an external service failed: {e}"),
            Self::IoError(e) => format!("A file operation failed: {e}"),
            Self::SerializationError(e) => format!("Unexpected response payload: {e}"),
            Self::ServiceError {
                service, status, ..
            } => format!("{service} rejected the request with HTTP {status}"),
            Self::MissingConfigError { field } => {
                format!("The environment variable {field} is not set")
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {field} is invalid: {reason}")
            }
            Self::PeriodError { message } => message.clone(),
        }
    }

    /// Hint printed alongside the error to help the user fix the run.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) => "Check your network connection and the configured service URLs",
            Self::IoError(_) => "Check that the invoice directory is writable",
            Self::SerializationError(_) => {
                "The service responded with something unexpected; retry later or check the API version"
            }
            Self::ServiceError { service, .. } => match *service {
                "jira" => "Verify JIRA_URL, JIRA_USERNAME and JIRA_PASSWORD",
                _ => "Verify GOOGLE_ACCESS_TOKEN is still valid and has Docs and Drive scopes",
            },
            Self::MissingConfigError { .. } => {
                "Set the variable in the environment or in a .env file next to the binary"
            }
            Self::InvalidConfigValueError { .. } => "Correct the value and run again",
            Self::PeriodError { .. } => "Pass a month between 1 and 12 and a positive year",
        }
    }
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
