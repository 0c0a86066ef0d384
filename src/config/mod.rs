use crate::adapters::docs::DEFAULT_DOCS_API_URL;
use crate::adapters::drive::DEFAULT_DRIVE_API_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{InvoiceError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "invoice-gen")]
#[command(about = "Generates the monthly PDF invoice from logged Jira work")]
pub struct CliConfig {
    /// Month of the reporting period (1-12)
    pub month: u32,

    /// Year of the reporting period, e.g. 2023
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    #[arg(long, default_value = "invoices")]
    pub invoice_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Issue tracker connection, read from `JIRA_*` and `PROJECT_KEY`.
#[derive(Debug, Clone)]
pub struct JiraSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub project_key: String,
}

impl JiraSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: required_env("JIRA_URL")?,
            username: required_env("JIRA_USERNAME")?,
            password: required_env("JIRA_PASSWORD")?,
            project_key: required_env("PROJECT_KEY")?,
        })
    }
}

/// Document service settings. The API base URLs are overridable so the tool
/// can be pointed at a local stand-in server.
#[derive(Debug, Clone)]
pub struct GoogleSettings {
    pub template_id: String,
    pub folder_id: String,
    pub docs_api_url: String,
    pub drive_api_url: String,
}

impl GoogleSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            template_id: required_env("GOOGLE_DOCS_TEMPLATE_ID")?,
            folder_id: required_env("GOOGLE_DRIVE_FOLDER_ID")?,
            docs_api_url: optional_env("GOOGLE_DOCS_API_URL")
                .unwrap_or_else(|| DEFAULT_DOCS_API_URL.to_string()),
            drive_api_url: optional_env("GOOGLE_DRIVE_API_URL")
                .unwrap_or_else(|| DEFAULT_DRIVE_API_URL.to_string()),
        })
    }
}

/// Everything one run needs, resolved from the environment and CLI flags
/// before any network call is made.
#[derive(Debug, Clone)]
pub struct Settings {
    pub jira: JiraSettings,
    pub google: GoogleSettings,
    pub invoice_dir: String,
}

impl Settings {
    pub fn from_env(invoice_dir: impl Into<String>) -> Result<Self> {
        Ok(Self {
            jira: JiraSettings::from_env()?,
            google: GoogleSettings::from_env()?,
            invoice_dir: invoice_dir.into(),
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InvoiceError::MissingConfigError {
            field: name.to_string(),
        }),
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

impl ConfigProvider for Settings {
    fn jira_url(&self) -> &str {
        &self.jira.url
    }

    fn jira_username(&self) -> &str {
        &self.jira.username
    }

    fn jira_password(&self) -> &str {
        &self.jira.password
    }

    fn project_key(&self) -> &str {
        &self.jira.project_key
    }

    fn template_id(&self) -> &str {
        &self.google.template_id
    }

    fn folder_id(&self) -> &str {
        &self.google.folder_id
    }

    fn docs_api_url(&self) -> &str {
        &self.google.docs_api_url
    }

    fn drive_api_url(&self) -> &str {
        &self.google.drive_api_url
    }

    fn invoice_dir(&self) -> &str {
        &self.invoice_dir
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("JIRA_URL", &self.jira.url)?;
        validate_non_empty_string("JIRA_USERNAME", &self.jira.username)?;
        validate_non_empty_string("PROJECT_KEY", &self.jira.project_key)?;
        validate_non_empty_string("GOOGLE_DOCS_TEMPLATE_ID", &self.google.template_id)?;
        validate_non_empty_string("GOOGLE_DRIVE_FOLDER_ID", &self.google.folder_id)?;
        validate_url("GOOGLE_DOCS_API_URL", &self.google.docs_api_url)?;
        validate_url("GOOGLE_DRIVE_API_URL", &self.google.drive_api_url)?;
        validate_path("invoice_dir", &self.invoice_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            jira: JiraSettings {
                url: "https://example.atlassian.net".to_string(),
                username: "user@example.com".to_string(),
                password: "api-token".to_string(),
                project_key: "AB".to_string(),
            },
            google: GoogleSettings {
                template_id: "template-1".to_string(),
                folder_id: "folder-1".to_string(),
                docs_api_url: DEFAULT_DOCS_API_URL.to_string(),
                drive_api_url: DEFAULT_DRIVE_API_URL.to_string(),
            },
            invoice_dir: "invoices".to_string(),
        }
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(test_settings().validate().is_ok());
    }

    #[test]
    fn test_invalid_jira_url_fails_validation() {
        let mut settings = test_settings();
        settings.jira.url = "not-a-url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_project_key_fails_validation() {
        let mut settings = test_settings();
        settings.jira.project_key = "   ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_required_env_reads_set_variable() {
        std::env::set_var("INVOICE_GEN_TEST_REQUIRED", "present");
        assert_eq!(
            required_env("INVOICE_GEN_TEST_REQUIRED").unwrap(),
            "present"
        );
        std::env::remove_var("INVOICE_GEN_TEST_REQUIRED");
    }

    #[test]
    fn test_required_env_rejects_unset_variable() {
        let err = required_env("INVOICE_GEN_TEST_NEVER_SET").unwrap_err();
        match err {
            InvoiceError::MissingConfigError { field } => {
                assert_eq!(field, "INVOICE_GEN_TEST_NEVER_SET");
            }
            other => panic!("expected MissingConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_positional_period() {
        let cli = CliConfig::parse_from(["invoice-gen", "3", "2023"]);
        assert_eq!(cli.month, 3);
        assert_eq!(cli.year, 2023);
        assert_eq!(cli.invoice_dir, "invoices");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_accepts_negative_year_for_later_validation() {
        let cli = CliConfig::parse_from(["invoice-gen", "3", "-2023"]);
        assert_eq!(cli.year, -2023);
    }

    #[test]
    fn test_cli_rejects_missing_year() {
        assert!(CliConfig::try_parse_from(["invoice-gen", "3"]).is_err());
    }
}
