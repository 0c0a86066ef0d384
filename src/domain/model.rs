use crate::utils::error::{InvoiceError, Result};
use chrono::NaiveDate;

/// Contractor name baked into the document and file naming convention.
pub const CONTRACTOR: &str = "Franco";

const GERMAN_MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// A validated month/year pair selecting the reporting period of one invoice.
/// Only constructible through [`Period::new`], so a held value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    /// Build a period, rejecting anything outside month 1-12 or year < 1.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(InvoiceError::PeriodError {
                message: format!("month must be between 1 and 12, got {}", month),
            });
        }
        if year < 1 {
            return Err(InvoiceError::PeriodError {
                message: format!("year must be positive, got {}", year),
            });
        }
        // Both period bounds must be representable, including the January
        // after a December period.
        if NaiveDate::from_ymd_opt(year, month, 1).is_none()
            || (month == 12 && NaiveDate::from_ymd_opt(year + 1, 1, 1).is_none())
        {
            return Err(InvoiceError::PeriodError {
                message: format!("{}-{:02} is outside the supported date range", year, month),
            });
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the period.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| unreachable!("validated in Period::new"))
    }

    /// First day of the following month; December rolls into January.
    pub fn first_day_of_next(&self) -> NaiveDate {
        let (year, month) = if self.month < 12 {
            (self.year, self.month + 1)
        } else {
            (self.year + 1, 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| unreachable!("validated in Period::new"))
    }

    /// Localized month name used for the `{{MONTH_NAME_GERMAN}}` placeholder.
    pub fn month_name_german(&self) -> &'static str {
        GERMAN_MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Name of the duplicated invoice document, e.g. `2023-03-Franco-Invoice`.
    pub fn document_name(&self) -> String {
        format!("{}-{:02}-{}-Invoice", self.year, self.month, CONTRACTOR)
    }

    /// Filename of the exported PDF, e.g. `2023-03-Franco-Invoice.pdf`.
    pub fn pdf_filename(&self) -> String {
        format!("{}.pdf", self.document_name())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// One issue-tracker record, identified by its opaque key (e.g. `PROJ-421`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: String,
}

impl Ticket {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// One placeholder token and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub placeholder: &'static str,
    pub value: String,
}

impl Replacement {
    pub fn new(placeholder: &'static str, value: impl Into<String>) -> Self {
        Self {
            placeholder,
            value: value.into(),
        }
    }
}

/// Everything the load stage needs: target names and the ordered replacements.
#[derive(Debug, Clone)]
pub struct InvoiceContent {
    pub document_name: String,
    pub pdf_filename: String,
    pub replacements: Vec<Replacement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_period_accepts_valid_bounds() {
        assert!(Period::new(1, 2023).is_ok());
        assert!(Period::new(12, 2023).is_ok());
        assert!(Period::new(6, 1).is_ok());
    }

    #[test]
    fn test_period_rejects_invalid_month() {
        assert!(Period::new(0, 2023).is_err());
        assert!(Period::new(13, 2023).is_err());
    }

    #[test]
    fn test_period_rejects_non_positive_year() {
        assert!(Period::new(5, 0).is_err());
        assert!(Period::new(5, -2023).is_err());
    }

    #[test]
    fn test_period_rejects_unrepresentable_bounds() {
        let max_year = NaiveDate::MAX.year();
        assert!(Period::new(11, max_year).is_ok());
        assert!(Period::new(12, max_year).is_err());
        assert!(Period::new(1, max_year + 1).is_err());
    }

    #[test]
    fn test_first_day_formats() {
        let period = Period::new(3, 2023).unwrap();
        assert_eq!(period.first_day().format("%Y-%m-%d").to_string(), "2023-03-01");
    }

    #[test]
    fn test_next_month_within_year() {
        let period = Period::new(3, 2023).unwrap();
        assert_eq!(
            period.first_day_of_next().format("%Y-%m-%d").to_string(),
            "2023-04-01"
        );
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let period = Period::new(12, 2023).unwrap();
        assert_eq!(
            period.first_day_of_next().format("%Y-%m-%d").to_string(),
            "2024-01-01"
        );
    }

    #[test]
    fn test_german_month_names() {
        assert_eq!(Period::new(1, 2023).unwrap().month_name_german(), "Januar");
        assert_eq!(Period::new(3, 2023).unwrap().month_name_german(), "März");
        assert_eq!(Period::new(12, 2023).unwrap().month_name_german(), "Dezember");
    }

    #[test]
    fn test_naming_convention() {
        let period = Period::new(3, 2023).unwrap();
        assert_eq!(period.document_name(), "2023-03-Franco-Invoice");
        assert_eq!(period.pdf_filename(), "2023-03-Franco-Invoice.pdf");
        assert_eq!(period.to_string(), "2023-03");
    }
}
