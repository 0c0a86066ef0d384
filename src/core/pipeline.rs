use crate::adapters::docs::DocsClient;
use crate::adapters::drive::DriveClient;
use crate::adapters::jira::JiraClient;
use crate::core::{ConfigProvider, InvoiceContent, Period, Pipeline, Replacement, Storage, Ticket};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};

pub struct InvoicePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    period: Period,
    jira: JiraClient,
    docs: DocsClient,
    drive: DriveClient,
}

impl<S: Storage, C: ConfigProvider> InvoicePipeline<S, C> {
    pub fn new(storage: S, config: C, period: Period, access_token: &str) -> Self {
        let jira = JiraClient::new(
            config.jira_url(),
            config.jira_username(),
            config.jira_password(),
        );
        let docs = DocsClient::new(config.docs_api_url(), access_token);
        let drive = DriveClient::new(config.drive_api_url(), access_token);

        Self {
            storage,
            config,
            period,
            jira,
            docs,
            drive,
        }
    }
}

/// Placeholder values for one invoice. Order matches the template, and the
/// output is fully determined by the inputs.
pub(crate) fn build_replacements(
    period: Period,
    tickets: &[Ticket],
    today: NaiveDate,
) -> Vec<Replacement> {
    let ticket_numbers = tickets
        .iter()
        .map(|ticket| ticket.key.as_str())
        .collect::<Vec<_>>()
        .join(",\n");

    vec![
        Replacement::new("{{YEAR}}", period.year().to_string()),
        Replacement::new("{{MONTH}}", format!("{:02}", period.month())),
        Replacement::new("{{MONTH_NAME_GERMAN}}", period.month_name_german()),
        Replacement::new("{{CURRENT_DATE}}", today.format("%d.%m.%Y").to_string()),
        Replacement::new("{{TICKET_NUMBERS}}", ticket_numbers),
    ]
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for InvoicePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Ticket>> {
        tracing::debug!("Querying worked tickets for {}", self.period);
        let tickets = self
            .jira
            .worked_tickets(self.config.project_key(), self.period)
            .await?;

        tracing::debug!("Issue search returned {} tickets", tickets.len());
        Ok(tickets)
    }

    async fn transform(&self, tickets: Vec<Ticket>) -> Result<InvoiceContent> {
        if tickets.is_empty() {
            tracing::warn!(
                "No logged work found in {}; the ticket list will be empty",
                self.period
            );
        }

        let replacements = build_replacements(self.period, &tickets, Local::now().date_naive());

        Ok(InvoiceContent {
            document_name: self.period.document_name(),
            pdf_filename: self.period.pdf_filename(),
            replacements,
        })
    }

    async fn load(&self, content: InvoiceContent) -> Result<String> {
        let output_path = format!("{}/{}", self.config.invoice_dir(), content.pdf_filename);

        let document_id = self
            .drive
            .copy_file(
                self.config.template_id(),
                &content.document_name,
                self.config.folder_id(),
            )
            .await?;
        tracing::info!("Invoice document created with id: {}", document_id);

        self.docs
            .replace_all_text(&document_id, &content.replacements)
            .await?;
        tracing::debug!("Replaced {} placeholders", content.replacements.len());

        let pdf_bytes = self.drive.export_pdf(&document_id).await?;

        tracing::debug!("Writing PDF ({} bytes) to storage", pdf_bytes.len());
        self.storage
            .write_file(&content.pdf_filename, &pdf_bytes)
            .await?;

        Ok(output_path)
    }
}
