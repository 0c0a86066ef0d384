use crate::domain::model::{InvoiceContent, Ticket};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn jira_url(&self) -> &str;
    fn jira_username(&self) -> &str;
    fn jira_password(&self) -> &str;
    fn project_key(&self) -> &str;
    fn template_id(&self) -> &str;
    fn folder_id(&self) -> &str;
    fn docs_api_url(&self) -> &str;
    fn drive_api_url(&self) -> &str;
    fn invoice_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Ticket>>;
    async fn transform(&self, tickets: Vec<Ticket>) -> Result<InvoiceContent>;
    async fn load(&self, content: InvoiceContent) -> Result<String>;
}
