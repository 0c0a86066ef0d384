use crate::adapters::http;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;

/// Public Drive v3 endpoint; overridable for tests and private deployments.
pub const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";

const PDF_MIME_TYPE: &str = "application/pdf";

/// Drive REST client covering the two file operations this tool needs:
/// duplicating the template and exporting the copy as PDF.
pub struct DriveClient {
    client: Client,
    base_url: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct CopiedFile {
    id: String,
}

impl DriveClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Copy `template_id` into `folder_id` under `name`, returning the new file id.
    pub async fn copy_file(&self, template_id: &str, name: &str, folder_id: &str) -> Result<String> {
        let url = format!("{}/files/{}/copy", self.base_url, template_id);
        let body = serde_json::json!({
            "name": name,
            "parents": [folder_id],
        });

        tracing::debug!("Copying template {} as '{}'", template_id, name);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let copied: CopiedFile = http::handle_response("drive", response).await?;
        Ok(copied.id)
    }

    /// Render the file as PDF and return the raw bytes.
    pub async fn export_pdf(&self, file_id: &str) -> Result<Vec<u8>> {
        let url = format!("{}/files/{}/export", self.base_url, file_id);

        tracing::debug!("Exporting {} as PDF", file_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("mimeType", PDF_MIME_TYPE)])
            .send()
            .await?;

        http::handle_bytes("drive", response).await
    }
}
