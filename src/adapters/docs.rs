use crate::adapters::http;
use crate::domain::model::Replacement;
use crate::utils::error::Result;
use reqwest::Client;

/// Public Docs v1 endpoint; overridable for tests and private deployments.
pub const DEFAULT_DOCS_API_URL: &str = "https://docs.googleapis.com/v1";

/// Docs REST client used to rewrite placeholder tokens inside the copied document.
pub struct DocsClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl DocsClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Apply every replacement in order through a single `batchUpdate` call.
    /// Matching is case-sensitive so stray lowercase tokens stay untouched.
    pub async fn replace_all_text(
        &self,
        document_id: &str,
        replacements: &[Replacement],
    ) -> Result<()> {
        let requests: Vec<serde_json::Value> = replacements
            .iter()
            .map(|replacement| {
                serde_json::json!({
                    "replaceAllText": {
                        "containsText": {
                            "text": replacement.placeholder,
                            "matchCase": true,
                        },
                        "replaceText": replacement.value,
                    }
                })
            })
            .collect();

        let url = format!("{}/documents/{}:batchUpdate", self.base_url, document_id);
        tracing::debug!(
            "Replacing {} placeholders in document {}",
            requests.len(),
            document_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "requests": requests }))
            .send()
            .await?;

        http::ensure_success("docs", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_replace_all_text_builds_ordered_batch() {
        let server = MockServer::start();

        let batch_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/documents/doc-1:batchUpdate")
                .header("authorization", "Bearer tok-123")
                .json_body(serde_json::json!({
                    "requests": [
                        {
                            "replaceAllText": {
                                "containsText": {"text": "{{YEAR}}", "matchCase": true},
                                "replaceText": "2023",
                            }
                        },
                        {
                            "replaceAllText": {
                                "containsText": {"text": "{{MONTH}}", "matchCase": true},
                                "replaceText": "03",
                            }
                        },
                    ]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"documentId": "doc-1", "replies": []}));
        });

        let client = DocsClient::new(server.base_url(), "tok-123");
        let replacements = vec![
            Replacement::new("{{YEAR}}", "2023"),
            Replacement::new("{{MONTH}}", "03"),
        ];
        client
            .replace_all_text("doc-1", &replacements)
            .await
            .unwrap();

        batch_mock.assert();
    }

    #[tokio::test]
    async fn test_replace_failure_surfaces_service_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/documents/doc-1:batchUpdate");
            then.status(403).body("insufficient scope");
        });

        let client = DocsClient::new(server.base_url(), "tok-123");
        let err = client
            .replace_all_text("doc-1", &[Replacement::new("{{YEAR}}", "2023")])
            .await
            .unwrap_err();

        match err {
            crate::utils::error::InvoiceError::ServiceError { service, status, .. } => {
                assert_eq!(service, "docs");
                assert_eq!(status, 403);
            }
            other => panic!("expected ServiceError, got {other:?}"),
        }
    }
}
