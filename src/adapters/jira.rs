use crate::adapters::http;
use crate::domain::model::{Period, Ticket};
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;

const SEARCH_PATH: &str = "/rest/api/2/search";

/// Page size for the search endpoint; pages are drained until `total` is reached.
const PAGE_SIZE: u32 = 50;

/// Minimal Jira REST client for the worklog search this tool needs.
pub struct JiraClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u32,
    issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
struct Issue {
    key: String,
}

impl JiraClient {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// JQL selecting every ticket the current user logged work on in the period.
    pub fn worklog_jql(project_key: &str, period: Period) -> String {
        let start = period.first_day().format("%Y-%m-%d");
        let end = period.first_day_of_next().format("%Y-%m-%d");
        format!(
            "project = {project_key} AND worklogDate >= {start} AND worklogDate < {end} \
             AND worklogAuthor = currentUser() ORDER BY id"
        )
    }

    /// Fetch the keys of all tickets matching the worklog query, in server order.
    pub async fn worked_tickets(&self, project_key: &str, period: Period) -> Result<Vec<Ticket>> {
        let jql = Self::worklog_jql(project_key, period);
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let page_size = PAGE_SIZE.to_string();

        let mut tickets = Vec::new();
        let mut start_at: u32 = 0;

        loop {
            tracing::debug!("Searching Jira: {} (startAt={})", url, start_at);
            let start_param = start_at.to_string();
            let response = self
                .client
                .get(&url)
                .basic_auth(&self.username, Some(&self.password))
                .query(&[
                    ("jql", jql.as_str()),
                    ("fields", "key"),
                    ("startAt", start_param.as_str()),
                    ("maxResults", page_size.as_str()),
                ])
                .send()
                .await?;

            let page: SearchResponse = http::handle_response("jira", response).await?;
            let fetched = page.issues.len() as u32;
            tickets.extend(page.issues.into_iter().map(|issue| Ticket::new(issue.key)));

            // Advance from a locally tracked offset; some servers echo a stale
            // startAt, which would otherwise loop on the same page.
            start_at += fetched;
            if fetched == 0 || start_at >= page.total {
                break;
            }
        }

        tracing::debug!("Jira search returned {} tickets", tickets.len());
        Ok(tickets)
    }
}
