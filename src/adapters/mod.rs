// Adapters layer: concrete implementations for the external services
// (issue tracker, document services, token cache) and local storage.

pub mod auth;
pub mod docs;
pub mod drive;
pub mod http;
pub mod jira;
pub mod storage;
