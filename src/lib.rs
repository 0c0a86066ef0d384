pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{CliConfig, Settings};
pub use core::{engine::InvoiceEngine, pipeline::InvoicePipeline};
pub use domain::model::{Period, Ticket};
pub use utils::error::{InvoiceError, Result};
