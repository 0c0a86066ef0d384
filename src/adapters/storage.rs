use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem storage rooted at the invoice output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("invoices");
        let storage = LocalStorage::new(base.to_str().unwrap());

        storage
            .write_file("2023-03-Franco-Invoice.pdf", b"%PDF-1.4")
            .await
            .unwrap();

        let written = fs::read(base.join("2023-03-Franco-Invoice.pdf")).unwrap();
        assert_eq!(written, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());

        storage.write_file("invoice.pdf", b"first run").await.unwrap();
        storage.write_file("invoice.pdf", b"second run").await.unwrap();

        let written = fs::read(temp_dir.path().join("invoice.pdf")).unwrap();
        assert_eq!(written, b"second run");
    }
}
