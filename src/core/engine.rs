use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct InvoiceEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> InvoiceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting invoice generation...");

        // Extract
        println!("Fetching worked tickets...");
        let tickets = self.pipeline.extract().await?;
        println!("Found {} tickets with logged work", tickets.len());

        // Transform
        println!("Preparing document content...");
        let content = self.pipeline.transform(tickets).await?;
        println!("Creating document '{}'", content.document_name);

        // Load
        let output_path = self.pipeline.load(content).await?;
        println!("Invoice saved to: {}", output_path);

        Ok(output_path)
    }
}
