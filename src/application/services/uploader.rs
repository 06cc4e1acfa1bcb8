use async_trait::async_trait;

use crate::domain::models::RenderedReceipt;

/// Hands a rendered receipt to an external storage service and returns the
/// resulting locator. Signing and authentication live entirely on the
/// remote side.
#[async_trait]
pub trait ReceiptUploader: Send + Sync {
    async fn upload(&self, receipt: &RenderedReceipt) -> anyhow::Result<String>;
}
