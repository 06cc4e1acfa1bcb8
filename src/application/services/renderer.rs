use async_trait::async_trait;

use crate::domain::models::{ReceiptFields, RenderedReceipt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererBackend {
    /// External headless-browser render service.
    Remote,
    /// In-process SVG document.
    Svg,
}

impl RendererBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererBackend::Remote => "remote",
            RendererBackend::Svg => "svg",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "remote" => Some(RendererBackend::Remote),
            "svg" => Some(RendererBackend::Svg),
            _ => None,
        }
    }
}

/// Capability interface over interchangeable receipt-image backends. The
/// rest of the service only ever sees bytes plus a media type.
#[async_trait]
pub trait ReceiptRenderer: Send + Sync {
    fn backend(&self) -> RendererBackend;
    async fn render(&self, fields: &ReceiptFields) -> anyhow::Result<RenderedReceipt>;
}
