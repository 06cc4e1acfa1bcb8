use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    application::services::renderer::{ReceiptRenderer, RendererBackend},
    domain::models::{ReceiptFields, RenderedReceipt},
};

/// Client for an external headless-browser render service. The service
/// receives the receipt fields as JSON and answers with a base64 screenshot.
pub struct RemoteBrowserRenderer {
    http: Client,
    render_url: String,
}

impl RemoteBrowserRenderer {
    pub fn new(render_url: String) -> Arc<dyn ReceiptRenderer> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("receipt-relay/renderer")
                .build()
                .expect("failed to build renderer client"),
            render_url,
        }) as Arc<dyn ReceiptRenderer>
    }
}

#[async_trait]
impl ReceiptRenderer for RemoteBrowserRenderer {
    fn backend(&self) -> RendererBackend {
        RendererBackend::Remote
    }

    async fn render(&self, fields: &ReceiptFields) -> anyhow::Result<RenderedReceipt> {
        let response = self
            .http
            .post(&self.render_url)
            .json(fields)
            .send()
            .await?;

        let payload: RemoteRenderResponse = response.json().await?;
        if !payload.success {
            anyhow::bail!(
                "render service returned error: {}",
                payload
                    .message
                    .unwrap_or_else(|| "unknown error".to_string())
            );
        }

        let bytes = BASE64.decode(payload.base64.unwrap_or_default())?;
        if bytes.is_empty() {
            anyhow::bail!("render service returned an empty image");
        }

        Ok(RenderedReceipt {
            bytes,
            media_type: payload
                .mime_type
                .unwrap_or_else(|| "image/png".to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RemoteRenderResponse {
    success: bool,
    message: Option<String>,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
    base64: Option<String>,
}
