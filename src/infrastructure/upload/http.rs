use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{application::services::uploader::ReceiptUploader, domain::models::RenderedReceipt};

/// Uploader posting the rendered image to an external storage API and
/// returning the hosted locator from the response.
pub struct HttpUploader {
    http: Client,
    upload_url: String,
}

impl HttpUploader {
    pub fn new(upload_url: String) -> Arc<dyn ReceiptUploader> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("receipt-relay/uploader")
                .build()
                .expect("failed to build uploader client"),
            upload_url,
        }) as Arc<dyn ReceiptUploader>
    }
}

#[async_trait]
impl ReceiptUploader for HttpUploader {
    async fn upload(&self, receipt: &RenderedReceipt) -> anyhow::Result<String> {
        let request = UploadRequest {
            mime_type: &receipt.media_type,
            base64: BASE64.encode(&receipt.bytes),
        };

        let response = self
            .http
            .post(&self.upload_url)
            .json(&request)
            .send()
            .await?;

        let payload: UploadResponse = response.json().await?;
        if !payload.success {
            anyhow::bail!(
                "upload service returned error: {}",
                payload
                    .message
                    .unwrap_or_else(|| "unknown error".to_string())
            );
        }

        payload
            .url
            .ok_or_else(|| anyhow::anyhow!("upload service returned no locator"))
    }
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    base64: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: bool,
    message: Option<String>,
    url: Option<String>,
}
