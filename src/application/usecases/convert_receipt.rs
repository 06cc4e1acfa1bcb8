use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::{
    application::services::renderer::ReceiptRenderer,
    domain::{errors::RelayError, models::ReceiptFields},
};

pub struct ConvertReceiptUseCase {
    renderer: Arc<dyn ReceiptRenderer>,
}

pub struct ConvertReceiptResponse {
    pub media_type: String,
    pub file_name: String,
    pub base64: String,
}

impl ConvertReceiptUseCase {
    pub fn new(renderer: Arc<dyn ReceiptRenderer>) -> Self {
        Self { renderer }
    }

    pub async fn execute(&self, fields: ReceiptFields) -> Result<ConvertReceiptResponse, RelayError> {
        let rendered = self
            .renderer
            .render(&fields)
            .await
            .map_err(RelayError::Render)?;

        Ok(ConvertReceiptResponse {
            file_name: file_name_for(&rendered.media_type).to_string(),
            base64: BASE64.encode(&rendered.bytes),
            media_type: rendered.media_type,
        })
    }
}

fn file_name_for(media_type: &str) -> &'static str {
    match media_type {
        "image/png" => "receipt.png",
        "image/jpeg" => "receipt.jpg",
        "image/svg+xml" => "receipt.svg",
        _ => "receipt.bin",
    }
}
