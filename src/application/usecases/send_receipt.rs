use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::services::{
        composer::compose,
        delivery::DeliveryChannel,
        renderer::ReceiptRenderer,
        uploader::ReceiptUploader,
    },
    domain::{
        errors::RelayError,
        models::{MessageFields, MessageIntent, OutboundMessage, ReceiptFields},
    },
};

/// Whether the rendered image rides inside the chat message or is uploaded
/// and referenced by locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptDeliveryMode {
    Inline,
    Hosted,
}

pub struct SendReceiptConfig {
    pub delivery_timeout: Duration,
}

pub struct SendReceiptUseCase {
    renderer: Arc<dyn ReceiptRenderer>,
    uploader: Arc<dyn ReceiptUploader>,
    channel: Arc<DeliveryChannel>,
    config: SendReceiptConfig,
}

pub struct SendReceiptRequest {
    pub endpoint: String,
    pub mode: ReceiptDeliveryMode,
    pub order_reference: Option<String>,
    pub receipt: ReceiptFields,
}

pub struct SendReceiptResponse {
    pub correlation_id: String,
    pub locator: Option<String>,
}

impl SendReceiptUseCase {
    pub fn new(
        renderer: Arc<dyn ReceiptRenderer>,
        uploader: Arc<dyn ReceiptUploader>,
        channel: Arc<DeliveryChannel>,
        config: SendReceiptConfig,
    ) -> Self {
        Self {
            renderer,
            uploader,
            channel,
            config,
        }
    }

    pub async fn execute(
        &self,
        request: SendReceiptRequest,
    ) -> Result<SendReceiptResponse, RelayError> {
        let rendered = self
            .renderer
            .render(&request.receipt)
            .await
            .map_err(RelayError::Render)?;

        let (message, locator) = match request.mode {
            ReceiptDeliveryMode::Inline => {
                let message = compose(
                    MessageIntent::Image,
                    MessageFields {
                        order_reference: request.order_reference,
                        image: Some(rendered),
                        ..Default::default()
                    },
                )?;
                (message, None)
            }
            ReceiptDeliveryMode::Hosted => {
                let locator = self
                    .uploader
                    .upload(&rendered)
                    .await
                    .map_err(RelayError::Upload)?;
                let message = OutboundMessage::text(locator.clone(), request.order_reference);
                (message, Some(locator))
            }
        };

        let delivered = self
            .channel
            .deliver(&request.endpoint, message, self.config.delivery_timeout)
            .await?;

        Ok(SendReceiptResponse {
            correlation_id: delivered.correlation_id,
            locator,
        })
    }
}
