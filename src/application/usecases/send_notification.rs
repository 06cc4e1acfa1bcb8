use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::services::{composer::compose, delivery::DeliveryChannel},
    domain::{
        errors::RelayError,
        models::{MessageFields, MessageIntent},
    },
};

pub struct SendNotificationConfig {
    pub delivery_timeout: Duration,
}

pub struct SendNotificationUseCase {
    channel: Arc<DeliveryChannel>,
    config: SendNotificationConfig,
}

pub struct SendNotificationRequest {
    pub endpoint: String,
    pub intent: String,
    pub order_reference: Option<String>,
    pub amount: Option<String>,
    pub transaction_reference: Option<String>,
}

pub struct SendNotificationResponse {
    pub correlation_id: String,
}

impl SendNotificationUseCase {
    pub fn new(channel: Arc<DeliveryChannel>, config: SendNotificationConfig) -> Self {
        Self { channel, config }
    }

    pub async fn execute(
        &self,
        request: SendNotificationRequest,
    ) -> Result<SendNotificationResponse, RelayError> {
        let intent = MessageIntent::parse(&request.intent)?;
        if intent == MessageIntent::Image {
            // Image delivery goes through the receipt flow, which supplies
            // the rendered bytes; it cannot be requested here.
            return Err(RelayError::UnsupportedIntent(request.intent));
        }

        let message = compose(
            intent,
            MessageFields {
                order_reference: request.order_reference,
                amount: request.amount,
                transaction_reference: request.transaction_reference,
                image: None,
            },
        )?;

        let delivered = self
            .channel
            .deliver(&request.endpoint, message, self.config.delivery_timeout)
            .await?;

        Ok(SendNotificationResponse {
            correlation_id: delivered.correlation_id,
        })
    }
}
