use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::domain::{
    errors::RelayError,
    models::{MessageFields, MessageIntent, OutboundMessage},
};

/// Caller-supplied values are interpolated verbatim; callers are trusted
/// with the rendered content.
fn payment_confirmed_body(order: &str, amount: &str, transaction: &str) -> String {
    format!("Payment of {amount} received for order {order}. Transaction reference: {transaction}.")
}

const CANCELLATION_BODY: &str = "The order has been cancelled. No payment will be made.";

/// Maps an intent plus free-form fields into one outbound message. Pure
/// apart from the fresh correlation id and timestamp.
pub fn compose(
    intent: MessageIntent,
    fields: MessageFields,
) -> Result<OutboundMessage, RelayError> {
    match intent {
        MessageIntent::Success => {
            let order = fields
                .order_reference
                .ok_or(RelayError::MissingField("orderReference"))?;
            let amount = fields.amount.ok_or(RelayError::MissingField("amount"))?;
            let transaction = fields
                .transaction_reference
                .ok_or(RelayError::MissingField("transactionReference"))?;

            let body = payment_confirmed_body(&order, &amount, &transaction);
            Ok(OutboundMessage::text(body, Some(order)))
        }
        MessageIntent::Cancel => Ok(OutboundMessage::text(CANCELLATION_BODY.to_string(), None)),
        MessageIntent::Image => {
            let image = fields.image.ok_or(RelayError::MissingField("image"))?;
            Ok(OutboundMessage::image(
                BASE64.encode(&image.bytes),
                image.media_type,
                fields.order_reference,
            ))
        }
    }
}
