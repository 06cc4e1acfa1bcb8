use crate::domain::errors::RelayError;
use crate::domain::models::receipt::RenderedReceipt;

/// The caller's declared purpose for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageIntent {
    Success,
    Cancel,
    Image,
}

impl MessageIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageIntent::Success => "success",
            MessageIntent::Cancel => "cancel",
            MessageIntent::Image => "image",
        }
    }

    pub fn parse(value: &str) -> Result<Self, RelayError> {
        match value {
            "success" => Ok(MessageIntent::Success),
            "cancel" => Ok(MessageIntent::Cancel),
            "image" => Ok(MessageIntent::Image),
            other => Err(RelayError::UnsupportedIntent(other.to_string())),
        }
    }
}

/// Free-form intent fields as the route layer hands them over. Which ones
/// are required depends on the intent.
#[derive(Debug, Clone, Default)]
pub struct MessageFields {
    pub order_reference: Option<String>,
    pub amount: Option<String>,
    pub transaction_reference: Option<String>,
    pub image: Option<RenderedReceipt>,
}
