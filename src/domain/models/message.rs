use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Fixed tag identifying this client type to the remote chat system.
const ORIGIN_CLIENT: &str = "web";

/// The remote system advances delivery state; messages always leave here
/// in the unsent state.
const DELIVERY_STATE_UNSENT: u8 = 0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageBody {
    Text(String),
    Image {
        data: String,
        #[serde(rename = "mediaType")]
        media_type: String,
    },
}

/// One fully-determined chat message. Immutable once built; a failed
/// delivery is reported as a failure, never mutated and resent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub kind: MessageKind,
    pub correlation_id: String,
    /// Absent is an explicit null on the wire, never an omitted key.
    pub order_reference: Option<String>,
    pub body: MessageBody,
    pub is_self_authored: bool,
    pub origin_client: &'static str,
    pub created_at_millis: i64,
    pub delivery_state: u8,
}

impl OutboundMessage {
    pub fn text(body: String, order_reference: Option<String>) -> Self {
        Self::build(MessageKind::Text, MessageBody::Text(body), order_reference)
    }

    pub fn image(data: String, media_type: String, order_reference: Option<String>) -> Self {
        Self::build(
            MessageKind::Image,
            MessageBody::Image { data, media_type },
            order_reference,
        )
    }

    fn build(kind: MessageKind, body: MessageBody, order_reference: Option<String>) -> Self {
        Self {
            kind,
            correlation_id: Uuid::new_v4().to_string(),
            order_reference,
            body,
            is_self_authored: true,
            origin_client: ORIGIN_CLIENT,
            created_at_millis: Utc::now().timestamp_millis(),
            delivery_state: DELIVERY_STATE_UNSENT,
        }
    }
}
