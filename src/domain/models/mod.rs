pub mod intent;
pub mod message;
pub mod receipt;

pub use intent::{MessageFields, MessageIntent};
pub use message::{MessageBody, MessageKind, OutboundMessage};
pub use receipt::{ReceiptFields, RenderedReceipt};
