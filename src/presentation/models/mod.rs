use poem_openapi::Enum;

use crate::application::usecases::send_receipt::ReceiptDeliveryMode;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReceiptModeKind {
    #[oai(rename = "inline")]
    Inline,
    #[oai(rename = "hosted")]
    Hosted,
}

impl Default for ReceiptModeKind {
    fn default() -> Self {
        ReceiptModeKind::Inline
    }
}

impl From<ReceiptModeKind> for ReceiptDeliveryMode {
    fn from(value: ReceiptModeKind) -> Self {
        match value {
            ReceiptModeKind::Inline => ReceiptDeliveryMode::Inline,
            ReceiptModeKind::Hosted => ReceiptDeliveryMode::Hosted,
        }
    }
}

impl From<ReceiptDeliveryMode> for ReceiptModeKind {
    fn from(value: ReceiptDeliveryMode) -> Self {
        match value {
            ReceiptDeliveryMode::Inline => ReceiptModeKind::Inline,
            ReceiptDeliveryMode::Hosted => ReceiptModeKind::Hosted,
        }
    }
}
