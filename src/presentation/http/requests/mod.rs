use poem_openapi::Object;

use crate::presentation::models::ReceiptModeKind;

#[derive(Object, Debug)]
pub struct SendNotificationRequestDto {
    /// Intent tag; unknown tags are rejected by the composer.
    pub intent: String,
    /// Remote socket address for this one delivery.
    pub endpoint: String,
    pub order_reference: Option<String>,
    pub amount: Option<String>,
    pub transaction_reference: Option<String>,
}

#[derive(Object, Debug)]
pub struct ReceiptFieldsDto {
    pub recipient_name: Option<String>,
    pub utr: Option<String>,
    pub payment_type: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub transaction_id: Option<String>,
    pub to_account: Option<String>,
    pub ifsc: Option<String>,
}

#[derive(Object, Debug)]
pub struct SendReceiptRequestDto {
    pub endpoint: String,
    #[oai(default)]
    pub mode: ReceiptModeKind,
    pub order_reference: Option<String>,
    pub receipt: ReceiptFieldsDto,
}
