use serde::{Deserialize, Serialize};

/// Fields printed on a payment receipt. All default to empty strings; the
/// renderers draw whatever they are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptFields {
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub utr: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub to_account: String,
    #[serde(default)]
    pub ifsc: String,
}

/// An already-rendered receipt image as handed over by a rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReceipt {
    pub bytes: Vec<u8>,
    pub media_type: String,
}
