use poem::http::StatusCode;

use crate::{
    domain::{errors::RelayError, models::ReceiptFields},
    presentation::http::requests::ReceiptFieldsDto,
};

pub fn map_receipt_fields(dto: ReceiptFieldsDto) -> ReceiptFields {
    ReceiptFields {
        recipient_name: dto.recipient_name.unwrap_or_default(),
        utr: dto.utr.unwrap_or_default(),
        payment_type: dto.payment_type.unwrap_or_default(),
        amount: dto.amount.unwrap_or_default(),
        date: dto.date.unwrap_or_default(),
        transaction_id: dto.transaction_id.unwrap_or_default(),
        to_account: dto.to_account.unwrap_or_default(),
        ifsc: dto.ifsc.unwrap_or_default(),
    }
}

/// Caller faults map to 400, a delivery deadline to 504, everything else
/// to 500.
pub fn map_relay_error(err: RelayError) -> poem::Error {
    let status = if err.is_client_fault() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, RelayError::Timeout(_)) {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    poem::Error::from_string(err.to_string(), status)
}
