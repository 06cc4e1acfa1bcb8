use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::send_receipt::SendReceiptRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_receipt_fields, map_relay_error},
        requests::{ReceiptFieldsDto, SendReceiptRequestDto},
        responses::{ConvertReceiptResponseDto, SendReceiptResponseDto},
    },
};

#[derive(Clone)]
pub struct ReceiptsEndpoints {
    state: Arc<ApiState>,
}

impl ReceiptsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl ReceiptsEndpoints {
    #[oai(
        path = "/receipts/convert",
        method = "post",
        tag = EndpointsTags::Receipts,
    )]
    pub async fn convert_receipt(
        &self,
        request: Json<ReceiptFieldsDto>,
    ) -> PoemResult<Json<ConvertReceiptResponseDto>> {
        let response = self
            .state
            .convert_receipt_usecase
            .execute(map_receipt_fields(request.0))
            .await
            .map_err(map_relay_error)?;

        Ok(Json(ConvertReceiptResponseDto {
            success: true,
            mime_type: response.media_type,
            file_name: response.file_name,
            base64: response.base64,
        }))
    }

    #[oai(
        path = "/receipts/send",
        method = "post",
        tag = EndpointsTags::Receipts,
    )]
    pub async fn send_receipt(
        &self,
        request: Json<SendReceiptRequestDto>,
    ) -> PoemResult<Json<SendReceiptResponseDto>> {
        let request = request.0;

        let response = self
            .state
            .send_receipt_usecase
            .execute(SendReceiptRequest {
                endpoint: request.endpoint,
                mode: request.mode.into(),
                order_reference: request.order_reference,
                receipt: map_receipt_fields(request.receipt),
            })
            .await
            .map_err(map_relay_error)?;

        Ok(Json(SendReceiptResponseDto {
            correlation_id: response.correlation_id,
            locator: response.locator,
        }))
    }
}
