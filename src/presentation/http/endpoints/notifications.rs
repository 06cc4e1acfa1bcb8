use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::send_notification::SendNotificationRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_relay_error,
        requests::SendNotificationRequestDto,
        responses::SendNotificationResponseDto,
    },
};

#[derive(Clone)]
pub struct NotificationsEndpoints {
    state: Arc<ApiState>,
}

impl NotificationsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl NotificationsEndpoints {
    #[oai(
        path = "/notifications",
        method = "post",
        tag = EndpointsTags::Notifications,
    )]
    pub async fn send_notification(
        &self,
        request: Json<SendNotificationRequestDto>,
    ) -> PoemResult<Json<SendNotificationResponseDto>> {
        let request = request.0;

        let response = self
            .state
            .send_notification_usecase
            .execute(SendNotificationRequest {
                endpoint: request.endpoint,
                intent: request.intent,
                order_reference: request.order_reference,
                amount: request.amount,
                transaction_reference: request.transaction_reference,
            })
            .await
            .map_err(map_relay_error)?;

        Ok(Json(SendNotificationResponseDto {
            correlation_id: response.correlation_id,
        }))
    }
}
