use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    convert_receipt::ConvertReceiptUseCase, send_notification::SendNotificationUseCase,
    send_receipt::SendReceiptUseCase,
};

#[derive(Clone)]
pub struct ApiState {
    pub send_notification_usecase: Arc<SendNotificationUseCase>,
    pub send_receipt_usecase: Arc<SendReceiptUseCase>,
    pub convert_receipt_usecase: Arc<ConvertReceiptUseCase>,
}

pub struct Endpoints;

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Notifications,
    Receipts,
}
