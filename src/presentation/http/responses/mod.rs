use poem_openapi::Object;

#[derive(Object)]
pub struct SendNotificationResponseDto {
    pub correlation_id: String,
}

#[derive(Object)]
pub struct ConvertReceiptResponseDto {
    pub success: bool,
    #[oai(rename = "mimeType")]
    pub mime_type: String,
    #[oai(rename = "fileName")]
    pub file_name: String,
    pub base64: String,
}

#[derive(Object)]
pub struct SendReceiptResponseDto {
    pub correlation_id: String,
    pub locator: Option<String>,
}
