pub mod convert_receipt;
pub mod send_notification;
pub mod send_receipt;
