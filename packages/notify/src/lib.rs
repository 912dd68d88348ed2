// ABOUTME: Outbound email notifications for triggered price alerts
// ABOUTME: NotificationGateway trait with a Resend-backed and a no-op implementation

pub mod email;
pub mod gateway;

pub use email::{price_drop_email, Email};
pub use gateway::{NoopGateway, NotificationGateway, ResendGateway};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Email provider rejected the request: {status} {body}")]
    Provider { status: u16, body: String },
    #[error("Notification gateway is not configured")]
    NotConfigured,
}

pub type NotifyResult<T> = Result<T, NotifyError>;
