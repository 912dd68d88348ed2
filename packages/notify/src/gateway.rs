// ABOUTME: NotificationGateway trait plus the Resend-backed implementation
// ABOUTME: NoopGateway stands in when no email provider is configured

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::email::price_drop_email;
use crate::{NotifyError, NotifyResult};

const RESEND_API_BASE: &str = "https://api.resend.com";

/// Delivery seam for alert notifications. The alert sweep talks to this
/// trait so tests and unconfigured deployments can swap the provider out.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send_price_alert(
        &self,
        recipient: &str,
        product_name: &str,
        target_price: f64,
        current_price: f64,
        store_name: &str,
    ) -> NotifyResult<()>;
}

/// Sends alert emails through the Resend HTTP API.
pub struct ResendGateway {
    client: reqwest::Client,
    api_key: String,
    sender: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl ResendGateway {
    pub fn new(api_key: String, sender: String) -> Self {
        Self::with_base_url(api_key, sender, RESEND_API_BASE.to_string())
    }

    /// Base URL override for tests.
    pub fn with_base_url(api_key: String, sender: String, base_url: String) -> Self {
        ResendGateway {
            client: reqwest::Client::new(),
            api_key,
            sender,
            base_url,
        }
    }
}

#[async_trait]
impl NotificationGateway for ResendGateway {
    async fn send_price_alert(
        &self,
        recipient: &str,
        product_name: &str,
        target_price: f64,
        current_price: f64,
        store_name: &str,
    ) -> NotifyResult<()> {
        let email = price_drop_email(product_name, target_price, current_price, store_name);
        let body = SendEmailRequest {
            from: &self.sender,
            to: [recipient],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Email provider rejected alert email: {} {}", status, body);
            return Err(NotifyError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        info!("Price alert email sent to {}", recipient);
        Ok(())
    }
}

/// Used when RESEND_API_KEY is absent. Logs and reports failure so the
/// sweep leaves the alert armed instead of silently consuming it.
pub struct NoopGateway;

#[async_trait]
impl NotificationGateway for NoopGateway {
    async fn send_price_alert(
        &self,
        _recipient: &str,
        product_name: &str,
        _target_price: f64,
        _current_price: f64,
        _store_name: &str,
    ) -> NotifyResult<()> {
        warn!(
            "Email provider not configured, skipping alert email for {}",
            product_name
        );
        Err(NotifyError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn resend_gateway_posts_email_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test_key"))
            .and(body_partial_json(serde_json::json!({
                "from": "alerts@pricepantry.app",
                "to": ["shopper@example.com"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "email-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = ResendGateway::with_base_url(
            "re_test_key".to_string(),
            "alerts@pricepantry.app".to_string(),
            server.uri(),
        );

        gateway
            .send_price_alert("shopper@example.com", "Milk 2L", 3.50, 2.99, "Aldi")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn resend_gateway_surfaces_provider_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid sender"))
            .mount(&server)
            .await;

        let gateway = ResendGateway::with_base_url(
            "re_test_key".to_string(),
            "not-an-email".to_string(),
            server.uri(),
        );

        let err = gateway
            .send_price_alert("shopper@example.com", "Milk 2L", 3.50, 2.99, "Aldi")
            .await
            .unwrap_err();
        match err {
            NotifyError::Provider { status, .. } => assert_eq!(status, 422),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn noop_gateway_reports_not_configured() {
        let err = NoopGateway
            .send_price_alert("shopper@example.com", "Milk 2L", 3.50, 2.99, "Aldi")
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }
}
