use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactError, ContactFields, ContactMessage};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("missing email setting: {0}")]
    MissingSetting(&'static str),
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("couldn't reach email service: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for EmailError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error(transparent)]
    Email(#[from] EmailError),
}

pub const DELIVERY_FAILED: &str =
    "Sorry, your message couldn't be sent right now. Please try again later.";

impl DeliveryError {
    /// Text safe to show the visitor. Provider details stay in the server log.
    pub fn visitor_message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Email(_) => DELIVERY_FAILED.to_string(),
        }
    }
}

/// Outbound delivery of contact form submissions.
pub trait EmailSender {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), EmailError>> + Send;
}

/// Validates the raw fields and hands them to `sender` once. No retries.
pub async fn deliver<S: EmailSender>(
    sender: &S,
    fields: &ContactFields,
) -> Result<(), DeliveryError> {
    let message = fields.validate()?;
    sender.send(&message).await?;
    Ok(())
}

/// Like [`deliver`], for a sender that may not have been configured.
pub async fn deliver_with<S: EmailSender>(
    sender: Option<&S>,
    fields: &ContactFields,
) -> Result<(), DeliveryError> {
    match sender {
        Some(sender) => deliver(sender, fields).await,
        None => Err(EmailError::NotConfigured.into()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
}

impl EmailSettings {
    pub const SERVICE_ID: &'static str = "EMAILJS_SERVICE_ID";
    pub const TEMPLATE_ID: &'static str = "EMAILJS_TEMPLATE_ID";
    pub const PUBLIC_KEY: &'static str = "EMAILJS_PUBLIC_KEY";
    pub const ACCESS_TOKEN: &'static str = "EMAILJS_ACCESS_TOKEN";

    pub fn from_env() -> Result<Self, EmailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EmailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(EmailError::MissingSetting(key));
        Ok(Self {
            service_id: require(Self::SERVICE_ID)?,
            template_id: require(Self::TEMPLATE_ID)?,
            public_key: require(Self::PUBLIC_KEY)?,
            access_token: get(Self::ACCESS_TOKEN),
        })
    }

    pub fn request<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.access_token.as_deref(),
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                message: &message.message,
            },
        }
    }
}

/// JSON body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    settings: std::sync::Arc<EmailSettings>,
    endpoint: String,
}

#[cfg(feature = "ssr")]
impl EmailJsClient {
    pub fn new(settings: EmailSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings: std::sync::Arc::new(settings),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(feature = "ssr")]
impl EmailSender for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), EmailError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(&self.settings.request(message))
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct RecordingSender {
        sent: Mutex<Vec<ContactMessage>>,
        fail_with: Option<EmailError>,
    }

    impl RecordingSender {
        fn new(fail_with: Option<EmailError>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with,
            }
        }
    }

    impl EmailSender for RecordingSender {
        async fn send(&self, message: &ContactMessage) -> Result<(), EmailError> {
            self.sent
                .lock()
                .expect("should be able to lock sent messages")
                .push(message.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn settings() -> EmailSettings {
        EmailSettings {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            access_token: None,
        }
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_settings_from_lookup() {
        let vars = HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_abc"),
            ("EMAILJS_TEMPLATE_ID", "template_xyz"),
            ("EMAILJS_PUBLIC_KEY", "pk_123"),
        ]);
        let s = EmailSettings::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(s, settings());
    }

    #[test]
    fn test_settings_missing_and_blank() {
        let vars = HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_abc"),
            ("EMAILJS_TEMPLATE_ID", "  "),
            ("EMAILJS_PUBLIC_KEY", "pk_123"),
        ]);
        let res = EmailSettings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(res, Err(EmailError::MissingSetting("EMAILJS_TEMPLATE_ID")));

        let res = EmailSettings::from_lookup(|_| None);
        assert_eq!(res, Err(EmailError::MissingSetting("EMAILJS_SERVICE_ID")));
    }

    #[test]
    fn test_request_body_shape() {
        let message = fields().validate().unwrap();
        let body = serde_json::to_value(settings().request(&message)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                }
            })
        );
    }

    #[test]
    fn test_request_body_with_access_token() {
        let mut settings = settings();
        settings.access_token = Some("secret".to_string());
        let message = fields().validate().unwrap();
        let body = serde_json::to_value(settings.request(&message)).unwrap();
        assert_eq!(body["accessToken"], "secret");
    }

    #[tokio::test]
    async fn test_deliver_sends_once() {
        let sender = RecordingSender::new(None);
        deliver(&sender, &fields()).await.unwrap();
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_deliver_rejects_invalid_without_sending() {
        let sender = RecordingSender::new(None);
        let mut bad = fields();
        bad.email = "nope".to_string();
        let res = deliver(&sender, &bad).await;
        assert_eq!(res, Err(DeliveryError::Invalid(ContactError::InvalidEmail)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deliver_surfaces_failure_without_retry() {
        let err = EmailError::Rejected {
            status: 400,
            body: "The service ID is invalid".to_string(),
        };
        let sender = RecordingSender::new(Some(err.clone()));
        let res = deliver(&sender, &fields()).await;
        assert_eq!(res, Err(DeliveryError::Email(err)));
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_sender_refuses() {
        let res = deliver_with::<RecordingSender>(None, &fields()).await;
        assert_eq!(res, Err(DeliveryError::Email(EmailError::NotConfigured)));

        let sender = RecordingSender::new(None);
        deliver_with(Some(&sender), &fields()).await.unwrap();
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_visitor_message_hides_provider_detail() {
        let rejected = DeliveryError::Email(EmailError::Rejected {
            status: 400,
            body: "The service ID is invalid".to_string(),
        });
        let transport = DeliveryError::Email(EmailError::Transport("dns error".to_string()));
        let unconfigured = DeliveryError::Email(EmailError::NotConfigured);
        for err in [rejected, transport, unconfigured] {
            assert_eq!(err.visitor_message(), DELIVERY_FAILED);
        }

        let invalid = DeliveryError::Invalid(ContactError::InvalidEmail);
        assert_eq!(
            invalid.visitor_message(),
            "That email address doesn't look right"
        );
    }
}

#[cfg(all(test, feature = "ssr"))]
mod client_tests {
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use tokio::net::TcpListener;

    use super::*;

    fn client(addr: SocketAddr) -> EmailJsClient {
        let settings = EmailSettings {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            access_token: None,
        };
        EmailJsClient::new(settings).with_endpoint(format!("http://{addr}/send"))
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    /// Rejects the first request with a 400, accepts the rest.
    async fn flaky_service() -> SocketAddr {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new().route(
            "/send",
            post(move || {
                let calls = calls.clone();
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        (StatusCode::BAD_REQUEST, "The service ID is invalid")
                    } else {
                        (StatusCode::OK, "OK")
                    }
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_client_reports_rejection_then_success() {
        let client = client(flaky_service().await);

        let err = client.send(&message()).await.unwrap_err();
        assert_eq!(
            err,
            EmailError::Rejected {
                status: 400,
                body: "The service ID is invalid".to_string(),
            }
        );
        assert_eq!(client.send(&message()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_client_unreachable_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(addr).send(&message()).await.unwrap_err();
        assert!(matches!(err, EmailError::Transport(_)), "got {err:?}");
    }
}
