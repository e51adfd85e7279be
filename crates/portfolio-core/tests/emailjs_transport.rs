// EmailJS transport against a local mock of the REST API.

use portfolio_core::{
    ContactController, EmailJsConfig, EmailJsTransport, EmailRequest, EmailTransport, FieldName,
    SubmissionMetadata, SubmissionPhase, TemplateParams, MSG_CLIENT, MSG_NETWORK,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> EmailJsConfig {
    EmailJsConfig {
        endpoint: server.uri(),
        ..EmailJsConfig::new("service_test", "template_test", "public_test")
    }
}

fn request(config: &EmailJsConfig) -> EmailRequest {
    EmailRequest::new(
        config,
        TemplateParams {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
            website_url: "https://example.dev".into(),
            timestamp: "1/2/2026, 3:04:05 PM".into(),
        },
    )
}

#[tokio::test]
async fn posts_emailjs_body_and_reads_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_json(json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_test",
            "template_params": {
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello",
                "website_url": "https://example.dev",
                "timestamp": "1/2/2026, 3:04:05 PM"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let transport = EmailJsTransport::new(&config);
    let response = transport.send(&request(&config)).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.text, "OK");
    assert!(response.is_ok());
}

#[tokio::test]
async fn error_status_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let err = EmailJsTransport::new(&config)
        .send(&request(&config))
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.text.as_deref(), Some("The Public Key is invalid"));
}

#[tokio::test]
async fn unreachable_endpoint_has_no_status() {
    // Nothing listens on the discard port.
    let config = EmailJsConfig {
        endpoint: "http://127.0.0.1:9".into(),
        ..EmailJsConfig::new("service_test", "template_test", "public_test")
    };
    let err = EmailJsTransport::new(&config)
        .send(&request(&config))
        .await
        .unwrap_err();
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn controller_round_trip_through_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let transport = EmailJsTransport::new(&config);
    let mut controller = ContactController::new(config);
    controller.update_field(FieldName::Name, "Ada");
    controller.update_field(FieldName::Email, "ada@example.com");
    controller.update_field(FieldName::Message, "Hello");

    let ticket = controller
        .submit(&transport, SubmissionMetadata::new("https://example.dev", "now"))
        .await;
    assert!(ticket.is_some());
    assert_eq!(controller.phase(), SubmissionPhase::Failed);
    assert_eq!(controller.error_message().as_deref(), Some(MSG_CLIENT));
    assert_eq!(controller.fields().name, "Ada");
    assert_ne!(controller.error_message().as_deref(), Some(MSG_NETWORK));
}
