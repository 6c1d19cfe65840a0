//! Email gRPC service tests against an in-memory store and a recording provider.

use std::sync::Arc;
use std::time::Duration;

use domain_notifications::{
    CodeManager, CooldownMark, EmailKind, EmailSender, InMemoryTtlStore, IssuedCode, KindRegistry,
    RecordingProvider, VerificationConfig,
};
use email_service::EmailServiceImpl;
use protos::Email;
use protos::email::v1::{
    RemoveEmailCodeRequest, SendBannedRequest, SendTicketReplyRequest, SendWelcomeRequest,
    VerifyCodeStatus, VerifyEmailCodeRequest,
};
use tonic::{Code, Request};

struct Harness {
    service: EmailServiceImpl,
    codes: Arc<CodeManager>,
    provider: RecordingProvider,
}

fn harness_with(provider: RecordingProvider) -> Harness {
    let registry = KindRegistry::builder()
        .template(EmailKind::VerifyCode, "<p>{{code}}</p>")
        .template(EmailKind::Welcome, "<p>Welcome, {{cid}}</p>")
        .template(EmailKind::TicketReply, "<p>{{cid}}: {{title}}</p><p>{{reply}}</p>")
        .template(EmailKind::Banned, "<p>{{cid}} banned: {{reason}}</p>")
        .disable(EmailKind::Banned)
        .build()
        .unwrap();

    let codes = Arc::new(CodeManager::new(
        Arc::new(InMemoryTtlStore::<IssuedCode>::new()),
        Arc::new(InMemoryTtlStore::<CooldownMark>::new()),
        VerificationConfig::default(),
    ));
    let sender = EmailSender::new(
        Arc::new(registry),
        Arc::new(provider.clone()),
        Duration::from_secs(5),
    );

    Harness {
        service: EmailServiceImpl::new(sender, Arc::clone(&codes)),
        codes,
        provider,
    }
}

fn harness() -> Harness {
    harness_with(RecordingProvider::new())
}

fn welcome(target_email: &str, cid: &str) -> Request<SendWelcomeRequest> {
    Request::new(SendWelcomeRequest {
        target_email: target_email.to_string(),
        cid: cid.to_string(),
    })
}

#[tokio::test]
async fn test_send_welcome_delivers_rendered_mail() {
    let h = harness();

    let response = h
        .service
        .send_welcome(welcome("Pilot@Example.com", "1234"))
        .await
        .unwrap();
    assert!(response.into_inner().success);

    let sent = h.provider.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, "pilot@example.com");
    assert_eq!(sent[0].subject, EmailKind::Welcome.default_subject());
    assert_eq!(sent[0].html_body, "<p>Welcome, 1234</p>");
}

#[tokio::test]
async fn test_missing_field_is_invalid_argument_and_nothing_is_sent() {
    let h = harness();

    let status = h.service.send_welcome(welcome("", "1234")).await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "missing required argument: target_email");

    let status = h
        .service
        .send_ticket_reply(Request::new(SendTicketReplyRequest {
            target_email: "pilot@example.com".to_string(),
            cid: "1234".to_string(),
            title: "Frequency question".to_string(),
            reply: String::new(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "missing required argument: reply");

    assert_eq!(h.provider.sent_count().await, 0);
}

#[tokio::test]
async fn test_disabled_kind_is_unavailable() {
    let h = harness();

    let status = h
        .service
        .send_banned(Request::new(SendBannedRequest {
            target_email: "pilot@example.com".to_string(),
            cid: "1234".to_string(),
            reason: "Repeated violations".to_string(),
            time: "2026-10-18T12:00:00Z".to_string(),
            operator: "Supervisor".to_string(),
            contact: "support@example.com".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(status.message(), "this type of email is not enabled");
    assert_eq!(h.provider.sent_count().await, 0);
}

#[tokio::test]
async fn test_kind_without_template_is_unavailable() {
    let h = harness();

    let status = h
        .service
        .send_password_change(Request::new(protos::email::v1::SendPasswordChangeRequest {
            target_email: "pilot@example.com".to_string(),
            cid: "1234".to_string(),
            time: "2026-10-18T12:00:00Z".to_string(),
            ip: "203.0.113.7".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
}

#[tokio::test]
async fn test_delivery_failure_is_opaque_internal() {
    let h = harness_with(RecordingProvider::failing("relay refused: 550 mailbox unavailable"));

    let status = h
        .service
        .send_welcome(welcome("pilot@example.com", "1234"))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal server error");
}

#[tokio::test]
async fn test_verify_code_is_one_shot() {
    let h = harness();
    let issued = h.codes.generate("pilot@example.com", 42).await.unwrap();

    let verify = |code: &str, cid: i32| {
        Request::new(VerifyEmailCodeRequest {
            email: "Pilot@Example.com".to_string(),
            code: code.to_string(),
            cid,
        })
    };

    let wrong = h
        .service
        .verify_email_code(verify("zzzzzz", 42))
        .await
        .unwrap()
        .into_inner();
    assert!(!wrong.success);
    assert_eq!(wrong.code(), VerifyCodeStatus::Invalid);

    let wrong_cid = h
        .service
        .verify_email_code(verify(&issued.code, 7))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(wrong_cid.code(), VerifyCodeStatus::Invalid);

    let ok = h
        .service
        .verify_email_code(verify(&issued.code, 42))
        .await
        .unwrap()
        .into_inner();
    assert!(ok.success);
    assert_eq!(ok.code(), VerifyCodeStatus::Success);

    let again = h
        .service
        .verify_email_code(verify(&issued.code, 42))
        .await
        .unwrap()
        .into_inner();
    assert!(!again.success);
    assert_eq!(again.code(), VerifyCodeStatus::Expired);
}

#[tokio::test]
async fn test_verify_requires_email_and_code() {
    let h = harness();

    let status = h
        .service
        .verify_email_code(Request::new(VerifyEmailCodeRequest {
            email: "pilot@example.com".to_string(),
            code: String::new(),
            cid: 0,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "missing required argument: code");
}

#[tokio::test]
async fn test_remove_invalidates_code_but_keeps_cooldown() {
    let h = harness();
    let issued = h.codes.generate("pilot@example.com", 0).await.unwrap();

    let removed = h
        .service
        .remove_email_code(Request::new(RemoveEmailCodeRequest {
            email: "pilot@example.com".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(removed.success);

    let verify = h
        .service
        .verify_email_code(Request::new(VerifyEmailCodeRequest {
            email: "pilot@example.com".to_string(),
            code: issued.code,
            cid: 0,
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(verify.code(), VerifyCodeStatus::Expired);

    assert!(h.codes.generate("pilot@example.com", 0).await.is_err());
}

#[tokio::test]
async fn test_remove_without_code_succeeds() {
    let h = harness();

    let removed = h
        .service
        .remove_email_code(Request::new(RemoveEmailCodeRequest {
            email: "nobody@example.com".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(removed.success);
}
