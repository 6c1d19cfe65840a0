//! The templates shipped under `data/templates` compile and render.

use std::path::PathBuf;

use domain_notifications::{
    BannedEmail, EmailKind, TemplateLoader, TemplateSettings, TemplateSource, VerifyCodeEmail,
};

fn shipped() -> TemplateLoader {
    TemplateLoader::new(TemplateSource {
        dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/templates"),
        download_prefix: None,
    })
}

#[tokio::test]
async fn test_every_kind_has_a_shipped_template() {
    let registry = shipped()
        .load_registry(&TemplateSettings::all_defaults())
        .await
        .unwrap();

    assert_eq!(registry.enabled_kinds().count(), EmailKind::ALL.len());
}

#[tokio::test]
async fn test_shipped_templates_render_their_fields() {
    let registry = shipped()
        .load_registry(&TemplateSettings::all_defaults())
        .await
        .unwrap();

    let html = registry
        .render(
            EmailKind::VerifyCode,
            &VerifyCodeEmail {
                cid: "0042".into(),
                code: "AbC123".into(),
                expired: "5".into(),
                expired_at: "2026-10-18T12:05:00Z".into(),
            }
            .into(),
        )
        .unwrap();
    assert!(html.contains("AbC123"));
    assert!(html.contains("2026-10-18T12:05:00Z"));

    let html = registry
        .render(
            EmailKind::Banned,
            &BannedEmail {
                cid: "1234".into(),
                reason: "Repeated violations".into(),
                time: "2026-12-31".into(),
                operator: "Supervisor".into(),
                contact: "support@example.com".into(),
            }
            .into(),
        )
        .unwrap();
    assert!(html.contains("Repeated violations"));
    assert!(html.contains("support@example.com"));
}
