//! The immutable table of notification kinds and their compiled templates.

use crate::error::{NotificationError, NotificationResult};
use crate::kinds::EmailKind;
use crate::models::{EmailPayload, RequiredFields};
use handlebars::Handlebars;
use std::collections::BTreeMap;
use tracing::debug;

/// Registered state of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationKind {
    pub kind: EmailKind,
    /// False when no template was supplied or the kind was switched off.
    pub enabled: bool,
    pub subject: String,
}

/// Every [`EmailKind`], its subject and, for enabled kinds, a compiled template.
///
/// Built once at startup and shared read-only behind an `Arc`.
pub struct KindRegistry {
    kinds: BTreeMap<EmailKind, NotificationKind>,
    templates: Handlebars<'static>,
}

impl KindRegistry {
    pub fn builder() -> KindRegistryBuilder {
        KindRegistryBuilder::default()
    }

    /// Look a kind up by its id. Disabled kinds are still found.
    pub fn lookup(&self, id: &str) -> Option<&NotificationKind> {
        id.parse::<EmailKind>().ok().and_then(|kind| self.get(kind))
    }

    pub fn get(&self, kind: EmailKind) -> Option<&NotificationKind> {
        self.kinds.get(&kind)
    }

    pub fn is_enabled(&self, kind: EmailKind) -> bool {
        self.get(kind).is_some_and(|k| k.enabled)
    }

    pub fn enabled_kinds(&self) -> impl Iterator<Item = EmailKind> + '_ {
        self.kinds.values().filter(|k| k.enabled).map(|k| k.kind)
    }

    /// Whether `payload` has the shape kind `id` expects.
    pub fn validate(&self, id: &str, payload: &EmailPayload) -> bool {
        match self.lookup(id) {
            Some(registered) => check_payload(registered.kind, payload).is_ok(),
            None => false,
        }
    }

    /// Resolve `kind` for sending: it must be enabled and accept `payload`.
    pub fn resolve(
        &self,
        kind: EmailKind,
        payload: &EmailPayload,
    ) -> NotificationResult<&NotificationKind> {
        let registered = self
            .get(kind)
            .ok_or_else(|| NotificationError::UnknownKind(kind.id().to_string()))?;
        if !registered.enabled {
            return Err(NotificationError::KindDisabled(kind));
        }
        check_payload(kind, payload)?;
        Ok(registered)
    }

    /// Render the template of `kind` with `payload` as its data.
    pub fn render(&self, kind: EmailKind, payload: &EmailPayload) -> NotificationResult<String> {
        if !self.templates.has_template(kind.id()) {
            return Err(NotificationError::KindDisabled(kind));
        }
        Ok(self.templates.render(kind.id(), payload)?)
    }
}

fn check_payload(kind: EmailKind, payload: &EmailPayload) -> NotificationResult<()> {
    if payload.kind() != kind {
        return Err(NotificationError::PayloadInvalid {
            kind,
            reason: format!("payload is for '{}'", payload.kind()),
        });
    }
    if let Some(field) = payload.first_missing() {
        return Err(NotificationError::PayloadInvalid {
            kind,
            reason: format!("missing required field '{}'", field),
        });
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Entry {
    source: Option<String>,
    subject: Option<String>,
    disabled: bool,
}

/// Collects template sources and subjects, then compiles them in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct KindRegistryBuilder {
    entries: BTreeMap<EmailKind, Entry>,
}

impl KindRegistryBuilder {
    /// Enable `kind` with the given Handlebars source.
    pub fn template(mut self, kind: EmailKind, source: impl Into<String>) -> Self {
        self.entries.entry(kind).or_default().source = Some(source.into());
        self
    }

    /// Override the default subject of `kind`.
    pub fn subject(mut self, kind: EmailKind, subject: impl Into<String>) -> Self {
        self.entries.entry(kind).or_default().subject = Some(subject.into());
        self
    }

    /// Keep `kind` registered but unsendable, even if a template was given.
    pub fn disable(mut self, kind: EmailKind) -> Self {
        self.entries.entry(kind).or_default().disabled = true;
        self
    }

    /// Compile every enabled template in strict mode.
    pub fn build(mut self) -> NotificationResult<KindRegistry> {
        let mut templates = Handlebars::new();
        templates.set_strict_mode(true);

        let mut kinds = BTreeMap::new();
        for kind in EmailKind::ALL {
            let entry = self.entries.remove(&kind).unwrap_or_default();
            let enabled = match (&entry.source, entry.disabled) {
                (Some(source), false) => {
                    templates
                        .register_template_string(kind.id(), source)
                        .map_err(|e| {
                            NotificationError::Template(format!("{}: {}", kind, e))
                        })?;
                    true
                }
                _ => false,
            };
            debug!(kind = %kind, enabled, "Registered email kind");

            kinds.insert(
                kind,
                NotificationKind {
                    kind,
                    enabled,
                    subject: entry
                        .subject
                        .unwrap_or_else(|| kind.default_subject().to_string()),
                },
            );
        }

        Ok(KindRegistry { kinds, templates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BannedEmail, WelcomeEmail};

    fn welcome() -> EmailPayload {
        WelcomeEmail {
            cid: "0042".into(),
        }
        .into()
    }

    fn registry() -> KindRegistry {
        KindRegistry::builder()
            .template(EmailKind::Welcome, "<p>Welcome {{cid}}</p>")
            .subject(EmailKind::Welcome, "Hello")
            .template(EmailKind::Banned, "<p>{{reason}}</p>")
            .disable(EmailKind::Banned)
            .build()
            .unwrap()
    }

    #[test]
    fn test_every_kind_is_registered() {
        let registry = registry();
        for kind in EmailKind::ALL {
            assert!(registry.get(kind).is_some());
            assert!(registry.lookup(kind.id()).is_some());
        }
        assert_eq!(
            registry.enabled_kinds().collect::<Vec<_>>(),
            vec![EmailKind::Welcome]
        );
    }

    #[test]
    fn test_lookup_unknown_id() {
        assert!(registry().lookup("newsletter").is_none());
    }

    #[test]
    fn test_disabled_kind_is_found_but_not_sendable() {
        let registry = registry();
        let banned = registry.lookup("banned").unwrap();
        assert!(!banned.enabled);
        assert_eq!(banned.subject, EmailKind::Banned.default_subject());

        let payload = EmailPayload::Banned(BannedEmail::default());
        let err = registry.resolve(EmailKind::Banned, &payload).unwrap_err();
        assert!(matches!(err, NotificationError::KindDisabled(EmailKind::Banned)));
    }

    #[test]
    fn test_validate() {
        let registry = registry();
        assert!(registry.validate("welcome", &welcome()));
        assert!(!registry.validate("banned", &welcome()));
        assert!(!registry.validate("welcome", &WelcomeEmail::default().into()));
        assert!(!registry.validate("newsletter", &welcome()));
    }

    #[test]
    fn test_resolve_rejects_missing_field() {
        let err = registry()
            .resolve(EmailKind::Welcome, &WelcomeEmail::default().into())
            .unwrap_err();
        match err {
            NotificationError::PayloadInvalid { kind, reason } => {
                assert_eq!(kind, EmailKind::Welcome);
                assert!(reason.contains("cid"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_render_escapes_html() {
        let registry = registry();
        let payload = EmailPayload::Welcome(WelcomeEmail {
            cid: "<b>42</b>".into(),
        });
        let html = registry.render(EmailKind::Welcome, &payload).unwrap();
        assert_eq!(html, "<p>Welcome &lt;b&gt;42&lt;/b&gt;</p>");
    }

    #[test]
    fn test_strict_mode_rejects_unknown_field() {
        let registry = KindRegistry::builder()
            .template(EmailKind::Welcome, "{{nickname}}")
            .build()
            .unwrap();
        let err = registry.render(EmailKind::Welcome, &welcome()).unwrap_err();
        assert!(matches!(err, NotificationError::Render(_)));
    }

    #[test]
    fn test_malformed_template_fails_build() {
        let err = KindRegistry::builder()
            .template(EmailKind::Welcome, "{{#if cid}}unclosed")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, NotificationError::Template(msg) if msg.starts_with("welcome")));
    }
}
