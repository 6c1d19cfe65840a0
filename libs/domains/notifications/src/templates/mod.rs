//! Template sources: local files with an optional download fallback.
//!
//! Each enabled kind reads `<dir>/<file>`. When the file is missing and a
//! download prefix is configured, `<prefix>/<file>` is fetched, written to
//! the local path and used. All templates load concurrently at startup.

use crate::error::{NotificationError, NotificationResult};
use crate::kinds::EmailKind;
use crate::registry::KindRegistry;
use futures::future::try_join_all;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Per-kind template settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub kind: EmailKind,
    pub enabled: bool,
    /// File name relative to the template directory.
    pub file: String,
    pub subject: String,
}

impl TemplateSettings {
    /// Enabled, with the kind's default file and subject.
    pub fn defaults(kind: EmailKind) -> Self {
        Self {
            kind,
            enabled: true,
            file: kind.template_file().to_string(),
            subject: kind.default_subject().to_string(),
        }
    }

    /// Defaults for all kinds, in [`EmailKind::ALL`] order.
    pub fn all_defaults() -> Vec<Self> {
        EmailKind::ALL.into_iter().map(Self::defaults).collect()
    }
}

/// Where template bodies come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub dir: PathBuf,
    /// Base URL for missing files, e.g. `https://example.com/templates`.
    pub download_prefix: Option<String>,
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/templates"),
            download_prefix: None,
        }
    }
}

/// Loads template bodies and builds the [`KindRegistry`].
pub struct TemplateLoader {
    source: TemplateSource,
    http: reqwest::Client,
}

impl TemplateLoader {
    pub fn new(source: TemplateSource) -> Self {
        Self {
            source,
            http: reqwest::Client::new(),
        }
    }

    /// Read one template body, downloading it first if needed.
    #[instrument(skip(self), fields(kind = %settings.kind, file = %settings.file))]
    pub async fn load(&self, settings: &TemplateSettings) -> NotificationResult<String> {
        let path = self.source.dir.join(&settings.file);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let Some(prefix) = &self.source.download_prefix else {
                    return Err(NotificationError::Template(format!(
                        "template file {} not found",
                        path.display()
                    )));
                };
                warn!(path = %path.display(), "Template missing locally, downloading");
                self.download(prefix, &settings.file, &path).await
            }
            Err(e) => Err(NotificationError::Template(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn download(&self, prefix: &str, file: &str, path: &Path) -> NotificationResult<String> {
        let url = format!("{}/{}", prefix.trim_end_matches('/'), file);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| NotificationError::Template(format!("failed to download {}: {}", url, e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Template(format!(
                "failed to download {}: HTTP {}",
                url, status
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| NotificationError::Template(format!("failed to read {}: {}", url, e)))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                NotificationError::Template(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        tokio::fs::write(path, &body).await.map_err(|e| {
            NotificationError::Template(format!("failed to write {}: {}", path.display(), e))
        })?;

        info!(url = %url, path = %path.display(), "Template downloaded");
        Ok(body)
    }

    /// Load every enabled template concurrently and compile the registry.
    pub async fn load_registry(&self, settings: &[TemplateSettings]) -> NotificationResult<KindRegistry> {
        let bodies = try_join_all(
            settings
                .iter()
                .filter(|s| s.enabled)
                .map(|s| async move { self.load(s).await.map(|body| (s.kind, body)) }),
        )
        .await?;

        let mut builder = KindRegistry::builder();
        for s in settings {
            builder = builder.subject(s.kind, s.subject.clone());
            if !s.enabled {
                builder = builder.disable(s.kind);
            }
        }
        for (kind, body) in bodies {
            builder = builder.template(kind, body);
        }

        let registry = builder.build()?;
        info!(
            enabled = registry.enabled_kinds().count(),
            total = EmailKind::ALL.len(),
            "Email templates loaded"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn loader(dir: &TempDir, prefix: Option<String>) -> TemplateLoader {
        TemplateLoader::new(TemplateSource {
            dir: dir.path().to_path_buf(),
            download_prefix: prefix,
        })
    }

    #[tokio::test]
    async fn test_reads_local_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("welcome.template"), "<p>{{cid}}</p>").unwrap();

        let body = loader(&dir, None)
            .load(&TemplateSettings::defaults(EmailKind::Welcome))
            .await
            .unwrap();
        assert_eq!(body, "<p>{{cid}}</p>");
    }

    #[tokio::test]
    async fn test_missing_file_without_prefix_fails() {
        let dir = TempDir::new().unwrap();
        let err = loader(&dir, None)
            .load(&TemplateSettings::defaults(EmailKind::Welcome))
            .await
            .unwrap_err();
        assert!(matches!(err, NotificationError::Template(msg) if msg.contains("not found")));
    }

    #[tokio::test]
    async fn test_downloads_and_caches_missing_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/templates/banned.template"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>{{reason}}</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let loader = loader(&dir, Some(format!("{}/templates/", server.uri())));
        let settings = TemplateSettings::defaults(EmailKind::Banned);

        let body = loader.load(&settings).await.unwrap();
        assert_eq!(body, "<p>{{reason}}</p>");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("banned.template")).unwrap(),
            body
        );

        // second load is served from disk
        loader.load(&settings).await.unwrap();
    }

    #[tokio::test]
    async fn test_download_http_error_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let err = loader(&dir, Some(server.uri()))
            .load(&TemplateSettings::defaults(EmailKind::Banned))
            .await
            .unwrap_err();
        assert!(matches!(err, NotificationError::Template(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_load_registry_skips_disabled_kinds() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("welcome.template"), "<p>{{cid}}</p>").unwrap();

        let settings: Vec<_> = TemplateSettings::all_defaults()
            .into_iter()
            .map(|mut s| {
                s.enabled = s.kind == EmailKind::Welcome;
                if s.enabled {
                    s.subject = "Hi".into();
                }
                s
            })
            .collect();

        let registry = loader(&dir, None).load_registry(&settings).await.unwrap();
        assert_eq!(registry.enabled_kinds().collect::<Vec<_>>(), vec![EmailKind::Welcome]);
        assert_eq!(registry.get(EmailKind::Welcome).unwrap().subject, "Hi");
        assert!(!registry.is_enabled(EmailKind::Banned));
    }

    #[tokio::test]
    async fn test_load_registry_fails_on_missing_enabled_template() {
        let dir = TempDir::new().unwrap();
        let result = loader(&dir, None)
            .load_registry(&TemplateSettings::all_defaults())
            .await;
        assert!(matches!(result, Err(NotificationError::Template(_))));
    }
}
