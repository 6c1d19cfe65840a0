//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the HTTP API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Email Service API",
        version = "0.1.0",
        description = "Verification code mails for the email service"
    ),
    nest(
        (path = "/api/v1", api = domain_notifications::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_route_is_documented_under_version_prefix() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/emails/code"));
    }
}
