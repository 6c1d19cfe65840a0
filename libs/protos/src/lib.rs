//! buf-generated prost and tonic code for the definitions under `proto/`.
//! The generated files are checked in; the prost file `include!`s its tonic file.

pub mod email {
    pub mod v1 {
        include!("generated/email/v1/email.v1.rs");
    }
}

pub use email::v1::email_client::EmailClient;
pub use email::v1::email_server::{Email, EmailServer};

#[cfg(test)]
mod tests {
    use super::email::v1::*;
    use prost::Message;

    #[test]
    fn test_verify_status_names() {
        assert_eq!(
            VerifyCodeStatus::Expired.as_str_name(),
            "VERIFY_CODE_STATUS_EXPIRED"
        );
        assert_eq!(
            VerifyCodeStatus::from_str_name("VERIFY_CODE_STATUS_INVALID"),
            Some(VerifyCodeStatus::Invalid)
        );
    }

    #[test]
    fn test_unknown_status_value_falls_back() {
        let response = VerifyEmailCodeResponse {
            success: false,
            code: 42,
        };
        assert_eq!(response.code(), VerifyCodeStatus::Success);
    }

    #[test]
    fn test_request_wire_format() {
        let request = SendWelcomeRequest {
            target_email: "pilot@example.com".to_string(),
            cid: "1234".to_string(),
        };
        let decoded = SendWelcomeRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(email_server::SERVICE_NAME, "email.v1.Email");
    }
}
