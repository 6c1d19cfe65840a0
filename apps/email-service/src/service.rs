//! Email gRPC service implementation
//!
//! Every `Send*` method funnels through [`EmailServiceImpl::dispatch`]: the
//! request's required fields are checked, the message is turned into its
//! payload through `domain_notifications::conversions`, and the sender does
//! the rest. Domain errors are mapped to a small fixed set of statuses so
//! nothing internal leaks to clients.

use std::sync::Arc;

use domain_notifications::{
    CodeManager, EmailSender, NotificationError, RequiredFields, SendRequest, VerificationError,
};
use grpc_helpers::ToTonicResult;
use protos::Email;
use protos::email::v1::{
    RemoveEmailCodeRequest, RemoveEmailCodeResponse, SendActivityAtcJoinRequest,
    SendActivityAtcLeaveRequest, SendActivityPilotJoinRequest, SendActivityPilotLeaveRequest,
    SendApplicationPassedRequest, SendApplicationProcessingRequest,
    SendApplicationRejectedRequest, SendAtcRatingChangeRequest, SendBannedRequest,
    SendEmailResponse, SendInstructorChangeRequest, SendKickedFromServerRequest,
    SendPasswordChangeRequest, SendPasswordResetRequest, SendPermissionChangeRequest,
    SendRoleChangeRequest, SendTicketReplyRequest, SendWelcomeRequest, VerifyCodeStatus,
    VerifyEmailCodeRequest, VerifyEmailCodeResponse,
};
use tonic::{Request, Response, Status};
use tracing::{error, info, warn};

/// gRPC service implementation for notification emails
pub struct EmailServiceImpl {
    sender: EmailSender,
    codes: Arc<CodeManager>,
}

impl EmailServiceImpl {
    pub fn new(sender: EmailSender, codes: Arc<CodeManager>) -> Self {
        Self { sender, codes }
    }

    async fn dispatch<R>(&self, request: Request<R>) -> Result<Response<SendEmailResponse>, Status>
    where
        R: SendRequest + Send,
    {
        let request = request.into_inner();
        check_required(&request)?;

        let recipient = request.target_email().to_string();
        let payload = request.into_payload();

        self.sender
            .send_email(R::KIND, &recipient, &payload)
            .await
            .map_err(send_status)?;

        info!(kind = %R::KIND, "Email sent");
        Ok(Response::new(SendEmailResponse { success: true }))
    }
}

fn check_required(request: &impl RequiredFields) -> Result<(), Status> {
    match request.first_missing() {
        Some(field) => Err(format!("missing required argument: {}", field)).to_tonic(),
        None => Ok(()),
    }
}

fn send_status(err: NotificationError) -> Status {
    match err {
        NotificationError::KindDisabled(kind) => {
            warn!(kind = %kind, "Email kind is disabled");
            Status::unavailable("this type of email is not enabled")
        }
        NotificationError::UnknownKind(id) => {
            warn!(kind = %id, "Unknown email kind");
            Status::invalid_argument("invalid email type")
        }
        other => {
            error!(error = %other, "Failed to send email");
            Status::internal("internal server error")
        }
    }
}

#[tonic::async_trait]
impl Email for EmailServiceImpl {
    async fn send_activity_atc_join(
        &self,
        request: Request<SendActivityAtcJoinRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_activity_atc_leave(
        &self,
        request: Request<SendActivityAtcLeaveRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_activity_pilot_join(
        &self,
        request: Request<SendActivityPilotJoinRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_activity_pilot_leave(
        &self,
        request: Request<SendActivityPilotLeaveRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_application_passed(
        &self,
        request: Request<SendApplicationPassedRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_application_processing(
        &self,
        request: Request<SendApplicationProcessingRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_application_rejected(
        &self,
        request: Request<SendApplicationRejectedRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_atc_rating_change(
        &self,
        request: Request<SendAtcRatingChangeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_banned(
        &self,
        request: Request<SendBannedRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_instructor_change(
        &self,
        request: Request<SendInstructorChangeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_kicked_from_server(
        &self,
        request: Request<SendKickedFromServerRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_password_change(
        &self,
        request: Request<SendPasswordChangeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_password_reset(
        &self,
        request: Request<SendPasswordResetRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_permission_change(
        &self,
        request: Request<SendPermissionChangeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_role_change(
        &self,
        request: Request<SendRoleChangeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_ticket_reply(
        &self,
        request: Request<SendTicketReplyRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn send_welcome(
        &self,
        request: Request<SendWelcomeRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        self.dispatch(request).await
    }

    async fn verify_email_code(
        &self,
        request: Request<VerifyEmailCodeRequest>,
    ) -> Result<Response<VerifyEmailCodeResponse>, Status> {
        let request = request.into_inner();
        check_required(&request)?;

        let status = match self
            .codes
            .verify(&request.email, &request.code, request.cid)
            .await
        {
            Ok(()) => VerifyCodeStatus::Success,
            Err(VerificationError::Expired) => VerifyCodeStatus::Expired,
            Err(VerificationError::Invalid) => VerifyCodeStatus::Invalid,
            Err(e) => {
                error!(error = %e, "Failed to verify email code");
                return Err(Status::internal("internal server error"));
            }
        };

        Ok(Response::new(VerifyEmailCodeResponse {
            success: status == VerifyCodeStatus::Success,
            code: status.into(),
        }))
    }

    async fn remove_email_code(
        &self,
        request: Request<RemoveEmailCodeRequest>,
    ) -> Result<Response<RemoveEmailCodeResponse>, Status> {
        let request = request.into_inner();
        check_required(&request)?;

        self.codes.remove(&request.email).await.map_err(|e| {
            error!(error = %e, "Failed to remove email code");
            Status::internal("internal server error")
        })?;

        Ok(Response::new(RemoveEmailCodeResponse { success: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_notifications::EmailKind;

    #[test]
    fn test_check_required_names_first_empty_field() {
        let request = SendWelcomeRequest {
            target_email: "pilot@example.com".to_string(),
            cid: String::new(),
        };

        let status = check_required(&request).unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "missing required argument: cid");
    }

    #[test]
    fn test_send_status_mapping() {
        let status = send_status(NotificationError::KindDisabled(EmailKind::Banned));
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert_eq!(status.message(), "this type of email is not enabled");

        let status = send_status(NotificationError::UnknownKind("newsletter".into()));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "invalid email type");

        let status = send_status(NotificationError::Delivery("connection reset".into()));
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), "internal server error");
    }
}
