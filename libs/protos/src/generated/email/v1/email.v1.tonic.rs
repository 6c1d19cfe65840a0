// @generated
/// Generated client implementations.
pub mod email_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /// Notification email delivery and verification code checks.
    #[derive(Debug, Clone)]
    pub struct EmailClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl EmailClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> EmailClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> EmailClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            EmailClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn send_activity_atc_join(
            &mut self,
            request: impl tonic::IntoRequest<super::SendActivityAtcJoinRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendActivityAtcJoin",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendActivityAtcJoin"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_activity_atc_leave(
            &mut self,
            request: impl tonic::IntoRequest<super::SendActivityAtcLeaveRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendActivityAtcLeave",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendActivityAtcLeave"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_activity_pilot_join(
            &mut self,
            request: impl tonic::IntoRequest<super::SendActivityPilotJoinRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendActivityPilotJoin",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendActivityPilotJoin"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_activity_pilot_leave(
            &mut self,
            request: impl tonic::IntoRequest<super::SendActivityPilotLeaveRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendActivityPilotLeave",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendActivityPilotLeave"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_application_passed(
            &mut self,
            request: impl tonic::IntoRequest<super::SendApplicationPassedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendApplicationPassed",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendApplicationPassed"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_application_processing(
            &mut self,
            request: impl tonic::IntoRequest<super::SendApplicationProcessingRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendApplicationProcessing",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendApplicationProcessing"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_application_rejected(
            &mut self,
            request: impl tonic::IntoRequest<super::SendApplicationRejectedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendApplicationRejected",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendApplicationRejected"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_atc_rating_change(
            &mut self,
            request: impl tonic::IntoRequest<super::SendAtcRatingChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendAtcRatingChange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendAtcRatingChange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_banned(
            &mut self,
            request: impl tonic::IntoRequest<super::SendBannedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendBanned",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendBanned"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_instructor_change(
            &mut self,
            request: impl tonic::IntoRequest<super::SendInstructorChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendInstructorChange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendInstructorChange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_kicked_from_server(
            &mut self,
            request: impl tonic::IntoRequest<super::SendKickedFromServerRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendKickedFromServer",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendKickedFromServer"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_password_change(
            &mut self,
            request: impl tonic::IntoRequest<super::SendPasswordChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendPasswordChange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendPasswordChange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_password_reset(
            &mut self,
            request: impl tonic::IntoRequest<super::SendPasswordResetRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendPasswordReset",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendPasswordReset"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_permission_change(
            &mut self,
            request: impl tonic::IntoRequest<super::SendPermissionChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendPermissionChange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendPermissionChange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_role_change(
            &mut self,
            request: impl tonic::IntoRequest<super::SendRoleChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendRoleChange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendRoleChange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_ticket_reply(
            &mut self,
            request: impl tonic::IntoRequest<super::SendTicketReplyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendTicketReply",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendTicketReply"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn send_welcome(
            &mut self,
            request: impl tonic::IntoRequest<super::SendWelcomeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/SendWelcome",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "SendWelcome"));
            self.inner.unary(req, path, codec).await
        }
        /// Checks a code previously issued through POST /api/v1/emails/code.
        pub async fn verify_email_code(
            &mut self,
            request: impl tonic::IntoRequest<super::VerifyEmailCodeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::VerifyEmailCodeResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/VerifyEmailCode",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "VerifyEmailCode"));
            self.inner.unary(req, path, codec).await
        }
        /// Invalidates any outstanding code for the address. Cooldown is kept.
        pub async fn remove_email_code(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveEmailCodeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::RemoveEmailCodeResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/email.v1.Email/RemoveEmailCode",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("email.v1.Email", "RemoveEmailCode"));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod email_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with EmailServer.
    #[async_trait]
    pub trait Email: std::marker::Send + std::marker::Sync + 'static {
        async fn send_activity_atc_join(
            &self,
            request: tonic::Request<super::SendActivityAtcJoinRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_activity_atc_leave(
            &self,
            request: tonic::Request<super::SendActivityAtcLeaveRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_activity_pilot_join(
            &self,
            request: tonic::Request<super::SendActivityPilotJoinRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_activity_pilot_leave(
            &self,
            request: tonic::Request<super::SendActivityPilotLeaveRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_application_passed(
            &self,
            request: tonic::Request<super::SendApplicationPassedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_application_processing(
            &self,
            request: tonic::Request<super::SendApplicationProcessingRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_application_rejected(
            &self,
            request: tonic::Request<super::SendApplicationRejectedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_atc_rating_change(
            &self,
            request: tonic::Request<super::SendAtcRatingChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_banned(
            &self,
            request: tonic::Request<super::SendBannedRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_instructor_change(
            &self,
            request: tonic::Request<super::SendInstructorChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_kicked_from_server(
            &self,
            request: tonic::Request<super::SendKickedFromServerRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_password_change(
            &self,
            request: tonic::Request<super::SendPasswordChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_password_reset(
            &self,
            request: tonic::Request<super::SendPasswordResetRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_permission_change(
            &self,
            request: tonic::Request<super::SendPermissionChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_role_change(
            &self,
            request: tonic::Request<super::SendRoleChangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_ticket_reply(
            &self,
            request: tonic::Request<super::SendTicketReplyRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        async fn send_welcome(
            &self,
            request: tonic::Request<super::SendWelcomeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SendEmailResponse>,
            tonic::Status,
        >;
        /// Checks a code previously issued through POST /api/v1/emails/code.
        async fn verify_email_code(
            &self,
            request: tonic::Request<super::VerifyEmailCodeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::VerifyEmailCodeResponse>,
            tonic::Status,
        >;
        /// Invalidates any outstanding code for the address. Cooldown is kept.
        async fn remove_email_code(
            &self,
            request: tonic::Request<super::RemoveEmailCodeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::RemoveEmailCodeResponse>,
            tonic::Status,
        >;
    }
    /// Notification email delivery and verification code checks.
    #[derive(Debug)]
    pub struct EmailServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> EmailServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for EmailServer<T>
    where
        T: Email,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/email.v1.Email/SendActivityAtcJoin" => {
                    #[allow(non_camel_case_types)]
                    struct SendActivityAtcJoinSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendActivityAtcJoinRequest>
                    for SendActivityAtcJoinSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendActivityAtcJoinRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_activity_atc_join(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendActivityAtcJoinSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendActivityAtcLeave" => {
                    #[allow(non_camel_case_types)]
                    struct SendActivityAtcLeaveSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendActivityAtcLeaveRequest>
                    for SendActivityAtcLeaveSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendActivityAtcLeaveRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_activity_atc_leave(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendActivityAtcLeaveSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendActivityPilotJoin" => {
                    #[allow(non_camel_case_types)]
                    struct SendActivityPilotJoinSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendActivityPilotJoinRequest>
                    for SendActivityPilotJoinSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendActivityPilotJoinRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_activity_pilot_join(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendActivityPilotJoinSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendActivityPilotLeave" => {
                    #[allow(non_camel_case_types)]
                    struct SendActivityPilotLeaveSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendActivityPilotLeaveRequest>
                    for SendActivityPilotLeaveSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendActivityPilotLeaveRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_activity_pilot_leave(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendActivityPilotLeaveSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendApplicationPassed" => {
                    #[allow(non_camel_case_types)]
                    struct SendApplicationPassedSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendApplicationPassedRequest>
                    for SendApplicationPassedSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendApplicationPassedRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_application_passed(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendApplicationPassedSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendApplicationProcessing" => {
                    #[allow(non_camel_case_types)]
                    struct SendApplicationProcessingSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendApplicationProcessingRequest>
                    for SendApplicationProcessingSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendApplicationProcessingRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_application_processing(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendApplicationProcessingSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendApplicationRejected" => {
                    #[allow(non_camel_case_types)]
                    struct SendApplicationRejectedSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendApplicationRejectedRequest>
                    for SendApplicationRejectedSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendApplicationRejectedRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_application_rejected(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendApplicationRejectedSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendAtcRatingChange" => {
                    #[allow(non_camel_case_types)]
                    struct SendAtcRatingChangeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendAtcRatingChangeRequest>
                    for SendAtcRatingChangeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendAtcRatingChangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_atc_rating_change(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendAtcRatingChangeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendBanned" => {
                    #[allow(non_camel_case_types)]
                    struct SendBannedSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendBannedRequest>
                    for SendBannedSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendBannedRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_banned(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendBannedSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendInstructorChange" => {
                    #[allow(non_camel_case_types)]
                    struct SendInstructorChangeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendInstructorChangeRequest>
                    for SendInstructorChangeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendInstructorChangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_instructor_change(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendInstructorChangeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendKickedFromServer" => {
                    #[allow(non_camel_case_types)]
                    struct SendKickedFromServerSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendKickedFromServerRequest>
                    for SendKickedFromServerSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendKickedFromServerRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_kicked_from_server(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendKickedFromServerSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendPasswordChange" => {
                    #[allow(non_camel_case_types)]
                    struct SendPasswordChangeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendPasswordChangeRequest>
                    for SendPasswordChangeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendPasswordChangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_password_change(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendPasswordChangeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendPasswordReset" => {
                    #[allow(non_camel_case_types)]
                    struct SendPasswordResetSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendPasswordResetRequest>
                    for SendPasswordResetSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendPasswordResetRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_password_reset(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendPasswordResetSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendPermissionChange" => {
                    #[allow(non_camel_case_types)]
                    struct SendPermissionChangeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendPermissionChangeRequest>
                    for SendPermissionChangeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendPermissionChangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_permission_change(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendPermissionChangeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendRoleChange" => {
                    #[allow(non_camel_case_types)]
                    struct SendRoleChangeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendRoleChangeRequest>
                    for SendRoleChangeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendRoleChangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_role_change(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendRoleChangeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendTicketReply" => {
                    #[allow(non_camel_case_types)]
                    struct SendTicketReplySvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendTicketReplyRequest>
                    for SendTicketReplySvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendTicketReplyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_ticket_reply(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendTicketReplySvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/SendWelcome" => {
                    #[allow(non_camel_case_types)]
                    struct SendWelcomeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::SendWelcomeRequest>
                    for SendWelcomeSvc<T> {
                        type Response = super::SendEmailResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SendWelcomeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::send_welcome(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SendWelcomeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/VerifyEmailCode" => {
                    #[allow(non_camel_case_types)]
                    struct VerifyEmailCodeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::VerifyEmailCodeRequest>
                    for VerifyEmailCodeSvc<T> {
                        type Response = super::VerifyEmailCodeResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::VerifyEmailCodeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::verify_email_code(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = VerifyEmailCodeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/email.v1.Email/RemoveEmailCode" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveEmailCodeSvc<T: Email>(pub Arc<T>);
                    impl<T: Email> tonic::server::UnaryService<super::RemoveEmailCodeRequest>
                    for RemoveEmailCodeSvc<T> {
                        type Response = super::RemoveEmailCodeResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveEmailCodeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Email>::remove_email_code(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveEmailCodeSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for EmailServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "email.v1.Email";
    impl<T> tonic::server::NamedService for EmailServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
