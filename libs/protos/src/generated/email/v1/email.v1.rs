// @generated
// This file is @generated by prost-build.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendEmailResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendActivityAtcJoinRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub activity_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub activity_time: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub facility: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub frequency: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendActivityAtcLeaveRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub activity_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendActivityPilotJoinRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub activity_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub activity_time: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub callsign: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub aircraft: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendActivityPilotLeaveRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub activity_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendApplicationPassedRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendApplicationProcessingRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub time: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendApplicationRejectedRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub reason: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendAtcRatingChangeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub new_value: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub old_value: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendBannedRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub reason: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub time: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendInstructorChangeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub reason: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub instructor: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendKickedFromServerRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub reason: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub time: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendPasswordChangeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub time: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub ip: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub user_agent: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendPasswordResetRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub time: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub ip: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub user_agent: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendPermissionChangeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub permissions: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendRoleChangeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub roles: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub contact: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendTicketReplyRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub reply: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct SendWelcomeRequest {
    #[prost(string, tag = "1")]
    pub target_email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub cid: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct VerifyEmailCodeRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub code: ::prost::alloc::string::String,
    #[prost(int32, tag = "3")]
    pub cid: i32,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct VerifyEmailCodeResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(enumeration = "VerifyCodeStatus", tag = "2")]
    pub code: i32,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveEmailCodeRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RemoveEmailCodeResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VerifyCodeStatus {
    Success = 0,
    Expired = 1,
    Invalid = 2,
    Unknown = 3,
}
impl VerifyCodeStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Success => "VERIFY_CODE_STATUS_SUCCESS",
            Self::Expired => "VERIFY_CODE_STATUS_EXPIRED",
            Self::Invalid => "VERIFY_CODE_STATUS_INVALID",
            Self::Unknown => "VERIFY_CODE_STATUS_UNKNOWN",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "VERIFY_CODE_STATUS_SUCCESS" => Some(Self::Success),
            "VERIFY_CODE_STATUS_EXPIRED" => Some(Self::Expired),
            "VERIFY_CODE_STATUS_INVALID" => Some(Self::Invalid),
            "VERIFY_CODE_STATUS_UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}
include!("email.v1.tonic.rs");
