//! Typed payloads for every notification kind.
//!
//! Field names are what templates reference, e.g. `{{activity_name}}`.

use crate::kinds::EmailKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Explicit list of fields that must be non-empty before a message is accepted.
pub trait RequiredFields {
    /// `(field name, value)` pairs, in declaration order.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Name of the first required field that is empty.
    fn first_missing(&self) -> Option<&'static str> {
        self.required_fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
    }
}

/// Verification code mail. Built by the code manager, not by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerifyCodeEmail {
    /// Control id, zero-padded to four digits.
    pub cid: String,
    pub code: String,
    /// Validity in whole minutes.
    pub expired: String,
    /// Absolute expiry, RFC 3339.
    pub expired_at: String,
}

/// Sent after registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeEmail {
    pub cid: String,
}

/// Controller rating moved from `old_value` to `new_value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AtcRatingChangeEmail {
    pub cid: String,
    pub new_value: String,
    pub old_value: String,
    pub operator: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KickedFromServerEmail {
    pub cid: String,
    pub reason: String,
    pub time: String,
    pub operator: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordChangeEmail {
    pub cid: String,
    pub time: String,
    pub ip: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordResetEmail {
    pub cid: String,
    pub time: String,
    pub ip: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationPassedEmail {
    pub cid: String,
    pub operator: String,
    pub message: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationRejectedEmail {
    pub cid: String,
    pub operator: String,
    pub reason: String,
    pub contact: String,
}

/// Interview invitation for a pending controller application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationProcessingEmail {
    pub cid: String,
    pub time: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketReplyEmail {
    pub cid: String,
    pub title: String,
    pub reply: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityPilotJoinEmail {
    pub cid: String,
    pub activity_name: String,
    pub activity_time: String,
    pub callsign: String,
    pub aircraft: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityPilotLeaveEmail {
    pub cid: String,
    pub activity_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityAtcJoinEmail {
    pub cid: String,
    pub activity_name: String,
    pub activity_time: String,
    pub facility: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityAtcLeaveEmail {
    pub cid: String,
    pub activity_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InstructorChangeEmail {
    pub cid: String,
    pub reason: String,
    pub instructor: String,
    pub operator: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BannedEmail {
    pub cid: String,
    pub reason: String,
    pub time: String,
    pub operator: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeEmail {
    pub cid: String,
    pub roles: String,
    pub operator: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionChangeEmail {
    pub cid: String,
    pub permissions: String,
    pub operator: String,
    pub contact: String,
}

impl RequiredFields for VerifyCodeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("code", self.code.as_str()),
            ("expired", self.expired.as_str()),
            ("expired_at", self.expired_at.as_str()),
        ]
    }
}

impl RequiredFields for WelcomeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("cid", self.cid.as_str())]
    }
}

impl RequiredFields for AtcRatingChangeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("new_value", self.new_value.as_str()),
            ("old_value", self.old_value.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for KickedFromServerEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("time", self.time.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for PasswordChangeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("ip", self.ip.as_str()),
            ("user_agent", self.user_agent.as_str()),
        ]
    }
}

impl RequiredFields for PasswordResetEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("ip", self.ip.as_str()),
            ("user_agent", self.user_agent.as_str()),
        ]
    }
}

impl RequiredFields for ApplicationPassedEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("operator", self.operator.as_str()),
            ("message", self.message.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for ApplicationRejectedEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("operator", self.operator.as_str()),
            ("reason", self.reason.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for ApplicationProcessingEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for TicketReplyEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("title", self.title.as_str()),
            ("reply", self.reply.as_str()),
        ]
    }
}

impl RequiredFields for ActivityPilotJoinEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
            ("activity_time", self.activity_time.as_str()),
            ("callsign", self.callsign.as_str()),
            ("aircraft", self.aircraft.as_str()),
        ]
    }
}

impl RequiredFields for ActivityPilotLeaveEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("cid", self.cid.as_str()), ("activity_name", self.activity_name.as_str())]
    }
}

impl RequiredFields for ActivityAtcJoinEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
            ("activity_time", self.activity_time.as_str()),
            ("facility", self.facility.as_str()),
            ("frequency", self.frequency.as_str()),
        ]
    }
}

impl RequiredFields for ActivityAtcLeaveEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("cid", self.cid.as_str()), ("activity_name", self.activity_name.as_str())]
    }
}

impl RequiredFields for InstructorChangeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("instructor", self.instructor.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for BannedEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("time", self.time.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for RoleChangeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("roles", self.roles.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl RequiredFields for PermissionChangeEmail {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cid", self.cid.as_str()),
            ("permissions", self.permissions.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

/// Payload for one send, tagged by kind.
///
/// Serializes as the inner struct so templates see its fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmailPayload {
    VerifyCode(VerifyCodeEmail),
    Welcome(WelcomeEmail),
    AtcRatingChange(AtcRatingChangeEmail),
    KickedFromServer(KickedFromServerEmail),
    PasswordChange(PasswordChangeEmail),
    PasswordReset(PasswordResetEmail),
    ApplicationPassed(ApplicationPassedEmail),
    ApplicationRejected(ApplicationRejectedEmail),
    ApplicationProcessing(ApplicationProcessingEmail),
    TicketReply(TicketReplyEmail),
    ActivityPilotJoin(ActivityPilotJoinEmail),
    ActivityPilotLeave(ActivityPilotLeaveEmail),
    ActivityAtcJoin(ActivityAtcJoinEmail),
    ActivityAtcLeave(ActivityAtcLeaveEmail),
    InstructorChange(InstructorChangeEmail),
    Banned(BannedEmail),
    RoleChange(RoleChangeEmail),
    PermissionChange(PermissionChangeEmail),
}

impl EmailPayload {
    /// The kind this payload was built for.
    pub fn kind(&self) -> EmailKind {
        match self {
            Self::VerifyCode(_) => EmailKind::VerifyCode,
            Self::Welcome(_) => EmailKind::Welcome,
            Self::AtcRatingChange(_) => EmailKind::AtcRatingChange,
            Self::KickedFromServer(_) => EmailKind::KickedFromServer,
            Self::PasswordChange(_) => EmailKind::PasswordChange,
            Self::PasswordReset(_) => EmailKind::PasswordReset,
            Self::ApplicationPassed(_) => EmailKind::ApplicationPassed,
            Self::ApplicationRejected(_) => EmailKind::ApplicationRejected,
            Self::ApplicationProcessing(_) => EmailKind::ApplicationProcessing,
            Self::TicketReply(_) => EmailKind::TicketReply,
            Self::ActivityPilotJoin(_) => EmailKind::ActivityPilotJoin,
            Self::ActivityPilotLeave(_) => EmailKind::ActivityPilotLeave,
            Self::ActivityAtcJoin(_) => EmailKind::ActivityAtcJoin,
            Self::ActivityAtcLeave(_) => EmailKind::ActivityAtcLeave,
            Self::InstructorChange(_) => EmailKind::InstructorChange,
            Self::Banned(_) => EmailKind::Banned,
            Self::RoleChange(_) => EmailKind::RoleChange,
            Self::PermissionChange(_) => EmailKind::PermissionChange,
        }
    }

    fn fields(&self) -> &dyn RequiredFields {
        match self {
            Self::VerifyCode(p) => p,
            Self::Welcome(p) => p,
            Self::AtcRatingChange(p) => p,
            Self::KickedFromServer(p) => p,
            Self::PasswordChange(p) => p,
            Self::PasswordReset(p) => p,
            Self::ApplicationPassed(p) => p,
            Self::ApplicationRejected(p) => p,
            Self::ApplicationProcessing(p) => p,
            Self::TicketReply(p) => p,
            Self::ActivityPilotJoin(p) => p,
            Self::ActivityPilotLeave(p) => p,
            Self::ActivityAtcJoin(p) => p,
            Self::ActivityAtcLeave(p) => p,
            Self::InstructorChange(p) => p,
            Self::Banned(p) => p,
            Self::RoleChange(p) => p,
            Self::PermissionChange(p) => p,
        }
    }
}

impl RequiredFields for EmailPayload {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        self.fields().required_fields()
    }
}

impl From<VerifyCodeEmail> for EmailPayload {
    fn from(payload: VerifyCodeEmail) -> Self {
        Self::VerifyCode(payload)
    }
}

impl From<WelcomeEmail> for EmailPayload {
    fn from(payload: WelcomeEmail) -> Self {
        Self::Welcome(payload)
    }
}

impl From<AtcRatingChangeEmail> for EmailPayload {
    fn from(payload: AtcRatingChangeEmail) -> Self {
        Self::AtcRatingChange(payload)
    }
}

impl From<KickedFromServerEmail> for EmailPayload {
    fn from(payload: KickedFromServerEmail) -> Self {
        Self::KickedFromServer(payload)
    }
}

impl From<PasswordChangeEmail> for EmailPayload {
    fn from(payload: PasswordChangeEmail) -> Self {
        Self::PasswordChange(payload)
    }
}

impl From<PasswordResetEmail> for EmailPayload {
    fn from(payload: PasswordResetEmail) -> Self {
        Self::PasswordReset(payload)
    }
}

impl From<ApplicationPassedEmail> for EmailPayload {
    fn from(payload: ApplicationPassedEmail) -> Self {
        Self::ApplicationPassed(payload)
    }
}

impl From<ApplicationRejectedEmail> for EmailPayload {
    fn from(payload: ApplicationRejectedEmail) -> Self {
        Self::ApplicationRejected(payload)
    }
}

impl From<ApplicationProcessingEmail> for EmailPayload {
    fn from(payload: ApplicationProcessingEmail) -> Self {
        Self::ApplicationProcessing(payload)
    }
}

impl From<TicketReplyEmail> for EmailPayload {
    fn from(payload: TicketReplyEmail) -> Self {
        Self::TicketReply(payload)
    }
}

impl From<ActivityPilotJoinEmail> for EmailPayload {
    fn from(payload: ActivityPilotJoinEmail) -> Self {
        Self::ActivityPilotJoin(payload)
    }
}

impl From<ActivityPilotLeaveEmail> for EmailPayload {
    fn from(payload: ActivityPilotLeaveEmail) -> Self {
        Self::ActivityPilotLeave(payload)
    }
}

impl From<ActivityAtcJoinEmail> for EmailPayload {
    fn from(payload: ActivityAtcJoinEmail) -> Self {
        Self::ActivityAtcJoin(payload)
    }
}

impl From<ActivityAtcLeaveEmail> for EmailPayload {
    fn from(payload: ActivityAtcLeaveEmail) -> Self {
        Self::ActivityAtcLeave(payload)
    }
}

impl From<InstructorChangeEmail> for EmailPayload {
    fn from(payload: InstructorChangeEmail) -> Self {
        Self::InstructorChange(payload)
    }
}

impl From<BannedEmail> for EmailPayload {
    fn from(payload: BannedEmail) -> Self {
        Self::Banned(payload)
    }
}

impl From<RoleChangeEmail> for EmailPayload {
    fn from(payload: RoleChangeEmail) -> Self {
        Self::RoleChange(payload)
    }
}

impl From<PermissionChangeEmail> for EmailPayload {
    fn from(payload: PermissionChangeEmail) -> Self {
        Self::PermissionChange(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_reports_its_kind() {
        let payload = EmailPayload::from(TicketReplyEmail {
            cid: "1001".into(),
            title: "Radar outage".into(),
            reply: "Fixed".into(),
        });
        assert_eq!(payload.kind(), EmailKind::TicketReply);
        assert_eq!(payload.first_missing(), None);
    }

    #[test]
    fn test_first_missing_follows_declaration_order() {
        let payload = BannedEmail {
            cid: "1001".into(),
            reason: String::new(),
            time: "2025-01-01".into(),
            operator: String::new(),
            contact: "staff@example.com".into(),
        };
        assert_eq!(payload.first_missing(), Some("reason"));
    }

    #[test]
    fn test_serializes_without_tag() {
        let payload = EmailPayload::from(WelcomeEmail { cid: "0042".into() });
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "cid": "0042" })
        );
    }
}
