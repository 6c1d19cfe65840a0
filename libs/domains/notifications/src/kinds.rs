//! The closed set of notification kinds.

use crate::error::NotificationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A notification kind. Each kind is bound to one template and subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    VerifyCode,
    Welcome,
    #[serde(rename = "rating_change")]
    AtcRatingChange,
    KickedFromServer,
    PasswordChange,
    PasswordReset,
    ApplicationPassed,
    ApplicationRejected,
    ApplicationProcessing,
    TicketReply,
    ActivityPilotJoin,
    ActivityPilotLeave,
    ActivityAtcJoin,
    ActivityAtcLeave,
    InstructorChange,
    Banned,
    RoleChange,
    PermissionChange,
}

impl EmailKind {
    pub const ALL: [EmailKind; 18] = [
        EmailKind::VerifyCode,
        EmailKind::Welcome,
        EmailKind::AtcRatingChange,
        EmailKind::KickedFromServer,
        EmailKind::PasswordChange,
        EmailKind::PasswordReset,
        EmailKind::ApplicationPassed,
        EmailKind::ApplicationRejected,
        EmailKind::ApplicationProcessing,
        EmailKind::TicketReply,
        EmailKind::ActivityPilotJoin,
        EmailKind::ActivityPilotLeave,
        EmailKind::ActivityAtcJoin,
        EmailKind::ActivityAtcLeave,
        EmailKind::InstructorChange,
        EmailKind::Banned,
        EmailKind::RoleChange,
        EmailKind::PermissionChange,
    ];

    /// Stable identifier used in config keys, template names and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::VerifyCode => "verify_code",
            Self::Welcome => "welcome",
            Self::AtcRatingChange => "rating_change",
            Self::KickedFromServer => "kicked_from_server",
            Self::PasswordChange => "password_change",
            Self::PasswordReset => "password_reset",
            Self::ApplicationPassed => "application_passed",
            Self::ApplicationRejected => "application_rejected",
            Self::ApplicationProcessing => "application_processing",
            Self::TicketReply => "ticket_reply",
            Self::ActivityPilotJoin => "activity_pilot_join",
            Self::ActivityPilotLeave => "activity_pilot_leave",
            Self::ActivityAtcJoin => "activity_atc_join",
            Self::ActivityAtcLeave => "activity_atc_leave",
            Self::InstructorChange => "instructor_change",
            Self::Banned => "banned",
            Self::RoleChange => "role_change",
            Self::PermissionChange => "permission_change",
        }
    }

    /// Template file name looked up under the template directory.
    pub fn template_file(&self) -> &'static str {
        match self {
            Self::AtcRatingChange => "atc_rating_change.template",
            Self::VerifyCode => "verify_code.template",
            Self::Welcome => "welcome.template",
            Self::KickedFromServer => "kicked_from_server.template",
            Self::PasswordChange => "password_change.template",
            Self::PasswordReset => "password_reset.template",
            Self::ApplicationPassed => "application_passed.template",
            Self::ApplicationRejected => "application_rejected.template",
            Self::ApplicationProcessing => "application_processing.template",
            Self::TicketReply => "ticket_reply.template",
            Self::ActivityPilotJoin => "activity_pilot_join.template",
            Self::ActivityPilotLeave => "activity_pilot_leave.template",
            Self::ActivityAtcJoin => "activity_atc_join.template",
            Self::ActivityAtcLeave => "activity_atc_leave.template",
            Self::InstructorChange => "instructor_change.template",
            Self::Banned => "banned.template",
            Self::RoleChange => "role_change.template",
            Self::PermissionChange => "permission_change.template",
        }
    }

    pub fn default_subject(&self) -> &'static str {
        match self {
            Self::VerifyCode => "Email verification code",
            Self::Welcome => "Welcome aboard",
            Self::AtcRatingChange => "Controller rating changed",
            Self::KickedFromServer => "You have been kicked from the server",
            Self::PasswordChange => "Password changed",
            Self::PasswordReset => "Password reset",
            Self::ApplicationPassed => "Controller application approved",
            Self::ApplicationRejected => "Controller application rejected",
            Self::ApplicationProcessing => "Controller interview scheduled",
            Self::TicketReply => "Your ticket has a reply",
            Self::ActivityPilotJoin | Self::ActivityAtcJoin => "Activity registration confirmed",
            Self::ActivityPilotLeave | Self::ActivityAtcLeave => "Activity registration withdrawn",
            Self::InstructorChange => "Instructor changed",
            Self::Banned => "Your account has been banned",
            Self::RoleChange => "Roles changed",
            Self::PermissionChange => "Permissions changed",
        }
    }

    /// Prefix for per-kind environment overrides, e.g. `TEMPLATE_WELCOME`.
    pub fn env_prefix(&self) -> String {
        format!("TEMPLATE_{}", self.id().to_ascii_uppercase())
    }
}

impl fmt::Display for EmailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EmailKind {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| NotificationError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for kind in EmailKind::ALL {
            assert!(seen.insert(kind.id()), "duplicate id {}", kind.id());
            assert_eq!(kind.id().parse::<EmailKind>().unwrap(), kind);
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn test_serde_uses_ids() {
        for kind in EmailKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.id()));
        }
    }

    #[test]
    fn test_unknown_id() {
        let err = "newsletter".parse::<EmailKind>().unwrap_err();
        assert!(matches!(err, NotificationError::UnknownKind(id) if id == "newsletter"));
    }

    #[test]
    fn test_rating_change_file_differs_from_id() {
        assert_eq!(EmailKind::AtcRatingChange.id(), "rating_change");
        assert_eq!(
            EmailKind::AtcRatingChange.template_file(),
            "atc_rating_change.template"
        );
        assert_eq!(EmailKind::AtcRatingChange.env_prefix(), "TEMPLATE_RATING_CHANGE");
    }
}
