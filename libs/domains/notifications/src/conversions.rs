//! Mapping from `email.v1` request messages to domain payloads.

use crate::kinds::EmailKind;
use crate::models::*;
use protos::email::v1 as pb;

/// A `Send*` request message: names its kind, recipient and payload.
pub trait SendRequest: RequiredFields {
    const KIND: EmailKind;

    fn target_email(&self) -> &str;

    fn into_payload(self) -> EmailPayload;
}

impl RequiredFields for pb::SendActivityAtcJoinRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
            ("activity_time", self.activity_time.as_str()),
            ("facility", self.facility.as_str()),
            ("frequency", self.frequency.as_str()),
        ]
    }
}

impl SendRequest for pb::SendActivityAtcJoinRequest {
    const KIND: EmailKind = EmailKind::ActivityAtcJoin;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ActivityAtcJoinEmail {
            cid: self.cid,
            activity_name: self.activity_name,
            activity_time: self.activity_time,
            facility: self.facility,
            frequency: self.frequency,
        }
        .into()
    }
}

impl RequiredFields for pb::SendActivityAtcLeaveRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
        ]
    }
}

impl SendRequest for pb::SendActivityAtcLeaveRequest {
    const KIND: EmailKind = EmailKind::ActivityAtcLeave;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ActivityAtcLeaveEmail {
            cid: self.cid,
            activity_name: self.activity_name,
        }
        .into()
    }
}

impl RequiredFields for pb::SendActivityPilotJoinRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
            ("activity_time", self.activity_time.as_str()),
            ("callsign", self.callsign.as_str()),
            ("aircraft", self.aircraft.as_str()),
        ]
    }
}

impl SendRequest for pb::SendActivityPilotJoinRequest {
    const KIND: EmailKind = EmailKind::ActivityPilotJoin;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ActivityPilotJoinEmail {
            cid: self.cid,
            activity_name: self.activity_name,
            activity_time: self.activity_time,
            callsign: self.callsign,
            aircraft: self.aircraft,
        }
        .into()
    }
}

impl RequiredFields for pb::SendActivityPilotLeaveRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("activity_name", self.activity_name.as_str()),
        ]
    }
}

impl SendRequest for pb::SendActivityPilotLeaveRequest {
    const KIND: EmailKind = EmailKind::ActivityPilotLeave;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ActivityPilotLeaveEmail {
            cid: self.cid,
            activity_name: self.activity_name,
        }
        .into()
    }
}

impl RequiredFields for pb::SendApplicationPassedRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("operator", self.operator.as_str()),
            ("message", self.message.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendApplicationPassedRequest {
    const KIND: EmailKind = EmailKind::ApplicationPassed;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ApplicationPassedEmail {
            cid: self.cid,
            operator: self.operator,
            message: self.message,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendApplicationProcessingRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendApplicationProcessingRequest {
    const KIND: EmailKind = EmailKind::ApplicationProcessing;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ApplicationProcessingEmail {
            cid: self.cid,
            time: self.time,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendApplicationRejectedRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("operator", self.operator.as_str()),
            ("reason", self.reason.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendApplicationRejectedRequest {
    const KIND: EmailKind = EmailKind::ApplicationRejected;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        ApplicationRejectedEmail {
            cid: self.cid,
            operator: self.operator,
            reason: self.reason,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendAtcRatingChangeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("new_value", self.new_value.as_str()),
            ("old_value", self.old_value.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendAtcRatingChangeRequest {
    const KIND: EmailKind = EmailKind::AtcRatingChange;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        AtcRatingChangeEmail {
            cid: self.cid,
            new_value: self.new_value,
            old_value: self.old_value,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendBannedRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("time", self.time.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendBannedRequest {
    const KIND: EmailKind = EmailKind::Banned;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        BannedEmail {
            cid: self.cid,
            reason: self.reason,
            time: self.time,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendInstructorChangeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("instructor", self.instructor.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendInstructorChangeRequest {
    const KIND: EmailKind = EmailKind::InstructorChange;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        InstructorChangeEmail {
            cid: self.cid,
            reason: self.reason,
            instructor: self.instructor,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendKickedFromServerRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("reason", self.reason.as_str()),
            ("time", self.time.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendKickedFromServerRequest {
    const KIND: EmailKind = EmailKind::KickedFromServer;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        KickedFromServerEmail {
            cid: self.cid,
            reason: self.reason,
            time: self.time,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendPasswordChangeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("ip", self.ip.as_str()),
            ("user_agent", self.user_agent.as_str()),
        ]
    }
}

impl SendRequest for pb::SendPasswordChangeRequest {
    const KIND: EmailKind = EmailKind::PasswordChange;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        PasswordChangeEmail {
            cid: self.cid,
            time: self.time,
            ip: self.ip,
            user_agent: self.user_agent,
        }
        .into()
    }
}

impl RequiredFields for pb::SendPasswordResetRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("time", self.time.as_str()),
            ("ip", self.ip.as_str()),
            ("user_agent", self.user_agent.as_str()),
        ]
    }
}

impl SendRequest for pb::SendPasswordResetRequest {
    const KIND: EmailKind = EmailKind::PasswordReset;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        PasswordResetEmail {
            cid: self.cid,
            time: self.time,
            ip: self.ip,
            user_agent: self.user_agent,
        }
        .into()
    }
}

impl RequiredFields for pb::SendPermissionChangeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("permissions", self.permissions.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendPermissionChangeRequest {
    const KIND: EmailKind = EmailKind::PermissionChange;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        PermissionChangeEmail {
            cid: self.cid,
            permissions: self.permissions,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendRoleChangeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("roles", self.roles.as_str()),
            ("operator", self.operator.as_str()),
            ("contact", self.contact.as_str()),
        ]
    }
}

impl SendRequest for pb::SendRoleChangeRequest {
    const KIND: EmailKind = EmailKind::RoleChange;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        RoleChangeEmail {
            cid: self.cid,
            roles: self.roles,
            operator: self.operator,
            contact: self.contact,
        }
        .into()
    }
}

impl RequiredFields for pb::SendTicketReplyRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
            ("title", self.title.as_str()),
            ("reply", self.reply.as_str()),
        ]
    }
}

impl SendRequest for pb::SendTicketReplyRequest {
    const KIND: EmailKind = EmailKind::TicketReply;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        TicketReplyEmail {
            cid: self.cid,
            title: self.title,
            reply: self.reply,
        }
        .into()
    }
}

impl RequiredFields for pb::SendWelcomeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("target_email", self.target_email.as_str()),
            ("cid", self.cid.as_str()),
        ]
    }
}

impl SendRequest for pb::SendWelcomeRequest {
    const KIND: EmailKind = EmailKind::Welcome;

    fn target_email(&self) -> &str {
        &self.target_email
    }

    fn into_payload(self) -> EmailPayload {
        WelcomeEmail { cid: self.cid }.into()
    }
}

impl RequiredFields for pb::VerifyEmailCodeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("email", self.email.as_str()), ("code", self.code.as_str())]
    }
}

impl RequiredFields for pb::RemoveEmailCodeRequest {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("email", self.email.as_str())]
    }
}
