//! Email message

use super::EmailAddress;

/// A fully addressed plain-text email, built right before it is sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    /// The sender of the email
    pub from: EmailAddress,

    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub text: String,
}
