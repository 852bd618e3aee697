//! Sender configuration

use std::fmt;

use super::EmailAddress;

/// The account used to authenticate against the mail provider
#[derive(Clone, PartialEq, Eq)]
pub struct MailAccount {
    /// Well-known provider identifier, e.g. `gmail`
    pub service: Option<String>,

    /// The login of the sending mailbox
    pub login: String,

    /// The password or app token of the sending mailbox
    pub secret: String,
}

impl fmt::Debug for MailAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailAccount")
            .field("service", &self.service)
            .field("login", &self.login)
            .field("secret", &"********")
            .finish()
    }
}

/// Process-wide, read-only description of who sends the mail and to whom.
///
/// Built once at startup and shared by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderConfig {
    /// Provider credentials
    pub account: MailAccount,

    /// The fixed `From` address
    pub sender: EmailAddress,

    /// The fixed `To` address
    pub receiver: EmailAddress,
}

#[cfg(test)]
pub fn test_sender_config() -> SenderConfig {
    SenderConfig {
        account: MailAccount {
            service: Some("gmail".to_string()),
            login: "bridge@example.com".to_string(),
            secret: "app-password".to_string(),
        },
        sender: EmailAddress::new("bridge@example.com").expect("valid sender"),
        receiver: EmailAddress::new("inbox@example.com").expect("valid receiver"),
    }
}
