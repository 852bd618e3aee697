//! Email Address

use std::fmt;

use lettre::message::Mailbox;
use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email \"{address}\" is invalid: {reason}")]
    InvalidEmailAddress {
        /// The rejected input
        address: String,

        /// Why the mail library rejected it
        reason: String,
    },
}

/// A sender or receiver address, optionally with a display name
/// (`Reports <reports@example.com>`).
///
/// Parsed into a [`Mailbox`] up front, so an address accepted here is one the
/// transport can put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress {
    raw: String,
    mailbox: Mailbox,
}

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        let mailbox = trimmed
            .parse::<Mailbox>()
            .map_err(|err| InvalidEmailAddress {
                address: trimmed.to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            raw: trimmed.to_string(),
            mailbox,
        })
    }

    /// The address as it was configured
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed mailbox
    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.raw
    }
}
