//! Error types for the mail module

use lettre::{error::Error as BuildError, transport::smtp};
use thiserror::Error;
use tracing::debug;

/// Errors raised by a mail transport
#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider identifier is not one of the well-known services
    #[error("unknown mail service \"{0}\"")]
    UnknownService(String),

    /// Neither a provider identifier nor an SMTP host was configured
    #[error("no mail service or SMTP host configured")]
    MissingRelay,

    /// The transport failed while building or submitting the message
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl From<BuildError> for MailerError {
    fn from(err: BuildError) -> Self {
        debug!("lettre::error::Error -> MailerError");

        MailerError::Transport(err.into())
    }
}

impl From<smtp::Error> for MailerError {
    fn from(err: smtp::Error) -> Self {
        debug!("smtp::Error -> MailerError");

        MailerError::Transport(err.into())
    }
}

/// Errors that can occur when dispatching a mail request
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Neither the subject nor the body field carries a value
    #[error("There is not appropriate data for email sending")]
    InsufficientData,

    /// The transport rejected the message
    #[error(transparent)]
    Mailer(#[from] MailerError),
}
