//! Mail module.
//!
//! Holds the per-request field mapping, the sender configuration and the
//! service that turns one into an outbound email.

mod email_address;
mod mailer;
mod message;
mod request;
mod sender;
mod service;

pub mod errors;

pub use email_address::{EmailAddress, EmailAddressError};
pub use mailer::Mailer;
pub use message::MailMessage;
pub use request::{EmailRequest, FieldNames};
pub use sender::{MailAccount, SenderConfig};
pub use service::{MailService, MailServiceImpl};
