//! Mail transport seam

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::{errors::MailerError, MailAccount, MailMessage};

/// Something that can deliver a [`MailMessage`]
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send one email on behalf of `account`.
    ///
    /// # Arguments
    /// * `account` - Provider identifier and credentials of the sending mailbox.
    /// * `message` - The addressed message to submit.
    ///
    /// # Returns
    /// A [`Result`] indicating success, or the transport's own error.
    async fn send(&self, account: &MailAccount, message: &MailMessage) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, account: &MailAccount, message: &MailMessage) -> Result<(), MailerError>;
    }
}
