//! Mail service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

#[cfg(test)]
use mockall::mock;

use super::{
    errors::DispatchError, EmailRequest, FieldNames, MailMessage, Mailer, SenderConfig,
};

/// Turns an extracted request into exactly one outbound email
#[async_trait]
pub trait MailService: Send + Sync + 'static {
    /// Validates `request` and sends it to the configured receiver.
    ///
    /// # Returns
    /// - [`Ok`] once the transport accepted the message.
    /// - [`Err`] with [`DispatchError::InsufficientData`] if neither the subject nor the body
    ///   field carries a value, or the transport's error otherwise.
    async fn send_mail(&self, request: &EmailRequest) -> Result<(), DispatchError>;
}

#[cfg(test)]
mock! {
    pub MailService {}

    #[async_trait]
    impl MailService for MailService {
        async fn send_mail(&self, request: &EmailRequest) -> Result<(), DispatchError>;
    }
}

/// Mail service implementation
#[derive(Debug)]
pub struct MailServiceImpl<M: Mailer> {
    sender: Arc<SenderConfig>,
    fields: FieldNames,
    mailer: Arc<M>,
}

impl<M: Mailer> MailServiceImpl<M> {
    /// Creates a new mail service.
    pub fn new(sender: Arc<SenderConfig>, fields: FieldNames, mailer: Arc<M>) -> Self {
        Self {
            sender,
            fields,
            mailer,
        }
    }

    fn message(&self, request: &EmailRequest) -> MailMessage {
        MailMessage {
            from: self.sender.sender.clone(),
            to: self.sender.receiver.clone(),
            subject: request.get(&self.fields.subject).unwrap_or_default().to_string(),
            text: request.get(&self.fields.body).unwrap_or_default().to_string(),
        }
    }
}

#[async_trait]
impl<M: Mailer> MailService for MailServiceImpl<M> {
    async fn send_mail(&self, request: &EmailRequest) -> Result<(), DispatchError> {
        if !request.has_content(&self.fields) {
            debug!(fields = request.len(), "request carries neither subject nor body");

            return Err(DispatchError::InsufficientData);
        }

        let message = self.message(request);

        self.mailer.send(&self.sender.account, &message).await?;

        info!(to = %message.to, subject = %message.subject, "email sent");

        Ok(())
    }
}
