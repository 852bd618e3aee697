//! SMTP email service implementation

use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::header::ContentType,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::domain::mail::{
    errors::MailerError, EmailAddress, EmailAddressError, MailAccount, MailMessage, Mailer,
    SenderConfig,
};

use super::{Security, WellKnownService};

/// Mail account and SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// Well-known mail service, e.g. `gmail` or `outlook365`
    #[arg(long, env = "MAIL_SERVICE")]
    pub service: Option<String>,

    /// Login of the sending mailbox
    #[arg(long, env = "MAIL_USER")]
    pub login: String,

    /// Password or app token of the sending mailbox
    #[arg(long, env = "MAIL_PASSWORD", hide_env_values = true)]
    pub secret: String,

    /// The `From` address of every email
    #[arg(long, env = "MAIL_SENDER")]
    pub sender: String,

    /// The `To` address of every email
    #[arg(long, env = "MAIL_RECEIVER")]
    pub receiver: String,

    /// SMTP host, overrides the one of `--service`
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP port, overrides the one of `--service`
    #[arg(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// Use STARTTLS instead of implicit TLS
    #[arg(long, env = "SMTP_STARTTLS")]
    pub smtp_starttls: Option<bool>,

    /// Verify the TLS certificate
    #[arg(long, env = "SMTP_VERIFY_TLS", default_value_t = true, action = ArgAction::Set)]
    pub smtp_verify_tls: bool,
}

impl SmtpConfig {
    /// Validates the addresses and splits out the sender configuration
    pub fn sender_config(&self) -> Result<SenderConfig, EmailAddressError> {
        Ok(SenderConfig {
            account: MailAccount {
                service: self.service.clone(),
                login: self.login.clone(),
                secret: self.secret.clone(),
            },
            sender: EmailAddress::new(&self.sender)?,
            receiver: EmailAddress::new(&self.receiver)?,
        })
    }
}

/// Where and how to connect for one send
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relay {
    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: u16,

    /// Connection security
    pub security: Security,
}

/// SMTP mailer.
///
/// A new transport is built for every message; nothing is pooled between requests.
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    host: Option<String>,
    port: Option<u16>,
    starttls: Option<bool>,
    verify_tls: bool,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: &SmtpConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            starttls: config.smtp_starttls,
            verify_tls: config.smtp_verify_tls,
        }
    }

    /// Resolves the relay for `account` from its service name and any explicit overrides
    pub fn relay(&self, account: &MailAccount) -> Result<Relay, MailerError> {
        let service = match &account.service {
            Some(name) => Some(
                WellKnownService::lookup(name)
                    .ok_or_else(|| MailerError::UnknownService(name.clone())),
            ),
            None => None,
        };

        let (host, known) = match (&self.host, service) {
            (Some(host), Some(Ok(service))) => (host.clone(), Some(service)),
            (Some(host), _) => (host.clone(), None),
            (None, Some(service)) => {
                let service = service?;
                (service.host.to_string(), Some(service))
            }
            (None, None) => return Err(MailerError::MissingRelay),
        };

        // An explicit port decides the mode unless STARTTLS is set explicitly too.
        let security = match (self.starttls, self.port, known) {
            (Some(true), _, _) => Security::StartTls,
            (Some(false), _, _) => Security::Implicit,
            (None, Some(465), _) => Security::Implicit,
            (None, Some(_), _) => Security::StartTls,
            (None, None, Some(service)) => service.security,
            (None, None, None) => Security::Implicit,
        };

        let port = self
            .port
            .or(known.map(|service| service.port))
            .unwrap_or(match security {
                Security::Implicit => 465,
                Security::StartTls => 587,
            });

        Ok(Relay {
            host,
            port,
            security,
        })
    }

    /// Builds a transport authenticated as `account`
    pub fn transport(
        &self,
        account: &MailAccount,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let relay = self.relay(account)?;
        debug!(host = %relay.host, port = relay.port, security = ?relay.security, "building SMTP transport");

        let creds = Credentials::new(account.login.clone(), account.secret.clone());

        let parameters = TlsParameters::builder(relay.host.clone())
            .dangerous_accept_invalid_certs(!self.verify_tls)
            .build()?;

        let tls = match relay.security {
            Security::Implicit => Tls::Wrapper(parameters),
            Security::StartTls => Tls::Required(parameters),
        };

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(relay.host)
                .port(relay.port)
                .tls(tls)
                .credentials(creds)
                .build(),
        )
    }
}

/// Converts a [`MailMessage`] into a plain-text lettre [`Message`]
fn build_message(message: &MailMessage) -> Result<Message, MailerError> {
    Ok(Message::builder()
        .from(message.from.mailbox().clone())
        .to(message.to.mailbox().clone())
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.text.clone())?)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, account: &MailAccount, message: &MailMessage) -> Result<(), MailerError> {
        let email = build_message(message)?;

        let response = self.transport(account)?.send(email).await?;
        debug!(code = %response.code(), "SMTP server accepted the message");

        Ok(())
    }
}
