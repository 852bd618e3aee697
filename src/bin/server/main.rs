#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! HTTP to email bridge

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mail_bridge::{
    domain::mail::{FieldNames, MailServiceImpl},
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::{state::AppState, HttpServer, HttpServerConfig},
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The request fields carrying subject and body
    #[clap(flatten)]
    pub fields: FieldNames,

    /// The mail account and SMTP configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenv {
        debug!("no .env file loaded: {}", e);
    }

    let args = Args::parse();

    let sender = args
        .smtp
        .sender_config()
        .context("invalid sender configuration")?;

    let mailer = SmtpMailer::new(&args.smtp);
    let relay = mailer
        .relay(&sender.account)
        .context("invalid mail service configuration")?;

    info!(
        host = %relay.host,
        port = relay.port,
        endpoint = %args.server.endpoint_path,
        "relaying mail to {}",
        sender.receiver
    );

    let mail = MailServiceImpl::new(Arc::new(sender), args.fields, Arc::new(mailer));
    let state = AppState::new(&args.server.endpoint_path, args.server.body_limit, mail);

    HttpServer::new(&args.server, state).await?.run().await
}
