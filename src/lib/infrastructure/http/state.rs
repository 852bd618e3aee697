//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::mail::MailService;

/// Global application state
pub struct AppState<S: MailService> {
    /// The only path mail requests are accepted on
    pub endpoint_path: Arc<str>,

    /// Maximum accepted request body size in bytes
    pub body_limit: usize,

    /// Mail service
    pub mail: Arc<S>,
}

impl<S: MailService> AppState<S> {
    /// Create a new application state
    pub fn new(endpoint_path: &str, body_limit: usize, mail: S) -> Self {
        Self {
            endpoint_path: Arc::from(endpoint_path),
            body_limit,
            mail: Arc::new(mail),
        }
    }
}

impl<S: MailService> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            endpoint_path: Arc::clone(&self.endpoint_path),
            body_limit: self.body_limit,
            mail: Arc::clone(&self.mail),
        }
    }
}

impl<S: MailService> fmt::Debug for AppState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("endpoint_path", &self.endpoint_path)
            .field("body_limit", &self.body_limit)
            .field("mail", &"MailService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::mail::tests::MockMailService;

#[cfg(test)]
pub fn test_state(mail: Option<MockMailService>) -> AppState<MockMailService> {
    AppState::new("/send", 1024, mail.unwrap_or_default())
}
