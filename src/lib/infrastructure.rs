//! Adapters: the SMTP transport and the HTTP listener.

pub mod email;
pub mod http;
