#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Forwards HTTP requests on a single endpoint as emails to a fixed receiver

pub mod domain;
pub mod infrastructure;
