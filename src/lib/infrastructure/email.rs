//! Outbound email

pub mod smtp;
mod well_known;

pub use well_known::{Security, WellKnownService};
