//! Domain logic: what a mail request is and how it becomes an email.

pub mod mail;
