//! `outboxShell` — compose and send email from the terminal.
//!
//! This crate provides the core library for composing an email (subject,
//! rich-text body, recipients, described attachments), deriving a live
//! preview, and submitting the composition to a backend endpoint as a
//! single multipart request.

pub mod config;
pub mod convert;
pub mod error;
pub mod i18n;
pub mod model;
pub mod submit;
pub mod tui;
