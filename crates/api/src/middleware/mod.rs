//! Request extractors.
//!
//! - [`payload::AppJson`] / [`payload::AppPath`] -- JSON body and path
//!   parameters with rejections rendered as [`AppError`](crate::error::AppError).
//! - [`session::VisitorSession`] -- Extracts the visitor's session id from the
//!   `x-session-id` header.

pub mod payload;
pub mod session;
