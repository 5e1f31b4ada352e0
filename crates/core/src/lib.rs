//! Domain types and rules for the guestbook.
//!
//! Zero internal dependencies so the repository layer, the HTTP layer and
//! any future tooling can share the same validation and error vocabulary.

pub mod error;
pub mod guestbook;
pub mod session;
pub mod types;
