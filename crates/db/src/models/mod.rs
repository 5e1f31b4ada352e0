//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus the `Deserialize` request DTOs that feed it.

pub mod entry;
