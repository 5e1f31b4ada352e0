//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod entry_repo;
pub mod like_record_repo;

pub use entry_repo::EntryRepo;
pub use like_record_repo::LikeRecordRepo;
