pub mod entries;
pub mod sessions;
