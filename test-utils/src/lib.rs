//! The single source of truth for all data paths.

mod asset;
pub mod taxi;
