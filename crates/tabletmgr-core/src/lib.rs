//! # tabletmgr-core
//!
//! Core crate for tabletmgr. Contains the collaborator traits (node
//! directory, action queue, coordination store), configuration schemas,
//! hook and tablet domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other tabletmgr crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
