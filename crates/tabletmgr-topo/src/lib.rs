//! # tabletmgr-topo
//!
//! Coordination store implementations for tabletmgr. Supports two modes:
//!
//! - **memory**: In-process store using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//!
//! The backend is selected at runtime based on configuration. The crate also
//! provides [`TopoNodeDirectory`], which resolves tablet records kept in the
//! store.

pub mod directory;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use directory::TopoNodeDirectory;
pub use provider::TopoManager;
