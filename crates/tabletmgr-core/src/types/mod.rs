//! Shared domain types: hooks, their results, tablets, and action paths.

pub mod action;
pub mod hook;
pub mod tablet;

pub use action::ActionPath;
pub use hook::{ExitStatus, Hook, HookResult};
pub use tablet::{Tablet, TabletInfo, TabletType};
