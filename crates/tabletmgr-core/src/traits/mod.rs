//! Collaborator traits defined in `tabletmgr-core` and implemented by other
//! crates (or by test fakes).

pub mod directory;
pub mod queue;
pub mod store;

pub use directory::NodeDirectory;
pub use queue::ActionQueue;
pub use store::CoordinationStore;
