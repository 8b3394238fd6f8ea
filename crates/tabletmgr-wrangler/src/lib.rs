//! Remote hook invocation for tablets.
//!
//! The [`Wrangler`] turns the asynchronous action queue into a blocking
//! call: it queues a hook for a tablet, waits for the agent to finish, reads
//! the reply record the agent left in the coordination store, and cleans it
//! up again.

pub mod hook;
pub mod wrangler;

pub use hook::HOOK_REPLY_NAME;
pub use wrangler::Wrangler;
