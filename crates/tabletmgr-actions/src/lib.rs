//! Action queue for tablet agents.
//!
//! Actions are JSON nodes written below a tablet record in the coordination
//! store. The tablet's agent picks them up, runs them, writes any reply
//! records, and flips the node to a terminal state. This crate provides:
//! - The action node model and its lifecycle states
//! - A queue that submits actions and waits for them to finish

pub mod node;
pub mod queue;

pub use node::{ActionNode, ActionState};
pub use queue::TopoActionQueue;
