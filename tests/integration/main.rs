//! End-to-end hook execution against the in-memory store and a simulated
//! tablet agent.

mod helpers;
mod hook_test;
mod optional_hook_test;
