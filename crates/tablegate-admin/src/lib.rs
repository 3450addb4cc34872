//! tablegate-admin
//!
//! In-process implementation of the table administration client. The
//! standalone server uses it as its backend, and tests use it wherever a
//! real cluster would otherwise be required.

mod memory;

pub use memory::{MemoryTableAdmin, MemoryTableHandle};
