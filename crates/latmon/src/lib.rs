//! Top-level facade crate for latmon.
//!
//! Re-exports the core engine and the gateway library so users can depend on a single crate.

pub mod core {
    pub use latmon_core::*;
}

pub mod gateway {
    pub use latmon_gateway::*;
}
