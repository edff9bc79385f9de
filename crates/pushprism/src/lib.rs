//! Top-level facade crate for pushPrism.
//!
//! Re-exports core types and the dispatch library so users can depend on a single crate.

pub mod core {
    pub use pushprism_core::*;
}

pub mod dispatch {
    pub use pushprism_dispatch::*;
}
