//! pushPrism dispatch library entry.
//!
//! This crate wires the config profile, the transport seam, and the
//! publisher into the glue an embedding service consumes. No network code
//! lives here; transports are injected by the host.

pub mod config;
pub mod publisher;
pub mod transport;
