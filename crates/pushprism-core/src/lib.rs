//! pushPrism core: message model, payload builders, and envelope assembly.
//!
//! This crate turns one logical notification into the per-platform JSON
//! payloads a multi-protocol dispatch service expects, wrapped in a single
//! envelope with byte ceilings enforced before anything reaches a transport.
//! It intentionally carries no I/O or runtime dependencies so it can be
//! embedded in servers, CLIs, and tests alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PushPrismError`/`Result`; size
//! overflow is reported, never silently dropped.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod custom;
pub mod envelope;
pub mod error;
pub mod limits;
pub mod message;
pub mod payload;
pub mod platform;
pub mod trim;

pub use envelope::{assemble, assemble_envelope, render_platform, Envelope};
pub use error::{ErrorKind, PushPrismError, Result};
pub use limits::PlatformLimits;
pub use message::{GcmPriority, Message};
pub use platform::{Family, Platform};
