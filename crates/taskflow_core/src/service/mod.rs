//! Composing layer over the stores and the change bus.
//!
//! # Responsibility
//! - Run the mutation pipeline views rely on: store write, derived-count
//!   refresh, change broadcast.
//! - Keep the two stores decoupled; only this layer looks at both.

pub mod workspace;

pub use workspace::Workspace;
