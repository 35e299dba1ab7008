//! Smocks (workspace facade crate).
//!
//! Re-exports the piece model as `smocks::{core, types}` and hosts the
//! headless drop simulator used by the `smocks` binary.

pub use smocks_core as core;
pub use smocks_types as types;

pub mod config;
pub mod sim;
