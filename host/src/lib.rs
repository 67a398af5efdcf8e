//! Host side of the todo sync core.
//!
//! # Overview
//! `todo-core` only builds requests and applies responses. This crate does
//! the rest: it reads configuration from the environment, executes requests
//! with ureq through the `Transport` trait, and wraps the store in a
//! `Session` that performs one round-trip per user action. The `view`
//! module backs the `todo-host` terminal binary.

pub mod config;
pub mod session;
pub mod transport;
pub mod view;

pub use config::HostConfig;
pub use session::Session;
pub use transport::{Transport, UreqTransport};
