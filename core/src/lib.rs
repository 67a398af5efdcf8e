//! Client-side state synchronization for a REST-backed todo list.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps the view state a
//! todo list needs: the loaded items, the text of the next item, and the one
//! item under edit.
//!
//! # Design
//! - `TodoClient` is stateless and maps the four operations onto
//!   `/api/todos` (`GET`, `POST`, `PATCH`, `DELETE`).
//! - `TodoState::reduce` is a pure reducer over `Action`s.
//! - `TodoStore` issues requests as `Pending` values and applies responses in
//!   `complete`. The state only changes once the server has answered.
//! - Failures are returned to the caller, recorded in the state and logged
//!   through `tracing`.

pub mod client;
pub mod error;
pub mod http;
pub mod reducer;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, FailureKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use reducer::{Action, EditSession, Failure, Operation, TodoState};
pub use store::{Outcome, Pending, Ticket, TodoStore};
pub use types::{TitlePayload, TodoId, TodoItem};
