//! Request issuers around the pure reducer.
//!
//! # Design
//! Every sync operation is two calls. `begin_*` inspects the state and
//! returns a `Pending` holding the request to send plus a single-use
//! `Ticket`; the host performs the round-trip and passes the response (or
//! its transport error) to `complete`. State changes only in `complete`,
//! so any number of requests may be outstanding and finish in any order.
//!
//! Update and Delete mark their target busy until they complete. A second
//! Update or Delete for a busy id is ignored rather than racing the first.
//! Every ticket must end in `complete` or `abandon`; a dropped ticket keeps
//! its target busy.

use std::collections::HashSet;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::reducer::{Action, Failure, Operation, TodoState};
use crate::types::{TodoId, TodoItem};

/// Single-use handle for an in-flight request.
#[derive(Debug)]
#[must_use = "a ticket must be passed to TodoStore::complete or TodoStore::abandon"]
pub struct Ticket {
    operation: Operation,
}

impl Ticket {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

/// A request the host must execute, and the ticket to complete it with.
#[derive(Debug)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// What a successful operation did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Vec<TodoItem>),
    Created(TodoItem),
    Updated { id: TodoId, item: TodoItem },
    Deleted(TodoId),
}

impl From<Outcome> for Action {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Loaded(items) => Action::Loaded(items),
            Outcome::Created(item) => Action::Created(item),
            Outcome::Updated { id, item } => Action::Updated { id, item },
            Outcome::Deleted(id) => Action::Deleted(id),
        }
    }
}

/// Owns the view state and turns user intents into requests.
#[derive(Debug)]
pub struct TodoStore {
    client: TodoClient,
    state: TodoState,
    busy: HashSet<TodoId>,
    in_flight: usize,
}

impl TodoStore {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: TodoState::new(),
            busy: HashSet::new(),
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Number of requests handed out and not yet completed.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether an update or delete for `id` is outstanding.
    pub fn is_busy(&self, id: &TodoId) -> bool {
        self.busy.contains(id)
    }

    pub fn set_new_title(&mut self, text: impl Into<String>) {
        self.state.reduce(Action::NewTitleChanged(text.into()));
    }

    pub fn start_editing(&mut self, id: TodoId, title: impl Into<String>) {
        self.state.reduce(Action::EditStarted {
            id,
            title: title.into(),
        });
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.reduce(Action::DraftChanged(text.into()));
    }

    pub fn cancel_editing(&mut self) {
        self.state.reduce(Action::EditCancelled);
    }

    pub fn begin_load(&mut self) -> Pending {
        let request = self.client.build_list_todos();
        Pending {
            ticket: self.track(Operation::Load),
            request,
        }
    }

    /// Returns `Ok(None)` when the pending title is blank.
    pub fn begin_create(&mut self) -> Result<Option<Pending>, ApiError> {
        let title = self.state.new_title().trim().to_string();
        if title.is_empty() {
            tracing::debug!("create ignored: blank title");
            return Ok(None);
        }
        let request = match self.client.build_create_todo(&title) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(Operation::Create, e)),
        };
        Ok(Some(Pending {
            ticket: self.track(Operation::Create),
            request,
        }))
    }

    /// Save the current edit session.
    ///
    /// Returns `Ok(None)` with no session or while the target is busy. A
    /// session whose target is no longer loaded is closed and reported as
    /// `ApiError::NotFound` without sending anything.
    pub fn begin_update(&mut self) -> Result<Option<Pending>, ApiError> {
        let Some(session) = self.state.editing().cloned() else {
            tracing::debug!("update ignored: not editing");
            return Ok(None);
        };
        let id = session.target;
        if self.busy.contains(&id) {
            tracing::debug!(%id, "update ignored: request already in flight");
            return Ok(None);
        }
        if !self.state.contains(&id) {
            self.state.reduce(Action::EditCancelled);
            return Err(self.fail(Operation::Update(id), ApiError::NotFound));
        }
        let request = match self.client.build_update_todo(&id, &session.draft) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(Operation::Update(id), e)),
        };
        Ok(Some(Pending {
            ticket: self.track(Operation::Update(id)),
            request,
        }))
    }

    /// Returns `None` while an update or delete for `id` is in flight.
    pub fn begin_delete(&mut self, id: TodoId) -> Option<Pending> {
        if self.busy.contains(&id) {
            tracing::debug!(%id, "delete ignored: request already in flight");
            return None;
        }
        let request = self.client.build_delete_todo(&id);
        Some(Pending {
            ticket: self.track(Operation::Delete(id)),
            request,
        })
    }

    /// Apply the result of the request issued with `ticket`.
    ///
    /// On failure the state is left as it was, apart from recording the
    /// failure, and the error is logged and returned.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    ) -> Result<Outcome, ApiError> {
        let Ticket { operation } = ticket;
        self.release(&operation);

        let parsed = result.and_then(|response| self.parse(&operation, response));
        match parsed {
            Ok(outcome) => {
                tracing::debug!(%operation, "todo sync succeeded");
                self.state.reduce(outcome.clone().into());
                Ok(outcome)
            }
            Err(e) => Err(self.fail(operation, e)),
        }
    }

    /// Give up on a request that was never sent or whose reply will never
    /// be applied. Frees the target without touching the state.
    pub fn abandon(&mut self, ticket: Ticket) {
        let Ticket { operation } = ticket;
        tracing::debug!(%operation, "request abandoned");
        self.release(&operation);
    }

    fn parse(&self, operation: &Operation, response: HttpResponse) -> Result<Outcome, ApiError> {
        match operation {
            Operation::Load => self.client.parse_list_todos(response).map(Outcome::Loaded),
            Operation::Create => self.client.parse_create_todo(response).map(Outcome::Created),
            Operation::Update(id) => self
                .client
                .parse_update_todo(response)
                .map(|item| Outcome::Updated {
                    id: id.clone(),
                    item,
                }),
            Operation::Delete(id) => self
                .client
                .parse_delete_todo(response)
                .map(|()| Outcome::Deleted(id.clone())),
        }
    }

    fn track(&mut self, operation: Operation) -> Ticket {
        if let Some(id) = operation.target() {
            self.busy.insert(id.clone());
        }
        self.in_flight += 1;
        Ticket { operation }
    }

    fn release(&mut self, operation: &Operation) {
        if let Some(id) = operation.target() {
            self.busy.remove(id);
        }
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn fail(&mut self, operation: Operation, error: ApiError) -> ApiError {
        tracing::error!(%operation, kind = ?error.kind(), %error, "todo sync failed");
        self.state.reduce(Action::Failed(Failure {
            operation,
            error: error.clone(),
        }));
        error
    }
}
