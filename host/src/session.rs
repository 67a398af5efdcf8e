//! Drives a `TodoStore` through a `Transport`, one request per user action.

use todo_core::{ApiError, Outcome, Pending, TodoClient, TodoId, TodoState, TodoStore};

use crate::transport::Transport;

pub struct Session<T> {
    store: TodoStore,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            store: TodoStore::new(client),
            transport,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    /// Initial load of the whole list.
    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let pending = self.store.begin_load();
        self.run(pending)
    }

    pub fn set_new_title(&mut self, text: impl Into<String>) {
        self.store.set_new_title(text);
    }

    /// Create from the pending title. `Ok(None)` if the title is blank.
    pub fn add(&mut self) -> Result<Option<Outcome>, ApiError> {
        match self.store.begin_create()? {
            Some(pending) => self.run(pending).map(Some),
            None => Ok(None),
        }
    }

    pub fn start_editing(&mut self, id: TodoId, title: impl Into<String>) {
        self.store.start_editing(id, title);
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.store.set_draft(text);
    }

    /// Save the open edit. `Ok(None)` if nothing is being edited.
    pub fn save(&mut self) -> Result<Option<Outcome>, ApiError> {
        match self.store.begin_update()? {
            Some(pending) => self.run(pending).map(Some),
            None => Ok(None),
        }
    }

    pub fn cancel_editing(&mut self) {
        self.store.cancel_editing();
    }

    pub fn delete(&mut self, id: TodoId) -> Result<Option<Outcome>, ApiError> {
        match self.store.begin_delete(id) {
            Some(pending) => self.run(pending).map(Some),
            None => Ok(None),
        }
    }

    fn run(&mut self, pending: Pending) -> Result<Outcome, ApiError> {
        let Pending { ticket, request } = pending;
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(&request);
        self.store.complete(ticket, response)
    }
}
