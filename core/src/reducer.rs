//! View state and the pure transitions over it.
//!
//! # Design
//! `TodoState` is everything a view needs to render. It changes only through
//! `TodoState::reduce`, which takes an `Action` describing either a local
//! edit (typing, starting or cancelling an edit) or the result of a finished
//! request. No I/O happens here; `TodoStore` decides which actions to feed.

use std::fmt;

use crate::error::{ApiError, FailureKind};
use crate::types::{TodoId, TodoItem};

/// The single item currently being edited, with its unsaved title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: TodoId,
    pub draft: String,
}

/// A synchronization operation, carried by in-flight tickets and failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update(TodoId),
    Delete(TodoId),
}

impl Operation {
    /// The todo this operation targets, if any.
    pub fn target(&self) -> Option<&TodoId> {
        match self {
            Operation::Load | Operation::Create => None,
            Operation::Update(id) | Operation::Delete(id) => Some(id),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Load => f.write_str("load"),
            Operation::Create => f.write_str("create"),
            Operation::Update(id) => write!(f, "update {id}"),
            Operation::Delete(id) => write!(f, "delete {id}"),
        }
    }
}

/// The most recent failed operation, kept so the view can show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub operation: Operation,
    pub error: ApiError,
}

impl Failure {
    pub fn kind(&self) -> FailureKind {
        self.error.kind()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.error)
    }
}

/// Inputs to `TodoState::reduce`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewTitleChanged(String),
    EditStarted { id: TodoId, title: String },
    DraftChanged(String),
    EditCancelled,
    Loaded(Vec<TodoItem>),
    Created(TodoItem),
    /// `id` is the id the update was sent for; `item` is the server's reply.
    Updated { id: TodoId, item: TodoItem },
    Deleted(TodoId),
    Failed(Failure),
}

/// Client-side view of the todo list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<TodoItem>,
    new_title: String,
    editing: Option<EditSession>,
    last_failure: Option<Failure>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded items in server order.
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Text typed for the next item to create.
    pub fn new_title(&self) -> &str {
        &self.new_title
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.as_ref().is_some_and(|e| &e.target == id)
    }

    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::NewTitleChanged(text) => self.new_title = text,
            Action::EditStarted { id, title } => {
                // Last call wins; any previous draft is discarded.
                self.editing = Some(EditSession {
                    target: id,
                    draft: title,
                });
            }
            Action::DraftChanged(text) => {
                if let Some(session) = self.editing.as_mut() {
                    session.draft = text;
                }
            }
            Action::EditCancelled => self.editing = None,
            Action::Loaded(items) => {
                self.todos.clear();
                for item in items {
                    self.upsert(item);
                }
                self.last_failure = None;
            }
            Action::Created(item) => {
                self.upsert(item);
                self.new_title.clear();
                self.last_failure = None;
            }
            Action::Updated { id, item } => {
                if self.is_editing(&id) {
                    self.editing = None;
                }
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                    *slot = item;
                }
                self.last_failure = None;
            }
            Action::Deleted(id) => {
                self.todos.retain(|t| t.id != id);
                if self.is_editing(&id) {
                    self.editing = None;
                }
                self.last_failure = None;
            }
            Action::Failed(failure) => self.last_failure = Some(failure),
        }
    }

    /// Append, or replace in place if the id is already loaded.
    fn upsert(&mut self, item: TodoItem) {
        match self.todos.iter_mut().find(|t| t.id == item.id) {
            Some(slot) => {
                tracing::warn!(id = %item.id, "server returned an id that is already loaded");
                *slot = item;
            }
            None => self.todos.push(item),
        }
    }
}
