//! Actions and action constructors.
//!
//! Actions are plain values describing a requested change. Their wire shape is
//! `{"type": "<TAG>", ...fields}`:
//!
//! ```json
//! {"type": "ADD_TODO", "id": 0, "text": "buy milk"}
//! {"type": "TOGGLE_TODO", "id": 0}
//! {"type": "SET_VISIBILITY_FILTER", "filter": "SHOW_ACTIVE"}
//! ```
//!
//! Build actions with [`add_todo`], [`toggle_todo`] and
//! [`set_visibility_filter`] rather than by hand; `add_todo` is the only place
//! new ids come from.

use crate::error::TodoError;
use crate::types::{TodoId, VisibilityFilter};
use redux_todo_core::environment::{IdGenerator, SequentialIdGenerator};
use serde::{Deserialize, Serialize};

/// Process-wide id source used by [`add_todo`]
static NEXT_TODO_ID: SequentialIdGenerator = SequentialIdGenerator::new();

/// Every action the todo reducers understand
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new, not yet completed, todo
    AddTodo {
        /// Identifier of the new todo
        id: TodoId,
        /// What needs doing
        text: String,
    },

    /// Flip `completed` on the todo with this id (no-op if there is none)
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Change which todos the list view shows
    SetVisibilityFilter {
        /// The new filter
        filter: VisibilityFilter,
    },

    /// Bootstrap sentinel used to materialise the initial state
    #[serde(rename = "@@INIT")]
    Init,

    /// Any action kind these reducers do not know
    #[serde(other)]
    Unknown,
}

impl TodoAction {
    /// `AddTodo` with an id drawn from `ids`
    #[must_use]
    pub fn add_todo_with<G>(ids: &G, text: impl Into<String>) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        Self::AddTodo {
            id: TodoId::new(ids.next_id()),
            text: text.into(),
        }
    }

    /// Decode one action from its JSON wire shape
    ///
    /// Unrecognised `type` tags decode to [`TodoAction::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Decode`] if the input is not a JSON object with a
    /// `type` field, or a known action is missing its fields.
    pub fn from_json(json: &str) -> Result<Self, TodoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON array of actions
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Decode`] if any element fails to decode.
    pub fn batch_from_json(json: &str) -> Result<Vec<Self>, TodoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode to the JSON wire shape
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Decode`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, TodoError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl redux_todo_core::Action for TodoAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "ADD_TODO",
            Self::ToggleTodo { .. } => "TOGGLE_TODO",
            Self::SetVisibilityFilter { .. } => "SET_VISIBILITY_FILTER",
            Self::Init => "@@INIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// New todo with the next process-wide id
///
/// Ids start at 0 and increase by one per call, across all threads. `text`
/// is taken as-is; rejecting blank input is up to the caller.
#[must_use]
pub fn add_todo(text: impl Into<String>) -> TodoAction {
    TodoAction::add_todo_with(&NEXT_TODO_ID, text)
}

/// Toggle the todo with `id`
#[must_use]
pub const fn toggle_todo(id: TodoId) -> TodoAction {
    TodoAction::ToggleTodo { id }
}

/// Show only the todos matching `filter`
#[must_use]
pub const fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}
