//! Reducers for the todo application.
//!
//! Three independent reducers, each owning one slice of state:
//!
//! - [`TodoItemReducer`]: a single item
//! - [`TodosReducer`]: the ordered list, delegating per-item work
//! - [`VisibilityFilterReducer`]: the current filter
//!
//! [`todo_app`] scopes the list and filter reducers onto [`AppState`] and
//! combines them. Both run on every action; each treats actions it does not
//! handle as a no-op and returns its slice unchanged.

use crate::actions::TodoAction;
use crate::types::{AppState, TodoItem, TodoList, VisibilityFilter};
use redux_todo_core::{
    Action, CombinedReducer, combine_reducers, reducer::Reducer, scope_reducer,
};
use std::sync::Arc;

/// Reducer for a single todo item
///
/// Unlike the slice reducers this one starts from an optional item: `AddTodo`
/// creates an item out of nothing, everything else needs one to work on.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoItemReducer;

impl TodoItemReducer {
    /// Compute the next item
    ///
    /// - `AddTodo` builds a fresh, not yet completed item (any `state` is ignored)
    /// - `ToggleTodo` for this item's id returns a copy with `completed` negated
    /// - anything else, including `ToggleTodo` for another id, returns `state`
    ///   itself
    ///
    /// # Panics
    ///
    /// Panics if `state` is `None` and the action is not `AddTodo`. Only
    /// `AddTodo` can produce an item from nothing; any other call without an
    /// item is a caller bug.
    #[must_use]
    #[allow(clippy::panic)] // Precondition violation is fatal
    pub fn reduce(&self, state: Option<&Arc<TodoItem>>, action: &TodoAction) -> Arc<TodoItem> {
        if let TodoAction::AddTodo { id, text } = action {
            tracing::trace!(action = action.action_type(), %id, "Creating todo item");
            return Arc::new(TodoItem::new(*id, text.clone()));
        }

        let Some(item) = state else {
            panic!(
                "todo item reducer called without an item for {}",
                action.action_type()
            );
        };

        match action {
            TodoAction::ToggleTodo { id } if item.id == *id => {
                tracing::trace!(action = action.action_type(), %id, "Toggling todo item");
                Arc::new(item.toggled())
            }
            TodoAction::AddTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::SetVisibilityFilter { .. }
            | TodoAction::Init
            | TodoAction::Unknown => Arc::clone(item),
        }
    }
}

/// Reducer for the ordered todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer {
    item: TodoItemReducer,
}

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            item: TodoItemReducer,
        }
    }
}

impl Reducer for TodosReducer {
    type State = TodoList;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo { id, .. } => {
                tracing::trace!(action = action.action_type(), %id, "Appending todo");
                state.appended(self.item.reduce(None, action))
            }
            TodoAction::ToggleTodo { id } => {
                tracing::trace!(action = action.action_type(), %id, "Toggling todo");
                state
                    .iter()
                    .map(|item| self.item.reduce(Some(item), action))
                    .collect()
            }
            TodoAction::SetVisibilityFilter { .. } | TodoAction::Init | TodoAction::Unknown => {
                tracing::trace!(action = action.action_type(), "Todos unchanged");
                state.clone()
            }
        }
    }
}

/// Reducer for the visibility filter
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::SetVisibilityFilter { filter } => {
                tracing::trace!(action = action.action_type(), %filter, "Setting visibility filter");
                *filter
            }
            TodoAction::AddTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::Init
            | TodoAction::Unknown => {
                tracing::trace!(action = action.action_type(), "Visibility filter unchanged");
                *state
            }
        }
    }
}

/// The application reducer over [`AppState`]
pub type AppReducer = CombinedReducer<AppState, TodoAction>;

/// Build the application reducer
///
/// `todos` is handled by [`TodosReducer`] and `visibility_filter` by
/// [`VisibilityFilterReducer`]; neither sees the other's slice.
///
/// # Example
///
/// ```
/// use redux_todo::{TodoAction, todo_app};
/// use redux_todo_core::Reducer;
///
/// let state = todo_app().reduce_or_init(None, &TodoAction::Init);
/// assert!(state.todos.is_empty());
/// ```
#[must_use]
pub fn todo_app() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            TodosReducer::new(),
            |state: &AppState| &state.todos,
            |state: &mut AppState, todos| state.todos = todos,
        )),
        Box::new(scope_reducer(
            VisibilityFilterReducer,
            |state: &AppState| &state.visibility_filter,
            |state: &mut AppState, filter| state.visibility_filter = filter,
        )),
    ])
}

/// The state every store starts from
///
/// Produced by running [`todo_app`] once on no state with
/// [`TodoAction::Init`]: no todos, showing all.
#[must_use]
pub fn initial_state() -> AppState {
    todo_app().reduce_or_init(None, &TodoAction::Init)
}
