//! Derived views over [`AppState`].
//!
//! Selectors compute read-only values from state; their results are never
//! stored back.

use crate::types::{AppState, TodoList, VisibilityFilter};

/// The todos visible under `filter`, in creation order
///
/// `ShowAll` returns `todos` itself (same allocation). The other filters
/// return a new list holding the matching items, shared with `todos`.
///
/// # Example
///
/// ```
/// use redux_todo::{TodoId, TodoItem, TodoList, VisibilityFilter, select_visible_todos};
///
/// let todos: TodoList = vec![
///     TodoItem::new(TodoId::new(1), "a"),
///     TodoItem::new(TodoId::new(2), "b").toggled(),
/// ]
/// .into_iter()
/// .collect();
///
/// let active = select_visible_todos(&todos, VisibilityFilter::ShowActive);
/// assert_eq!(active.len(), 1);
/// assert_eq!(active.as_slice()[0].text, "a");
/// ```
#[must_use]
pub fn select_visible_todos(todos: &TodoList, filter: VisibilityFilter) -> TodoList {
    match filter {
        VisibilityFilter::ShowAll => todos.clone(),
        VisibilityFilter::ShowActive | VisibilityFilter::ShowCompleted => todos
            .iter()
            .filter(|item| filter.shows(item))
            .cloned()
            .collect(),
    }
}

/// The todos visible under the state's own filter
#[must_use]
pub fn visible_todos(state: &AppState) -> TodoList {
    select_visible_todos(&state.todos, state.visibility_filter)
}
