//! Plain-text rendering of the todo list.
//!
//! A completed todo is marked `[x]`, an active one `[ ]`. The footer lists
//! the filters and brackets the one in effect, which is the one you cannot
//! switch to.

use crate::selectors::visible_todos;
use crate::types::{AppState, TodoItem, TodoList, VisibilityFilter};

/// One todo as a single line
#[must_use]
pub fn render_todo(item: &TodoItem) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{mark}] #{} {}", item.id, item.text)
}

/// Every todo in `todos`, one per line
#[must_use]
pub fn render_todo_list(todos: &TodoList) -> String {
    if todos.is_empty() {
        return "(nothing to show)".to_string();
    }

    todos
        .iter()
        .map(|item| render_todo(item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The filter footer, e.g. `Show: [All], Active, Completed`
#[must_use]
pub fn render_footer(current: VisibilityFilter) -> String {
    let links = VisibilityFilter::ALL
        .into_iter()
        .map(|filter| {
            if filter == current {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Show: {links}")
}

/// The visible todos, a blank line, the item counts and the footer
#[must_use]
pub fn render_app(state: &AppState) -> String {
    format!(
        "{}\n\n{} active, {} completed\n{}",
        render_todo_list(&visible_todos(state)),
        state.todos.active_count(),
        state.todos.completed_count(),
        render_footer(state.visibility_filter),
    )
}
