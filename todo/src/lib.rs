//! Todo list state built from pure, composable reducers.
//!
//! The whole application state is one immutable [`AppState`] value. Every
//! change is requested by a [`TodoAction`] and applied by [`todo_app`], which
//! combines three small reducers that each own one slice:
//!
//! - the todo list (append on add, rebuild the matching item on toggle)
//! - a single todo item
//! - the visibility filter
//!
//! What the list view shows is derived with [`select_visible_todos`] and is
//! never stored.
//!
//! # Quick Start
//!
//! ```no_run
//! use redux_todo::{
//!     TodoAction, TodoId, VisibilityFilter, add_todo, set_visibility_filter, todo_app,
//!     toggle_todo, visible_todos,
//! };
//! use redux_todo_runtime::Store;
//!
//! # async fn example() {
//! let store = Store::bootstrap(todo_app(), TodoAction::Init);
//!
//! store.send(add_todo("buy milk")).await;
//! store.send(toggle_todo(TodoId::new(0))).await;
//! store.send(set_visibility_filter(VisibilityFilter::ShowActive)).await;
//!
//! let visible = store.state(visible_todos).await;
//! println!("{} todos to show", visible.len());
//! # }
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod reducer;
pub mod render;
pub mod selectors;
pub mod types;

// Re-export commonly used types
pub use actions::{TodoAction, add_todo, set_visibility_filter, toggle_todo};
pub use config::{AppConfig, OutputFormat};
pub use error::TodoError;
pub use reducer::{
    AppReducer, TodoItemReducer, TodosReducer, VisibilityFilterReducer, initial_state, todo_app,
};
pub use selectors::{select_visible_todos, visible_todos};
pub use types::{AppState, TodoId, TodoItem, TodoList, VisibilityFilter};
