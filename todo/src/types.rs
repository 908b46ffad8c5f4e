//! Domain types for the todo list.
//!
//! State is immutable. Items are shared behind `Arc`, so a transition that
//! leaves an item alone hands back the very same allocation, and callers can
//! tell "untouched" from "rebuilt with equal contents" with [`Arc::ptr_eq`].

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `completed` negated
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Ordered, immutable sequence of todo items
///
/// Insertion order is creation order. Cloning is cheap and shares the
/// underlying allocation; every change builds a new list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Arc<[Arc<TodoItem>]>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Whether both lists are the same allocation
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// New list with `item` in last position
    #[must_use]
    pub fn appended(&self, item: Arc<TodoItem>) -> Self {
        self.iter().cloned().chain(std::iter::once(item)).collect()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates items in creation order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<TodoItem>> {
        self.0.iter()
    }

    /// The items as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<TodoItem>] {
        &self.0
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Arc<TodoItem>> {
        self.iter().find(|item| item.id == id)
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.iter().filter(|item| item.completed).count()
    }

    /// Returns the number of todos still to do
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Smallest id greater than every id in the list (0 when empty)
    ///
    /// `None` when the list holds `u64::MAX`, so no greater id exists.
    #[must_use]
    pub fn next_free_id(&self) -> Option<u64> {
        self.iter()
            .try_fold(0, |next: u64, item| item.id.get().checked_add(1).map(|id| id.max(next)))
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Arc<TodoItem>> for TodoList {
    fn from_iter<I: IntoIterator<Item = Arc<TodoItem>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Arc<TodoItem>;
    type IntoIter = std::slice::Iter<'a, Arc<TodoItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Which todos the list view shows
///
/// On the wire the filter is one of `SHOW_ALL`, `SHOW_ACTIVE` or
/// `SHOW_COMPLETED`. Decoding is lenient: any other string becomes
/// [`VisibilityFilter::ShowAll`] (with a warning), so an unrecognised filter
/// shows everything instead of nothing. Use [`str::parse`] for strict parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    ShowAll,
    /// Todos not yet completed
    ShowActive,
    /// Completed todos
    ShowCompleted,
}

impl VisibilityFilter {
    /// Every filter, in footer order
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Human readable name, as shown in the footer
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowAll => "All",
            Self::ShowActive => "Active",
            Self::ShowCompleted => "Completed",
        }
    }

    /// Whether `item` is visible under this filter
    #[must_use]
    pub const fn shows(self, item: &TodoItem) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !item.completed,
            Self::ShowCompleted => item.completed,
        }
    }

    /// Decode a wire name, falling back to `ShowAll` for anything unrecognised
    #[must_use]
    pub fn from_wire_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(filter = value, "Unrecognised visibility filter, showing all");
            Self::ShowAll
        })
    }
}

impl FromStr for VisibilityFilter {
    type Err = TodoError;

    /// Accepts wire names and footer labels, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| {
                filter.as_str().eq_ignore_ascii_case(s) || filter.label().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| TodoError::UnknownFilter(s.to_string()))
    }
}

impl From<String> for VisibilityFilter {
    fn from(value: String) -> Self {
        Self::from_wire_lenient(&value)
    }
}

impl From<VisibilityFilter> for &'static str {
    fn from(filter: VisibilityFilter) -> Self {
        filter.as_str()
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The whole application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All todos, in creation order
    pub todos: TodoList,
    /// Which todos the list view shows
    pub visibility_filter: VisibilityFilter,
}
