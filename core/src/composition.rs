//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Together they express the usual shape of an application reducer: one
//! reducer per slice, each scoped to its field, all combined into a reducer
//! over the whole state.
//!
//! # Examples
//!
//! ```
//! use redux_todo_core::{Reducer, combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &i32, action: &AppAction) -> i32 {
//!         match action {
//!             AppAction::Increment => state + 1,
//!             AppAction::SetName(_) => *state,
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &String, action: &AppAction) -> String {
//!         match action {
//!             AppAction::SetName(name) => name.clone(),
//!             AppAction::Increment => state.clone(),
//!         }
//!     }
//! }
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer(CountReducer, |s: &AppState| &s.count, |s: &mut AppState, count| s.count = count)),
//!     Box::new(scope_reducer(NameReducer, |s: &AppState| &s.name, |s: &mut AppState, name| s.name = name)),
//! ]);
//!
//! let state = app.reduce(&AppState::default(), &AppAction::Increment);
//! let state = app.reduce(&state, &AppAction::SetName("Alice".to_string()));
//! assert_eq!(state, AppState { count: 1, name: "Alice".to_string() });
//! ```

use crate::reducer::Reducer;

/// A boxed reducer over state `S` and action `A`
pub type BoxedReducer<S, A> = Box<dyn Reducer<State = S, Action = A> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence on every action, whatever its kind. The
/// output of one reducer is the input of the next, so reducers scoped to
/// disjoint slices behave as if each had seen the original state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
///
/// # Examples
///
/// ```
/// use redux_todo_core::Reducer;
/// use redux_todo_core::composition::combine_reducers;
///
/// #[derive(Clone)]
/// struct AppState {
///     counter: i32,
///     logged: bool,
/// }
///
/// enum AppAction {
///     Increment,
///     Log,
/// }
///
/// struct CounterReducer;
/// struct LoggingReducer;
///
/// impl Reducer for CounterReducer {
///     type State = AppState;
///     type Action = AppAction;
///
///     fn reduce(&self, state: &AppState, action: &AppAction) -> AppState {
///         let mut next = state.clone();
///         if matches!(action, AppAction::Increment) {
///             next.counter += 1;
///         }
///         next
///     }
/// }
///
/// impl Reducer for LoggingReducer {
///     type State = AppState;
///     type Action = AppAction;
///
///     fn reduce(&self, state: &AppState, action: &AppAction) -> AppState {
///         let mut next = state.clone();
///         if matches!(action, AppAction::Log) {
///             next.logged = true;
///         }
///         next
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(LoggingReducer)]);
///
/// let state = AppState { counter: 0, logged: false };
/// let state = combined.reduce(&state, &AppAction::Increment);
/// assert_eq!(state.counter, 1);
/// assert!(!state.logged);
/// ```
#[must_use]
pub fn combine_reducers<S, A>(reducers: Vec<BoxedReducer<S, A>>) -> CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    reducers: Vec<BoxedReducer<S, A>>,
}

impl<S, A> CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    /// Number of reducers combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: Clone + 'static,
    A: 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        self.reducers
            .iter()
            .fold(state.clone(), |next, reducer| reducer.reduce(&next, action))
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// The child reducer only ever sees its own slice. The parent state is copied
/// and the slice written back into the copy, so the input is never mutated.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
///
/// # Examples
///
/// ```
/// use redux_todo_core::Reducer;
/// use redux_todo_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
///         match action {
///             CounterAction::Increment => CounterState { count: state.count + 1 },
///             CounterAction::Decrement => CounterState { count: state.count - 1 },
///         }
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(
///     CounterReducer,
///     |app_state: &AppState| &app_state.counter,
///     |app_state: &mut AppState, counter: CounterState| {
///         app_state.counter = counter;
///     },
/// );
///
/// let state = scoped.reduce(&AppState::default(), &CounterAction::Increment);
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn(A)>,
}

impl<S, SubS, A, R> ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    /// The wrapped child reducer
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<S, SubS, A, R> std::fmt::Debug for ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        let sub_state = self.reducer.reduce((self.get_state)(state), action);

        let mut next = state.clone();
        (self.set_state)(&mut next, sub_state);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = i32;
        type Action = TestAction;

        fn reduce(&self, state: &i32, action: &TestAction) -> i32 {
            match action {
                TestAction::Increment => state + 1,
                TestAction::Decrement => state - 1,
                TestAction::SetName(_) => *state,
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = String;
        type Action = TestAction;

        fn reduce(&self, state: &String, action: &TestAction) -> String {
            if let TestAction::SetName(name) = action {
                return name.clone();
            }
            state.clone()
        }
    }

    fn app() -> CombinedReducer<TestState, TestAction> {
        combine_reducers(vec![
            Box::new(scope_reducer(
                CounterReducer,
                |s: &TestState| &s.counter,
                |s: &mut TestState, counter| s.counter = counter,
            )),
            Box::new(scope_reducer(
                NameReducer,
                |s: &TestState| &s.name,
                |s: &mut TestState, name| s.name = name,
            )),
        ])
    }

    #[test]
    fn test_combine_reducers() {
        let combined = app();
        assert_eq!(combined.len(), 2);

        let state = TestState::default();

        let state = combined.reduce(&state, &TestAction::Increment);
        assert_eq!(state.counter, 1);

        let state = combined.reduce(&state, &TestAction::SetName("Alice".to_string()));
        assert_eq!(state.name, "Alice");

        let state = combined.reduce(&state, &TestAction::Decrement);
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    #[test]
    fn test_combine_leaves_input_untouched() {
        let before = TestState {
            counter: 3,
            name: "Bob".to_string(),
        };

        let after = app().reduce(&before, &TestAction::Increment);

        assert_eq!(before.counter, 3);
        assert_eq!(after.counter, 4);
        assert_eq!(after.name, "Bob");
    }

    #[test]
    fn test_empty_combination_is_identity() {
        let combined: CombinedReducer<TestState, TestAction> = combine_reducers(Vec::new());
        assert!(combined.is_empty());

        let state = TestState {
            counter: 7,
            name: "x".to_string(),
        };
        assert_eq!(combined.reduce(&state, &TestAction::Increment), state);
    }

    #[derive(Clone, Default)]
    struct ParentState {
        sub: i32,
        other: String,
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = scope_reducer(
            CounterReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub: i32| {
                parent.sub = sub;
            },
        );

        let state = ParentState {
            sub: 5,
            other: "test".to_string(),
        };

        let state = scoped.reduce(&state, &TestAction::Increment);
        assert_eq!(state.sub, 6);
        assert_eq!(state.other, "test"); // Other state unchanged

        let state = scoped.reduce(&state, &TestAction::Decrement);
        assert_eq!(state.sub, 5);
        assert_eq!(state.other, "test");
    }
}
