//! # Redux Todo Core
//!
//! Core traits for building applications out of pure, composable reducers.
//!
//! This crate provides the abstractions the rest of the workspace is built on:
//! a single piece of application state, a closed set of actions, and reducers
//! that derive the next state from the current one without ever mutating it.
//!
//! ## Core Concepts
//!
//! - **State**: An immutable value describing the whole feature
//! - **Action**: A description of a requested state change, tagged by kind
//! - **Reducer**: Pure function `(&State, &Action) → State`
//! - **Environment**: Capabilities injected into the code that builds actions
//!   (for example an [`environment::IdGenerator`])
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Immutable state, structural sharing for untouched parts
//! - Sub-reducers own one slice each and know nothing about each other
//! - Exhaustive pattern matching instead of string tags
//!
//! ## Example
//!
//! ```
//! use redux_todo_core::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let state = CounterReducer.reduce_or_init(None, &CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Action module - the input type for reducers
///
/// Actions are immutable descriptions of a requested state change. Each
/// action kind has a stable name, used as its wire tag and as the label in
/// logs and metrics.
pub mod action {
    /// Common behaviour of action types
    ///
    /// # Example
    ///
    /// ```
    /// use redux_todo_core::Action;
    ///
    /// enum CounterAction {
    ///     Increment,
    ///     Reset,
    /// }
    ///
    /// impl Action for CounterAction {
    ///     fn action_type(&self) -> &'static str {
    ///         match self {
    ///             Self::Increment => "INCREMENT",
    ///             Self::Reset => "RESET",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(CounterAction::Reset.action_type(), "RESET");
    /// ```
    pub trait Action {
        /// The stable name of this action's kind
        fn action_type(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(&State, &Action) → State`.
///
/// They never mutate their input. A reducer that does not recognise an action
/// returns a value equal to its input (and may return the very same shared
/// allocation when the state is reference counted).
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state slice this reducer owns
    /// - `Action`: The action type this reducer processes
    ///
    /// # Example
    ///
    /// ```
    /// use redux_todo_core::Reducer;
    ///
    /// #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    /// enum Theme {
    ///     #[default]
    ///     Light,
    ///     Dark,
    /// }
    ///
    /// enum ThemeAction {
    ///     Toggle,
    ///     Noop,
    /// }
    ///
    /// struct ThemeReducer;
    ///
    /// impl Reducer for ThemeReducer {
    ///     type State = Theme;
    ///     type Action = ThemeAction;
    ///
    ///     fn reduce(&self, state: &Theme, action: &ThemeAction) -> Theme {
    ///         match action {
    ///             ThemeAction::Toggle if *state == Theme::Light => Theme::Dark,
    ///             ThemeAction::Toggle => Theme::Light,
    ///             ThemeAction::Noop => *state,
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(ThemeReducer.reduce(&Theme::Light, &ThemeAction::Toggle), Theme::Dark);
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// This is a pure function that:
        /// 1. Reads the current state
        /// 2. Applies the action if it is recognised
        /// 3. Returns the next state (the input, unchanged, otherwise)
        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;

        /// Reduce starting from an optional state
        ///
        /// `None` means "no state yet": the reducer's initial state
        /// (`State::default()`) is materialised first and the action is
        /// applied to it. Stores call this once with a bootstrap action.
        fn reduce_or_init(
            &self,
            state: Option<&Self::State>,
            action: &Self::Action,
        ) -> Self::State
        where
            Self::State: Default,
        {
            match state {
                Some(state) => self.reduce(state, action),
                None => self.reduce(&Self::State::default(), action),
            }
        }
    }
}

/// Environment module - capabilities injected into action construction
///
/// Reducers stay pure; anything that needs process-wide state (such as
/// handing out fresh identifiers) lives behind a trait here and is passed
/// explicitly to whoever builds actions.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// `IdGenerator` trait - abstracts identifier allocation for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use redux_todo_core::environment::{IdGenerator, SequentialIdGenerator};
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate the next identifier
        ///
        /// Every call returns a value never returned before by this generator.
        fn next_id(&self) -> u64;
    }

    /// Monotonically increasing identifier source
    ///
    /// Backed by an atomic counter, so allocation is a single indivisible
    /// increment-then-read even with concurrent callers.
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator seeded at 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Create a generator whose first identifier is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// The identifier the next call to [`IdGenerator::next_id`] will return
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::SeqCst)
        }
    }

    impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
        fn next_id(&self) -> u64 {
            (**self).next_id()
        }
    }
}

pub use action::Action;
pub use composition::{CombinedReducer, ScopedReducer, combine_reducers, scope_reducer};
pub use environment::{IdGenerator, SequentialIdGenerator};
pub use reducer::Reducer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        total: i32,
    }

    struct AddReducer;

    impl Reducer for AddReducer {
        type State = Tally;
        type Action = i32;

        fn reduce(&self, state: &Tally, action: &i32) -> Tally {
            Tally {
                total: state.total + action,
            }
        }
    }

    #[test]
    fn reduce_or_init_starts_from_default() {
        let state = AddReducer.reduce_or_init(None, &5);
        assert_eq!(state, Tally { total: 5 });

        let state = AddReducer.reduce_or_init(Some(&state), &2);
        assert_eq!(state, Tally { total: 7 });
    }

    #[test]
    fn sequential_ids_start_at_zero() {
        let ids = SequentialIdGenerator::new();
        let drawn: Vec<u64> = (0..5).map(|_| ids.next_id()).collect();
        assert_eq!(drawn, vec![0, 1, 2, 3, 4]);
        assert_eq!(ids.peek(), 5);
    }

    #[test]
    fn sequential_ids_can_be_seeded() {
        let ids = SequentialIdGenerator::starting_at(41);
        assert_eq!(ids.next_id(), 41);
        assert_eq!(ids.next_id(), 42);
    }

    #[test]
    fn sequential_ids_are_unique_across_threads() {
        let ids = Arc::new(SequentialIdGenerator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} handed out twice");
            }
        }
        assert_eq!(seen.len(), 800);
        assert_eq!(ids.peek(), 800);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn seeded_ids_are_consecutive(start in 0u64..1_000_000, n in 0usize..50) {
                let ids = SequentialIdGenerator::starting_at(start);
                for offset in 0..n as u64 {
                    prop_assert_eq!(ids.next_id(), start + offset);
                }
                prop_assert_eq!(ids.peek(), start + n as u64);
            }

            #[test]
            fn combined_reducers_each_see_the_action(n in 1i32..8, action in -100i32..100) {
                let reducers: Vec<composition::BoxedReducer<Tally, i32>> = (0..n)
                    .map(|_| Box::new(AddReducer) as composition::BoxedReducer<Tally, i32>)
                    .collect();
                let combined = combine_reducers(reducers);

                let state = combined.reduce(&Tally::default(), &action);
                let expected = n * action;
                prop_assert_eq!(state.total, expected);
            }
        }
    }
}
