//! # Redux Todo Runtime
//!
//! Runtime implementation for reducer-driven applications.
//!
//! This crate provides the Store that holds the current state and applies the
//! reducer once per action.
//!
//! ## Core Components
//!
//! - **Store**: Holds the current state and the reducer
//! - **Dispatch**: `send` reduces `(state, action)` into the next state and
//!   replaces the held value in one step
//! - **Reads**: `state` projects from the current value under a read lock
//!
//! ## Example
//!
//! ```ignore
//! use redux_todo_runtime::Store;
//!
//! let store = Store::bootstrap(my_reducer, Action::Init);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use redux_todo_core::{action::Action, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub mod store {
    //! The Store - state container for a single reducer

    use super::{Action, Arc, AtomicU64, Ordering, Reducer, RwLock};
    use std::time::Instant;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    ///
    /// Every `send` runs the reducer on the current state and replaces it with
    /// the result while holding the write lock, so each action is applied
    /// atomically and in the order the lock is acquired. Previous states are
    /// dropped as soon as no reader holds them.
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation (its `State` and `Action` types follow)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::default(), todo_app());
    ///
    /// store.send(add_todo("buy milk")).await;
    /// let count = store.state(|s| s.todos.len()).await;
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: Arc<RwLock<R::State>>,
        reducer: Arc<R>,
        dispatched: Arc<AtomicU64>,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        /// Create a new store with initial state and reducer
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        #[must_use]
        pub fn new(initial_state: R::State, reducer: R) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                dispatched: Arc::new(AtomicU64::new(0)),
            }
        }

        /// Create a store whose initial state is produced by the reducer itself
        ///
        /// The reducer is run once with no prior state and the given bootstrap
        /// action, materialising its default state.
        #[must_use]
        pub fn bootstrap(reducer: R, init: R::Action) -> Self
        where
            R::State: Default,
        {
            tracing::debug!(action = init.action_type(), "Bootstrapping store");
            let initial_state = reducer.reduce_or_init(None, &init);
            Self::new(initial_state, reducer)
        }

        /// Send an action to the store
        ///
        /// Reduces the current state with `action` and replaces it with the
        /// result. Readers never observe a partially applied action.
        pub async fn send(&self, action: R::Action) {
            let action_type = action.action_type();
            let start = Instant::now();

            {
                let mut state = self.state.write().await;
                let next = self.reducer.reduce(&state, &action);
                *state = next;
            }

            let sequence = self.dispatched.fetch_add(1, Ordering::SeqCst) + 1;

            metrics::counter!("store.actions.dispatched", "type" => action_type).increment(1);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            tracing::debug!(action = action_type, sequence, "Action reduced");
        }

        /// Send several actions in order
        pub async fn send_all<I>(&self, actions: I)
        where
            I: IntoIterator<Item = R::Action>,
        {
            for action in actions {
                self.send(action).await;
            }
        }

        /// Read from the current state
        ///
        /// The closure runs under the read lock; return owned data from it.
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone of the current state
        pub async fn snapshot(&self) -> R::State
        where
            R::State: Clone,
        {
            self.state(Clone::clone).await
        }

        /// Number of actions applied since the store was created
        ///
        /// The bootstrap action is not counted.
        #[must_use]
        pub fn dispatched(&self) -> u64 {
            self.dispatched.load(Ordering::SeqCst)
        }

        /// The reducer this store applies
        #[must_use]
        pub fn reducer(&self) -> &R {
            &self.reducer
        }
    }

    impl<R> Clone for Store<R>
    where
        R: Reducer,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                dispatched: Arc::clone(&self.dispatched),
            }
        }
    }

    impl<R> std::fmt::Debug for Store<R>
    where
        R: Reducer,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("dispatched", &self.dispatched.load(Ordering::SeqCst))
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;
