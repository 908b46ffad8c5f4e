//! # Redux Todo Testing
//!
//! Testing utilities and helpers for pure reducers.
//!
//! This crate provides:
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Deterministic implementations of Environment traits
//! - Assertion helpers for state transitions
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use redux_todo_testing::ReducerTest;
//!
//! #[test]
//! fn adding_appends() {
//!     ReducerTest::new(TodosReducer)
//!         .given_state(TodoList::new())
//!         .when_action(TodoAction::add_todo_with(&test_ids(), "buy milk"))
//!         .then_state(|todos| assert_eq!(todos.len(), 1))
//!         .run();
//! }
//! ```

use redux_todo_core::environment::{IdGenerator, SequentialIdGenerator};


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, SequentialIdGenerator};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Fresh identifier source seeded at 0
    ///
    /// # Example
    ///
    /// ```
    /// use redux_todo_testing::mocks::test_ids;
    /// use redux_todo_core::IdGenerator;
    ///
    /// let ids = test_ids();
    /// assert_eq!(ids.next_id(), 0);
    /// ```
    #[must_use]
    pub const fn test_ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new()
    }

    /// Identifier source that hands out a fixed script of ids
    ///
    /// Useful when a test needs ids that are not simply `0..n`.
    ///
    /// # Example
    ///
    /// ```
    /// use redux_todo_testing::mocks::ScriptedIdGenerator;
    /// use redux_todo_core::IdGenerator;
    ///
    /// let ids = ScriptedIdGenerator::new([7, 3]);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 3);
    /// assert_eq!(ids.remaining(), 0);
    /// ```
    #[derive(Debug, Default)]
    pub struct ScriptedIdGenerator {
        ids: Mutex<VecDeque<u64>>,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that returns `ids` in order
        #[must_use]
        pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
            Self {
                ids: Mutex::new(ids.into_iter().collect()),
            }
        }

        /// Number of scripted ids not yet handed out
        #[must_use]
        pub fn remaining(&self) -> usize {
            self.ids.lock().map_or(0, |ids| ids.len())
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        /// # Panics
        ///
        /// Panics if the script is exhausted; a test asked for more ids than
        /// it declared.
        #[allow(clippy::panic)] // Test mock
        #[allow(clippy::expect_used)] // Test mock
        fn next_id(&self) -> u64 {
            self.ids
                .lock()
                .expect("id script lock poisoned")
                .pop_front()
                .unwrap_or_else(|| panic!("ScriptedIdGenerator ran out of ids"))
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs anything.
    /// Honours `RUST_LOG`, defaulting to `debug`.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::{ScriptedIdGenerator, test_ids};
pub use reducer_test::{ReducerTest, assertions};
