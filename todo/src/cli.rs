//! Command-line interface for the todo binary.
//!
//! The CLI is a thin view layer: it turns flags into actions and hands them to
//! a store. It is also where user input is validated, since the action
//! constructors accept anything.

use crate::actions::{TodoAction, set_visibility_filter, toggle_todo};
use crate::config::{AppConfig, OutputFormat};
use crate::error::TodoError;
use crate::types::{TodoId, TodoList, VisibilityFilter};
use clap::Parser;
use redux_todo_core::{IdGenerator, SequentialIdGenerator};
use std::collections::HashSet;
use std::path::PathBuf;

/// Drive the todo reducers from the command line
///
/// Actions are applied in this order: the `--actions` file, then every
/// `--add`, then every `--toggle`, then `--filter`.
#[derive(Debug, Parser)]
#[command(name = "redux-todo", version, about)]
pub struct Cli {
    /// Add a todo with this text (repeatable)
    #[arg(short, long = "add", value_name = "TEXT")]
    pub add: Vec<String>,

    /// Toggle the todo with this id (repeatable)
    #[arg(short, long = "toggle", value_name = "ID")]
    pub toggle: Vec<u64>,

    /// Show only todos matching this filter (SHOW_ALL, SHOW_ACTIVE, SHOW_COMPLETED)
    #[arg(short, long, value_name = "FILTER", value_parser = str::parse::<VisibilityFilter>)]
    pub filter: Option<VisibilityFilter>,

    /// Replay a JSON array of wire-format actions first
    #[arg(long, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long, value_name = "DIRECTIVE")]
    pub log: Option<String>,
}

impl Cli {
    /// Configuration implied by the flags
    #[must_use]
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(log) = &self.log {
            config = config.with_log_filter(log.clone());
        }
        if self.json {
            config = config.with_output(OutputFormat::Json);
        }
        config
    }

    /// Actions from the `--actions` file, if any
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Io`] if the file cannot be read,
    /// [`TodoError::Decode`] if it is not a JSON array of actions and
    /// [`TodoError::DuplicateId`] if two of its `ADD_TODO`s share an id.
    pub fn replayed_actions(&self) -> Result<Vec<TodoAction>, TodoError> {
        let Some(path) = &self.actions else {
            return Ok(Vec::new());
        };

        let json = std::fs::read_to_string(path).map_err(|source| TodoError::Io {
            path: path.clone(),
            source,
        })?;

        let actions = check_unique_ids(TodoAction::batch_from_json(&json)?)?;
        tracing::debug!(count = actions.len(), path = %path.display(), "Loaded actions");
        Ok(actions)
    }

    /// Actions for `--add`, `--toggle` and `--filter`, in that order
    ///
    /// New todos draw their ids from `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::BlankText`] if any `--add` text is blank; no ids
    /// are drawn in that case.
    pub fn flag_actions<G>(&self, ids: &G) -> Result<Vec<TodoAction>, TodoError>
    where
        G: IdGenerator + ?Sized,
    {
        let texts = self
            .add
            .iter()
            .map(|text| validate_text(text))
            .collect::<Result<Vec<_>, _>>()?;

        let adds = texts
            .into_iter()
            .map(|text| TodoAction::add_todo_with(ids, text));
        let toggles = self.toggle.iter().map(|&id| toggle_todo(TodoId::new(id)));
        let filter = self.filter.map(set_visibility_filter);

        Ok(adds.chain(toggles).chain(filter).collect())
    }
}

/// Reject replayed actions that would add two todos with the same id
///
/// Replayed `ADD_TODO`s carry their own ids instead of drawing them from a
/// counter, so nothing else keeps them distinct.
///
/// # Errors
///
/// Returns [`TodoError::DuplicateId`] for the first id added twice.
pub fn check_unique_ids(actions: Vec<TodoAction>) -> Result<Vec<TodoAction>, TodoError> {
    let mut seen = HashSet::new();
    for action in &actions {
        if let TodoAction::AddTodo { id, .. } = action {
            if !seen.insert(*id) {
                return Err(TodoError::DuplicateId(*id));
            }
        }
    }
    Ok(actions)
}

/// Id source for new todos, continuing after every id in `todos`
///
/// # Errors
///
/// Returns [`TodoError::IdsExhausted`] if `todos` already holds `u64::MAX`.
pub fn ids_after(todos: &TodoList) -> Result<SequentialIdGenerator, TodoError> {
    let next = todos.next_free_id().ok_or(TodoError::IdsExhausted)?;
    Ok(SequentialIdGenerator::starting_at(next))
}

/// Reject blank todo text, trimming surrounding whitespace otherwise
///
/// # Errors
///
/// Returns [`TodoError::BlankText`] if `text` is empty after trimming.
pub fn validate_text(text: &str) -> Result<&str, TodoError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TodoError::BlankText);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{initial_state, todo_app};
    use crate::types::TodoItem;
    use redux_todo_core::Reducer;
    use redux_todo_testing::test_ids;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("redux-todo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_become_actions_in_order() {
        let cli = parse(&["--filter", "SHOW_ACTIVE", "-a", "one", "--toggle", "0", "-a", "two"]);
        let actions = cli.flag_actions(&test_ids()).unwrap();

        assert_eq!(
            actions,
            vec![
                TodoAction::AddTodo {
                    id: TodoId::new(0),
                    text: "one".to_string()
                },
                TodoAction::AddTodo {
                    id: TodoId::new(1),
                    text: "two".to_string()
                },
                toggle_todo(TodoId::new(0)),
                set_visibility_filter(VisibilityFilter::ShowActive),
            ]
        );
    }

    #[test]
    fn filter_accepts_labels() {
        let cli = parse(&["-f", "completed"]);
        assert_eq!(cli.filter, Some(VisibilityFilter::ShowCompleted));
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = Cli::try_parse_from(["redux-todo", "--filter", "SHOW_SOME"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unknown visibility filter: SHOW_SOME"));
    }

    #[test]
    fn filter_flag_is_not_lenient() {
        for bad in ["", "show", "SHOW_ALL_OF_THEM"] {
            assert!(
                Cli::try_parse_from(["redux-todo", "--filter", bad]).is_err(),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(parse(&["-f", "SHOW_ALL"]).filter, Some(VisibilityFilter::ShowAll));
    }

    #[test]
    fn blank_text_is_rejected_before_drawing_ids() {
        let ids = test_ids();
        let cli = parse(&["-a", "fine", "-a", "   "]);

        assert!(matches!(cli.flag_actions(&ids), Err(TodoError::BlankText)));
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_text("  buy milk ").unwrap(), "buy milk");
        assert!(validate_text("").is_err());
    }

    #[test]
    fn config_from_flags() {
        let cli = parse(&["--json", "--log", "debug"]);
        assert_eq!(cli.config(), AppConfig::new("debug", OutputFormat::Json));

        assert_eq!(parse(&[]).config(), AppConfig::default());
    }

    #[test]
    fn no_actions_file_means_nothing_to_replay() {
        assert!(parse(&[]).replayed_actions().unwrap().is_empty());
    }

    #[test]
    fn actions_file_is_replayed() {
        let path = std::env::temp_dir().join(format!("redux-todo-cli-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"type": "ADD_TODO", "id": 3, "text": "from file"}}, {{"type": "TOGGLE_TODO", "id": 3}}]"#
        )
        .unwrap();

        let cli = parse(&["--actions", path.to_str().unwrap()]);
        let actions = cli.replayed_actions().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            actions,
            vec![
                TodoAction::AddTodo {
                    id: TodoId::new(3),
                    text: "from file".to_string()
                },
                toggle_todo(TodoId::new(3)),
            ]
        );
    }

    #[test]
    fn replayed_duplicate_ids_are_rejected() {
        let path =
            std::env::temp_dir().join(format!("redux-todo-cli-dup-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"type": "ADD_TODO", "id": 0, "text": "a"},
                {"type": "ADD_TODO", "id": 0, "text": "b"},
                {"type": "TOGGLE_TODO", "id": 0}
            ]"#,
        )
        .unwrap();

        let cli = parse(&["--actions", path.to_str().unwrap()]);
        let result = cli.replayed_actions();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(TodoError::DuplicateId(id)) if id == TodoId::new(0)));
    }

    #[test]
    fn unique_ids_pass_through_in_order() {
        let actions = vec![
            TodoAction::AddTodo {
                id: TodoId::new(2),
                text: "a".to_string(),
            },
            toggle_todo(TodoId::new(2)),
            toggle_todo(TodoId::new(2)),
            TodoAction::AddTodo {
                id: TodoId::new(0),
                text: "b".to_string(),
            },
        ];
        assert_eq!(check_unique_ids(actions.clone()).unwrap(), actions);
    }

    #[test]
    fn ids_continue_after_replayed_todos() {
        let todos: TodoList = vec![
            TodoItem::new(TodoId::new(0), "a"),
            TodoItem::new(TodoId::new(7), "b"),
        ]
        .into_iter()
        .collect();

        assert_eq!(ids_after(&todos).unwrap().next_id(), 8);
        assert_eq!(ids_after(&TodoList::new()).unwrap().next_id(), 0);
    }

    #[test]
    fn ids_after_the_last_id_are_exhausted() {
        let actions = TodoAction::batch_from_json(
            r#"[{"type": "ADD_TODO", "id": 18446744073709551615, "text": "x"}]"#,
        )
        .unwrap();
        let app = todo_app();
        let state = actions
            .iter()
            .fold(initial_state(), |state, action| app.reduce(&state, action));

        assert!(matches!(ids_after(&state.todos), Err(TodoError::IdsExhausted)));
    }

    #[test]
    fn missing_actions_file_is_io_error() {
        let cli = parse(&["--actions", "/definitely/not/here.json"]);
        assert!(matches!(cli.replayed_actions(), Err(TodoError::Io { .. })));
    }
}
