//! Application configuration.

/// Log directive used when neither `RUST_LOG` nor `--log` is given
pub const DEFAULT_LOG_FILTER: &str = "redux_todo=info,redux_todo_runtime=info";

/// How the final state is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The visible todos followed by the filter footer
    #[default]
    Text,
    /// The whole state in its JSON wire shape
    Json,
}

/// Configuration for the todo binary
///
/// # Example
///
/// ```
/// use redux_todo::config::{AppConfig, OutputFormat};
///
/// let config = AppConfig::default()
///     .with_log_filter("redux_todo=debug")
///     .with_output(OutputFormat::Json);
///
/// assert_eq!(config.log_filter, "redux_todo=debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub log_filter: String,
    /// How to print the final state
    pub output: OutputFormat,
}

impl AppConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(log_filter: impl Into<String>, output: OutputFormat) -> Self {
        Self {
            log_filter: log_filter.into(),
            output,
        }
    }

    /// Set the log filter directive
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn builders_override() {
        let config = AppConfig::new("warn", OutputFormat::Text).with_output(OutputFormat::Json);
        assert_eq!(config, AppConfig::new("warn", OutputFormat::Json));
    }
}
