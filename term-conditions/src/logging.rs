//! Logging utilities and configuration for condition checks.
//!
//! The condition engine itself never logs. Violations are reported by
//! [`Guard`](crate::guard::Guard) through `tracing`, gated by a [`LogConfig`],
//! so a hot success path costs nothing beyond the predicate.

/// Logging configuration for guards.
///
/// This configuration allows fine-grained control over logging behavior
/// to ensure minimal performance impact in production environments.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to emit an event for each violated condition
    pub log_violations: bool,
    /// Maximum length for logged field values (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_violations: true,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            log_violations: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for production with lowest overhead.
    pub fn production() -> Self {
        Self {
            log_violations: false,
            max_field_length: 128,
        }
    }

    /// Creates a configuration that never emits violation events.
    pub fn silent() -> Self {
        Self {
            log_violations: false,
            ..Self::default()
        }
    }
}

/// Emits a debug event for a violated condition if the config allows it.
///
/// The message is truncated to the configured field length and only
/// formatted when the event is actually emitted.
#[macro_export]
macro_rules! log_violation {
    ($config:expr, $guard:expr, $kind:expr, $message:expr) => {
        if $config.log_violations {
            let message: Option<&str> = $message;
            let message = message
                .map(|m| $crate::logging::truncate_field(m, $config.max_field_length))
                .unwrap_or_default();
            tracing::debug!(
                guard.name = %$guard,
                condition.kind = %$kind,
                condition.message = %message,
                "condition violated"
            );
        }
    };
}

/// Truncates a string to the maximum field length if needed.
///
/// The cut never splits a character.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let mut end = max_length;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &value[..end];
        format!("{truncated}...(truncated)")
    }
}

/// Installs a global subscriber that shows guard violations.
///
/// Guards emit their events at `DEBUG` under the `term_conditions` target.
/// A [`LoggingConfig`](setup::LoggingConfig) decides whether that target is
/// let through, and hands guards a matching [`LogConfig`] so they skip
/// formatting events nobody will see.
pub mod setup {
    use super::LogConfig;
    use crate::error::{ConditionError, Result};
    use tracing::Level;

    /// Subscriber settings for an application that uses guards.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Level for everything outside this crate
        pub level: Level,
        /// Level for the `term_conditions` target
        pub conditions_level: Level,
        /// Emit JSON lines instead of the human-readable format
        pub json_format: bool,
        /// Replaces the generated filter directives
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                conditions_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// JSON output with violations hidden.
        pub fn production() -> Self {
            Self {
                level: Level::WARN,
                conditions_level: Level::INFO,
                json_format: true,
                env_filter: None,
            }
        }

        /// Everything at `DEBUG`, human-readable.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                ..Self::default()
            }
        }

        /// JSON output with violations shown.
        pub fn structured() -> Self {
            Self {
                json_format: true,
                ..Self::default()
            }
        }

        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        pub fn with_conditions_level(mut self, level: Level) -> Self {
            self.conditions_level = level;
            self
        }

        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Filter directives, e.g. `info,term_conditions=debug`.
        pub fn env_filter(&self) -> String {
            match self.env_filter {
                Some(ref filter) => filter.clone(),
                None => format!(
                    "{},term_conditions={}",
                    self.level.as_str().to_lowercase(),
                    self.conditions_level.as_str().to_lowercase()
                ),
            }
        }

        /// Whether violation events pass the configured crate level.
        ///
        /// A custom filter override is opaque, so it is assumed to show them.
        pub fn shows_violations(&self) -> bool {
            self.env_filter.is_some() || self.conditions_level >= Level::DEBUG
        }

        /// Guard logging settings consistent with this subscriber.
        pub fn log_config(&self) -> LogConfig {
            LogConfig {
                log_violations: self.shows_violations(),
                ..LogConfig::default()
            }
        }
    }

    /// Installs the global subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured filter. Fails with
    /// [`ConditionError::Configuration`] when a global subscriber is already
    /// installed.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use term_conditions::logging::setup::{init_logging, LoggingConfig};
    /// use term_conditions::prelude::*;
    ///
    /// let config = LoggingConfig::structured();
    /// init_logging(&config)?;
    ///
    /// let orders = Guard::builder("orders")
    ///     .factory(ConditionError::invalid_state)
    ///     .with_log_config(config.log_config())
    ///     .build()?;
    /// # let _ = orders;
    /// # Ok::<(), ConditionError>(())
    /// ```
    pub fn init_logging(config: &LoggingConfig) -> Result<()> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ConditionError::Configuration(format!("logging already initialized: {e}")))
    }
}
