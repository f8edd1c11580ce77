//! Embedding API
//!
//! A thin adapter over the pipeline for hosts that run Declan inside
//! another program. Each context records the last diagnostic of the most
//! recent execute call; every call is an independent compilation unit.
//!
//! Host-facing value construction mirrors Null/Int/Float/Bool/String via
//! [`crate::Value::null`] and the `From` impls on [`crate::Value`];
//! destruction is `Drop`.

use crate::common::{LogLevel, RunConfig};
use crate::diagnostics::{Diagnostic, SourceFile};

/// Opaque execution context for embedders.
pub struct Context {
    config: RunConfig,
    last_error: Option<Diagnostic>,
}

impl Context {
    /// Create a context with the given verbosity. The level is carried in
    /// the run configuration; installing a matching `tracing` subscriber is
    /// the host's decision.
    pub fn new(log_level: LogLevel) -> Self {
        Self {
            config: RunConfig {
                echo: false,
                log_level,
            },
            last_error: None,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        self.config.log_level
    }

    /// Execute one compilation unit. Returns false if a diagnostic was
    /// raised; retrieve it with [`Context::last_error`].
    pub fn execute(&mut self, source: &str) -> bool {
        self.execute_with(source, false)
    }

    /// Interactive-mode variant of [`Context::execute`]: bound values are
    /// echoed to the primary output.
    pub fn execute_interactive(&mut self, source: &str) -> bool {
        self.execute_with(source, true)
    }

    fn execute_with(&mut self, source: &str, echo: bool) -> bool {
        // Each call is an independent unit; the previous diagnostic is gone
        self.last_error = None;

        let file = SourceFile::new("<embedded>", source);
        let config = RunConfig {
            echo,
            ..self.config
        };
        match crate::run(&file, &config) {
            Ok(result) => {
                tracing::debug!(%result, "embedded execution finished");
                true
            }
            Err(diagnostic) => {
                self.last_error = Some(diagnostic);
                false
            }
        }
    }

    /// The diagnostic recorded by the most recent execute call, if any.
    pub fn last_error(&self) -> Option<&Diagnostic> {
        self.last_error.as_ref()
    }

    /// Rendered message of the last diagnostic.
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(Diagnostic::to_string)
    }
}
