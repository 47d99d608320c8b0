//! Diagnostics collected while generating.
//!
//! [`Diagnostics`] is the single source of truth for whether a run
//! succeeded: there is no separate success flag, a run succeeds when no
//! error-severity diagnostic was recorded. Every recorded diagnostic is
//! also forwarded to `tracing`, so the subscriber installed by the binary
//! decides what reaches the terminal.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A problem that makes the run fail, though generation continues.
    Error,
    /// A problem that doesn't fail the run but should be addressed.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: String,
    /// Optional source location (e.g., "llvm-c/Types.h@61").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a new info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Severity-counting diagnostics tracker for one run.
///
/// Create one per run (or per test case) and pass it by `&mut` to whatever
/// reports problems. Only [`Severity::Error`] entries count towards
/// [`error_count`](Self::error_count).
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    errors: usize,
    warnings: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at the given severity.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        self.push(Diagnostic::new(severity, message));
    }

    /// Record a fully built diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let location = diagnostic.location.as_deref();
        match diagnostic.severity {
            Severity::Error => {
                self.errors += 1;
                tracing::error!(location, "{}", diagnostic.message);
            }
            Severity::Warning => {
                self.warnings += 1;
                tracing::warn!(location, "{}", diagnostic.message);
            }
            Severity::Info => tracing::info!(location, "{}", diagnostic.message),
        }
        self.entries.push(diagnostic);
    }

    /// Add an error diagnostic.
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Severity::Error, message);
    }

    /// Add a warning diagnostic.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.record(Severity::Warning, message);
    }

    /// Add an info diagnostic.
    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Severity::Info, message);
    }

    /// Number of error diagnostics recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of warning diagnostics recorded so far.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// All diagnostics in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity.is_error())
    }

    /// Close the tracker and hand back the final tally.
    pub fn finish(self) -> DiagnosticSummary {
        DiagnosticSummary {
            errors: self.errors,
            warnings: self.warnings,
            diagnostics: self.entries,
        }
    }
}

#[cfg(unix)]
const MAX_EXIT_CODE: usize = 255;
#[cfg(not(unix))]
const MAX_EXIT_CODE: usize = i32::MAX as usize;

/// Final tally of a run, read once the tracker is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticSummary {
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSummary {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Process exit status: the number of errors, clamped to the largest
    /// status the platform reports intact. Unix keeps only the low byte, so
    /// a nonzero count must never wrap to 0.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.errors.min(MAX_EXIT_CODE)).unwrap_or(i32::MAX)
    }
}
