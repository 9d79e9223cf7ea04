use std::fmt;

/// One literal edit against the target file.
///
/// `search` and `replacement` are matched byte-for-byte; there is no pattern
/// syntax, no case folding and no whitespace normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    /// Short name used in summaries, e.g. `banner`.
    pub label: String,
    /// Human readable title printed while checking, e.g. `hGB banner removal`.
    pub description: String,
    pub search: String,
    pub replacement: String,
    /// Printed once the edit has been carried out.
    pub applied_message: String,
}

impl PatchSpec {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            label: label.into(),
            applied_message: description.clone(),
            description,
            search: search.into(),
            replacement: replacement.into(),
        }
    }

    pub fn with_applied_message(mut self, message: impl Into<String>) -> Self {
        self.applied_message = message.into();
        self
    }
}

/// Classification of a [`PatchSpec`] against the current file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The search literal is present.
    Applicable,
    /// The search literal is absent but the replacement literal is present.
    AlreadyApplied,
    /// Neither literal is present; the installed version probably differs.
    NotFound,
}

impl PatchOutcome {
    pub fn is_applicable(&self) -> bool {
        matches!(self, PatchOutcome::Applicable)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatchOutcome::Applicable => "applicable",
            PatchOutcome::AlreadyApplied => "already applied",
            PatchOutcome::NotFound => "not found",
        };
        f.write_str(s)
    }
}
