//! Named text-edit rules — the patcher vocabulary.
//!
//! Every file transformation rnforge performs is declared as an [`EditRule`]:
//! a name (for diagnostics), plus one [`EditAction`]. Rules are pure
//! `&str -> String` functions; all I/O lives behind the application ports.
//!
//! ## Invariants
//!
//! - A rule never produces a partial write: either its precondition (anchor
//!   or pattern) matches and the whole action applies, or the text is
//!   returned untouched with a [`RuleOutcome::NoMatch`].
//! - Insertions carry a `guard` substring; when the guard is already present
//!   the rule reports [`RuleOutcome::AlreadyApplied`] instead of inserting
//!   twice. Re-running a rule set on an already-patched file is a no-op.
//! - Region replacements use non-greedy patterns so the smallest enclosing
//!   region matches, never trailing sibling content.

use std::path::PathBuf;

use regex::Regex;

use crate::domain::error::DomainError;

// ── Actions ───────────────────────────────────────────────────────────────────

/// One concrete text transformation.
#[derive(Debug, Clone)]
pub enum EditAction {
    /// Insert `content` immediately before the first line containing `anchor`
    /// (exact substring match). `guard` short-circuits when the insertion is
    /// already present.
    InsertBefore {
        anchor: String,
        content: String,
        guard: String,
    },

    /// Insert `content` immediately after the first line containing `anchor`.
    /// Same guard semantics as [`EditAction::InsertBefore`].
    InsertAfter {
        anchor: String,
        content: String,
        guard: String,
    },

    /// Delete every region matched by `pattern`.
    Strip { pattern: Regex },

    /// Replace every region matched by `pattern` with `replacement`.
    Replace { pattern: Regex, replacement: String },
}

/// What happened when a rule ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule matched and the text changed.
    Applied,
    /// The guard substring was present; nothing to do.
    AlreadyApplied,
    /// Anchor or pattern not found; text untouched.
    NoMatch,
}

/// A named, independently testable transformation.
#[derive(Debug, Clone)]
pub struct EditRule {
    /// Diagnostic label, e.g. `"strip CameraView export"`.
    pub name: &'static str,
    pub action: EditAction,
}

impl EditRule {
    /// Insertion rule. `content` must end with a newline so the anchor line
    /// keeps its own line after the splice.
    pub fn insert_before(
        name: &'static str,
        anchor: impl Into<String>,
        content: impl Into<String>,
        guard: impl Into<String>,
    ) -> Self {
        Self {
            name,
            action: EditAction::InsertBefore {
                anchor: anchor.into(),
                content: content.into(),
                guard: guard.into(),
            },
        }
    }

    /// Insertion rule placing `content` on the line(s) below the anchor line.
    pub fn insert_after(
        name: &'static str,
        anchor: impl Into<String>,
        content: impl Into<String>,
        guard: impl Into<String>,
    ) -> Self {
        Self {
            name,
            action: EditAction::InsertAfter {
                anchor: anchor.into(),
                content: content.into(),
                guard: guard.into(),
            },
        }
    }

    /// Removal rule over a regex region.
    pub fn strip(name: &'static str, pattern: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name,
            action: EditAction::Strip {
                pattern: compile(name, pattern)?,
            },
        })
    }

    /// Replacement rule over a regex region.
    pub fn replace(
        name: &'static str,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name,
            action: EditAction::Replace {
                pattern: compile(name, pattern)?,
                replacement: replacement.into(),
            },
        })
    }

    /// Run the rule against `text`, returning the (possibly new) text and
    /// what happened. Never partially applies.
    pub fn apply(&self, text: &str) -> (String, RuleOutcome) {
        match &self.action {
            EditAction::InsertBefore {
                anchor,
                content,
                guard,
            } => {
                if text.contains(guard.as_str()) {
                    return (text.to_owned(), RuleOutcome::AlreadyApplied);
                }
                let Some(pos) = text.find(anchor.as_str()) else {
                    return (text.to_owned(), RuleOutcome::NoMatch);
                };
                // Rewind to the start of the anchor's line so the insertion
                // lands on its own line(s) above it.
                let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
                let mut out = String::with_capacity(text.len() + content.len());
                out.push_str(&text[..line_start]);
                out.push_str(content);
                out.push_str(&text[line_start..]);
                (out, RuleOutcome::Applied)
            }

            EditAction::InsertAfter {
                anchor,
                content,
                guard,
            } => {
                if text.contains(guard.as_str()) {
                    return (text.to_owned(), RuleOutcome::AlreadyApplied);
                }
                let Some(pos) = text.find(anchor.as_str()) else {
                    return (text.to_owned(), RuleOutcome::NoMatch);
                };
                // Skip forward to just past the anchor's line ending.
                let line_end = text[pos..]
                    .find('\n')
                    .map_or(text.len(), |i| pos + i + 1);
                let mut out = String::with_capacity(text.len() + content.len());
                out.push_str(&text[..line_end]);
                out.push_str(content);
                out.push_str(&text[line_end..]);
                (out, RuleOutcome::Applied)
            }

            EditAction::Strip { pattern } => {
                let out = pattern.replace_all(text, "");
                if out == text {
                    (text.to_owned(), RuleOutcome::NoMatch)
                } else {
                    (out.into_owned(), RuleOutcome::Applied)
                }
            }

            EditAction::Replace {
                pattern,
                replacement,
            } => {
                let out = pattern.replace_all(text, replacement.as_str());
                if out == text {
                    (text.to_owned(), RuleOutcome::NoMatch)
                } else {
                    (out.into_owned(), RuleOutcome::Applied)
                }
            }
        }
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
        rule,
        reason: e.to_string(),
    })
}

// ── File-level edits ──────────────────────────────────────────────────────────

/// An ordered list of rules targeting one project-relative file.
#[derive(Debug, Clone)]
pub struct FileEdit {
    /// Human-readable name of the file's role, e.g. `"hooks barrel"`.
    pub label: &'static str,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub rules: Vec<EditRule>,
}

/// Result of running every rule of a [`FileEdit`] over one file's text.
#[derive(Debug, Clone)]
pub struct FileEditResult {
    /// Final text after all rules ran.
    pub text: String,
    /// Rules that matched and changed the text.
    pub applied: usize,
    /// Rules short-circuited by their guard.
    pub already_applied: usize,
    /// Names of rules whose anchor/pattern was absent.
    pub missed: Vec<&'static str>,
}

impl FileEditResult {
    /// True when a write-back is warranted.
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

impl FileEdit {
    pub fn new(label: &'static str, path: impl Into<PathBuf>, rules: Vec<EditRule>) -> Self {
        Self {
            label,
            path: path.into(),
            rules,
        }
    }

    /// Run all rules in order. Pure; the caller decides whether to write.
    pub fn apply(&self, original: &str) -> FileEditResult {
        let mut text = original.to_owned();
        let mut applied = 0;
        let mut already_applied = 0;
        let mut missed = Vec::new();

        for rule in &self.rules {
            let (next, outcome) = rule.apply(&text);
            match outcome {
                RuleOutcome::Applied => applied += 1,
                RuleOutcome::AlreadyApplied => already_applied += 1,
                RuleOutcome::NoMatch => missed.push(rule.name),
            }
            text = next;
        }

        FileEditResult {
            text,
            applied,
            already_applied,
            missed,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
