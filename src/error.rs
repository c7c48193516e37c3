use std::fmt;

use serde::Serialize;

/// The main error type for SIGIL evaluation, loading and typed access.
#[derive(Debug, Clone, PartialEq)]
pub enum SigilError {
    /// Raised when a postfix operator pops more operands than the stack holds.
    StackUnderflow {
        token: String,
        expr: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an expression leaves no value on the stack at all.
    EmptyResult {
        expr: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    RemainderByZero {
        expr: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by typed access when a dot path has no entry.
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl SigilError {
    /// Short, prefix-free reason, for embedding inside diagnostics.
    pub(crate) fn brief(&self) -> String {
        match self {
            SigilError::StackUnderflow { token, .. } => {
                format!("stack underflow at '{}'", token)
            }
            SigilError::EmptyResult { .. } => "expression produced no result".into(),
            SigilError::RemainderByZero { .. } => "integer remainder by zero".into(),
            SigilError::FileError { message, .. } => message.clone(),
            SigilError::MissingKey { path, .. } => format!("missing key '{}'", path),
            SigilError::TypeError { message, .. } => message.clone(),
            SigilError::ExportError { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::StackUnderflow { token, expr, hint, code } =>
                write!(f, "[SIGIL] Stack underflow at '{}' in expression '{}'{}{}",
                    token, expr,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::EmptyResult { expr, hint, code } =>
                write!(f, "[SIGIL] Expression '{}' produced no result{}{}",
                    expr,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::RemainderByZero { expr, hint, code } =>
                write!(f, "[SIGIL] Integer remainder by zero in expression '{}'{}{}",
                    expr,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::FileError { message, path, hint, code } =>
                write!(f, "[SIGIL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::MissingKey { path, hint, code } =>
                write!(f, "[SIGIL] Key '{}' not found in configuration{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::TypeError { message, hint, code } =>
                write!(f, "[SIGIL] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::ExportError { message, hint, code } =>
                write!(f, "[SIGIL] Export Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for SigilError {}

/// A recoverable, line-level problem found while parsing or rendering.
///
/// Diagnostics never abort a translation. They accumulate next to the
/// primary result and the caller decides how loud to be about them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line; 0 when the problem is not tied to a line.
    pub line: usize,
    pub message: String,
    /// The offending source text, or the key for rendering problems.
    pub snippet: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>, snippet: impl Into<String>) -> Self {
        Diagnostic {
            line,
            message: message.into(),
            snippet: snippet.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "[SIGIL] {} at line {}: {}", self.message, self.line, self.snippet)
        } else {
            write!(f, "[SIGIL] {}: {}", self.message, self.snippet)
        }
    }
}
