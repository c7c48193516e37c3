use once_cell::sync::Lazy;
use regex::Regex;

static DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(def (\w+) (.+?)\);").unwrap());
static EXPR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*:=\s*\{(.*?)\};?").unwrap());
static KV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*:=\s*(.+?);").unwrap());

/// What one trimmed line means, decided by first matching pattern.
///
/// The expression pattern is tried before the plain assignment pattern:
/// both match a braced payload, and the expression rule must win.
#[derive(Debug, PartialEq)]
pub(super) enum LineKind<'a> {
    /// `begin`: start collecting a nested block.
    BlockOpen,
    /// `end`: close the currently collecting block.
    BlockClose,
    /// `(def NAME EXPR);`
    Def { name: &'a str, expr: &'a str },
    /// `NAME := { EXPR };`
    Expr { key: &'a str, expr: &'a str },
    /// `NAME := VALUE;`
    Assign { key: &'a str, raw: &'a str },
    /// Matches no rule; dropped without a diagnostic.
    Other,
}

pub(super) fn classify(text: &str) -> LineKind<'_> {
    if text == "begin" {
        return LineKind::BlockOpen;
    }
    if text == "end" {
        return LineKind::BlockClose;
    }
    if let Some(caps) = DEF_RE.captures(text) {
        let (_, [name, expr]) = caps.extract();
        return LineKind::Def { name, expr };
    }
    if let Some(caps) = EXPR_RE.captures(text) {
        let (_, [key, expr]) = caps.extract();
        return LineKind::Expr { key, expr };
    }
    if let Some(caps) = KV_RE.captures(text) {
        let (_, [key, raw]) = caps.extract();
        return LineKind::Assign { key, raw };
    }
    LineKind::Other
}
