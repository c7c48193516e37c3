use crate::ast::Mapping;
use crate::error::Diagnostic;

mod document;
mod line;
mod value;

/// One trimmed source line plus its 1-based position in the input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub(crate) number: usize,
    pub(crate) text: &'a str,
}

/// The result of parsing one document: the mapping plus every recoverable
/// problem found along the way. Parsing itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub mapping: Mapping,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a whole SIGIL document.
///
/// Blank lines and `#` comments are dropped up front, so they are never
/// buffered into blocks either. Everything else is classified line by
/// line; lines that match no rule are dropped without a diagnostic.
pub fn parse_str(input: &str) -> ParseOutcome {
    let lines: Vec<Line<'_>> = input
        .lines()
        .enumerate()
        .map(|(idx, raw)| Line {
            number: idx + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty() && !line.text.starts_with('#'))
        .collect();

    let mut diagnostics = Vec::new();
    let mapping = document::parse_frame(&lines, &mut diagnostics);

    ParseOutcome {
        mapping,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
