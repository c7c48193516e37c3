// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Mapping, Value};
use crate::error::Diagnostic;

/// The rendered TOML text plus every key the renderer had to skip.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub toml: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Render a mapping as TOML-subset text.
///
/// Entries render in insertion order, depth first:
/// - `Table` → a `[key]` header followed by the table's own entries.
///   Headers are never dotted with ancestor names; a table nested two
///   levels deep still renders under its own bare name.
/// - `Bool` / `Int` → bare `key = value` lines.
/// - `Str` → `key = "text"`, the text verbatim, no escaping.
/// - `Float` → no line at all; the key is reported in a diagnostic.
///
/// Rendering never fails. A mapping holding only floats produces an
/// empty string and one diagnostic per key.
///
/// # Examples
/// ```
/// use sigil_cfg::{emit, parser};
///
/// let parsed = parser::parse_str("retries := 3;");
/// let rendered = emit::render(&parsed.mapping);
/// assert_eq!(rendered.toml, "retries = 3\n");
/// ```
pub fn render(mapping: &Mapping) -> RenderOutcome {
    let mut toml = String::new();
    let mut diagnostics = Vec::new();
    render_entries(mapping, &mut toml, &mut diagnostics);
    RenderOutcome { toml, diagnostics }
}

fn render_entries(mapping: &Mapping, out: &mut String, diagnostics: &mut Vec<Diagnostic>) {
    for (key, value) in mapping {
        match value {
            Value::Table(items) => {
                out.push_str(&format!("[{}]\n", key));
                render_entries(items, out, diagnostics);
            }
            Value::Bool(b) => out.push_str(&format!("{} = {}\n", key, b)),
            Value::Int(i) => out.push_str(&format!("{} = {}\n", key, i)),
            Value::Str(s) => out.push_str(&format!("{} = \"{}\"\n", key, s)),
            Value::Float(_) => diagnostics.push(Diagnostic::new(
                0,
                format!("Unsupported value type for key '{}': float", key),
                key.as_str(),
            )),
        }
    }
}
