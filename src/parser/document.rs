use super::line::{classify, LineKind};
use super::{value, Line};
use crate::ast::{Mapping, Value};
use crate::error::Diagnostic;
use crate::eval::{self, ConstantTable};

/// Parse one frame: the whole document, or one block's buffered lines.
///
/// Each frame owns a fresh constant table and a fresh mapping. A closed
/// block is re-parsed as its own frame and its entries are merged into this
/// frame's mapping, overwriting values on key collision.
pub(super) fn parse_frame(lines: &[Line<'_>], diagnostics: &mut Vec<Diagnostic>) -> Mapping {
    let mut mapping = Mapping::new();
    let mut constants = ConstantTable::new();
    let mut collecting = false;
    let mut block: Vec<Line<'_>> = Vec::new();

    for &line in lines {
        match classify(line.text) {
            // `begin` always re-enters collection mode; an already-open
            // block's buffer is discarded.
            LineKind::BlockOpen => {
                collecting = true;
                block.clear();
            }
            LineKind::BlockClose if collecting => {
                collecting = false;
                let inner = parse_frame(&block, diagnostics);
                for (key, val) in inner {
                    mapping.insert(key, val);
                }
            }
            // Inside an open block nothing else is interpreted here; the
            // recursive frame sees these lines with its own constant table.
            _ if collecting => {
                block.push(line);
            }
            LineKind::Def { name, expr } => match eval::evaluate(expr, &constants) {
                Ok(result) => {
                    constants.insert(name.to_string(), result);
                }
                Err(e) => {
                    diagnostics.push(Diagnostic::new(
                        line.number,
                        format!("Error in constant definition: {}", e.brief()),
                        line.text,
                    ));
                }
            },
            LineKind::Expr { key, expr } => match eval::evaluate(expr, &constants) {
                Ok(result) => {
                    mapping.insert(key.to_string(), Value::from(result));
                }
                Err(e) => {
                    diagnostics.push(Diagnostic::new(
                        line.number,
                        format!("Error in expression: {}", e.brief()),
                        line.text,
                    ));
                }
            },
            LineKind::Assign { key, raw } => {
                mapping.insert(key.to_string(), value::coerce_scalar(raw));
            }
            // A stray `end` outside any block, or a line matching nothing.
            LineKind::BlockClose | LineKind::Other => {}
        }
    }

    // An unterminated block discards its buffer, silently.
    mapping
}
