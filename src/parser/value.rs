use crate::ast::Value;

/// Coerce a plain assignment's right-hand side by literal inspection.
///
/// Precedence: booleans, then single-quoted strings, then digit runs;
/// anything else is kept verbatim as a string.
pub(super) fn coerce_scalar(raw: &str) -> Value {
    let text = raw.trim();
    if text == "true" {
        return Value::Bool(true);
    }
    if text == "false" {
        return Value::Bool(false);
    }
    if text.starts_with('\'') && text.ends_with('\'') {
        return Value::Str(text.trim_matches('\'').to_string());
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        // Digit runs beyond i64 stay strings rather than faulting.
        if let Ok(n) = text.parse::<i64>() {
            return Value::Int(n);
        }
    }
    Value::Str(text.to_string())
}
