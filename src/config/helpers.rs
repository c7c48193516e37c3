/// Locate the line where `key` is bound in the raw dialect text.
///
/// Matches `key := ...` assignments and `(def key ...)` definitions. Only
/// the last segment of a dotted path can appear in the text, so that is
/// what gets scanned for. Returns `(0, "<key not found>")` when nothing
/// matches.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let simple_key = key.rsplit('.').next().unwrap_or(key);

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_key = if let Some((head, _)) = trimmed.split_once(":=") {
            head.trim()
        } else if let Some(rest) = trimmed.strip_prefix("(def ") {
            rest.split_whitespace().next().unwrap_or("")
        } else {
            continue;
        };

        if line_key == simple_key {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}
