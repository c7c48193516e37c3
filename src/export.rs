// Author: Dustin Pilgrim
// License: MIT

use std::fs;

use crate::ast::Mapping;
use crate::error::SigilError;

/// Export a parsed mapping to pretty-printed JSON.
///
/// Converts all SIGIL values to their JSON equivalents:
/// - Strings, integers, booleans → direct mapping
/// - Floats → JSON numbers (JSON renders them fine, unlike the TOML subset)
/// - Tables → nested JSON objects, insertion order preserved
///
/// # Examples
/// ```
/// use sigil_cfg::{export, parser};
///
/// let parsed = parser::parse_str("port := 8080;");
/// let json = export::to_json(&parsed.mapping)?;
/// assert!(json.contains("\"port\": 8080"));
/// # Ok::<(), sigil_cfg::SigilError>(())
/// ```
pub fn to_json(mapping: &Mapping) -> Result<String, SigilError> {
    serde_json::to_string_pretty(mapping).map_err(|e| SigilError::ExportError {
        message: format!("Failed to serialize mapping: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Export a SIGIL file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
/// Parse diagnostics are dropped here; use
/// [`SigilConfig`](crate::SigilConfig) when they matter.
///
/// # Errors
/// Returns `FileError` if the file cannot be read, `ExportError` if
/// serialization fails.
pub fn export_sigil_file(path: &str) -> Result<String, SigilError> {
    let input = fs::read_to_string(path).map_err(|e| SigilError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: None,
        code: Some(301),
    })?;

    let parsed = crate::parser::parse_str(&input);
    to_json(&parsed.mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use crate::parser::parse_str;
    use std::io::Write;

    #[test]
    fn test_export_keeps_insertion_order() {
        let input = r#"
zeta := 1;
alpha := 2;
"#;

        let json = to_json(&parse_str(input).mapping).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_export_types_and_nesting() {
        let mut service = Mapping::new();
        service.insert("host".to_string(), Value::Str("127.0.0.1".to_string()));

        let mut mapping = Mapping::new();
        mapping.insert("active".to_string(), Value::Bool(true));
        mapping.insert("port".to_string(), Value::Int(9090));
        mapping.insert("ratio".to_string(), Value::Float(2.5));
        mapping.insert("service".to_string(), Value::Table(service));

        let json = to_json(&mapping).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["active"], true);
        assert_eq!(v["port"], 9090);
        assert_eq!(v["ratio"], 2.5);
        assert_eq!(v["service"]["host"], "127.0.0.1");
    }

    #[test]
    fn test_export_file_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "name := 'exported';").expect("Failed to write temp file");
        writeln!(file, "count := {{ 4 4 + }};").expect("Failed to write temp file");

        let json = export_sigil_file(file.path().to_str().unwrap())
            .expect("Failed to export file");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["name"], "exported");
        assert_eq!(v["count"], 8);
    }

    #[test]
    fn test_export_missing_file_is_a_file_error() {
        let err = export_sigil_file("/nonexistent/path/settings.sigil").unwrap_err();
        assert!(matches!(err, SigilError::FileError { .. }));
    }
}
