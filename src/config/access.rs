use super::*;
use crate::ast::Value;

impl SigilConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// let host: String = config.get("host")?;
    /// let port: u16 = config.get("port")?;
    /// let debug: bool = config.get("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be
    /// converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// if let Ok(Some(api_key)) = config.get_optional::<String>("api_key") {
    ///     println!("API key: {}", api_key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(SigilError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("config.sigil").unwrap();
    /// let timeout = config.get_or("timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the configuration.
    ///
    /// An empty path returns the whole mapping as a `Value::Table`. Dotted
    /// paths walk nested tables segment by segment. The parser itself only
    /// produces flat mappings (blocks merge into their parent), so deep
    /// paths matter for mappings assembled in code.
    pub fn get_value(&self, path: &str) -> Result<Value, SigilError> {
        if path.trim().is_empty() {
            return Ok(Value::Table(self.mapping.clone()));
        }

        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().ok_or_else(|| missing_key(path))?;

        let mut table = &self.mapping;
        for segment in parents {
            table = table
                .get(*segment)
                .and_then(Value::as_table)
                .ok_or_else(|| missing_key(path))?;
        }

        table.get(*last).cloned().ok_or_else(|| missing_key(path))
    }

    /// Get all keys at a given path level.
    ///
    /// An empty path lists the top-level keys.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// for key in config.get_keys("")? {
    ///     println!("{}", key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, SigilError> {
        let value = self.get_value(path)?;
        match value {
            Value::Table(items) => Ok(items.keys().cloned().collect()),
            other => Err(SigilError::TypeError {
                message: format!(
                    "Path '{}' is not a table (found {})",
                    path,
                    other.type_name()
                ),
                hint: Some("Only tables have keys".into()),
                code: Some(410),
            }),
        }
    }

    /// Check if a configuration path exists.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("config.sigil").unwrap();
    /// if config.has("tls_enabled") {
    ///     println!("TLS is configured");
    /// }
    /// ```
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}

fn missing_key(path: &str) -> SigilError {
    SigilError::MissingKey {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}

/// Enhance type errors with line number information from the raw text.
fn enhance_error_with_line_info(e: SigilError, path: &str, raw_content: &str) -> SigilError {
    match e {
        SigilError::TypeError { message, hint, code } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                SigilError::TypeError {
                    message: format!("{} (line {})\n  → {}", message, line, snippet),
                    hint,
                    code,
                }
            } else {
                SigilError::TypeError { message, hint, code }
            }
        }
        other => other,
    }
}
