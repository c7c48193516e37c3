// Author: Dustin Pilgrim
// License: MIT

use crate::{SigilError, Value};

impl TryFrom<Value> for String {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            _ => Err(SigilError::TypeError {
                message: format!("Expected string, got {:?}", value),
                hint: Some("Use a quoted value in your config".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            // Only lowercase true/false coerce to booleans at parse time,
            // so `True;` arrives here as a string.
            Value::Str(ref s)
                if s.to_lowercase().starts_with("tru") || s.to_lowercase().starts_with("fal") =>
            {
                Err(SigilError::TypeError {
                    message: format!(
                        "Invalid boolean value '{}'. Did you mean 'true' or 'false'?",
                        s
                    ),
                    hint: Some("Booleans must be lowercase and unquoted".into()),
                    code: Some(404),
                })
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected boolean, got {:?}", value),
                hint: None,
                code: Some(404),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i as f32),
            Value::Float(f) => Ok(f as f32),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Ok(i as i32)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for i32", i),
                        hint: Some("Use a number between -2147483648 and 2147483647".into()),
                        code: Some(405),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => {
                if i >= 0 && i <= u8::MAX as i64 {
                    Ok(i as u8)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u8", i),
                        hint: Some("Use a number between 0 and 255".into()),
                        code: Some(407),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => {
                if i >= 0 && i <= u16::MAX as i64 {
                    Ok(i as u16)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u16", i),
                        hint: Some("Use a number between 0 and 65535".into()),
                        code: Some(403),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => {
                if i >= 0 && i <= u32::MAX as i64 {
                    Ok(i as u32)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u32", i),
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(408),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => {
                if i >= 0 {
                    Ok(i as u64)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u64", i),
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(406),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => usize::try_from(i).map_err(|_| SigilError::TypeError {
                message: format!("Number {} out of range for usize", i),
                hint: Some("Use a positive integer".into()),
                code: Some(409),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                hint: Some("Use a whole number in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl SigilError {
    /// Helper for file-related errors when loading configs.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        SigilError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}
