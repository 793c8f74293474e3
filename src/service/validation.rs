//! Required-field extraction from JSON request bodies.

use crate::error::AppError;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Text field that must be present and non-empty.
    pub fn required_text(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
        match body.get(field) {
            None | Some(Value::Null) => Err(missing(field)),
            Some(Value::String(s)) if s.is_empty() => Err(missing(field)),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(AppError::BadRequest(format!("{} must be a string", field))),
        }
    }

    /// Amount field: a JSON number greater than zero. Zero counts as missing.
    pub fn required_amount(body: &Map<String, Value>, field: &str) -> Result<f64, AppError> {
        let n = match body.get(field) {
            None | Some(Value::Null) => return Err(missing(field)),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| AppError::BadRequest(format!("{} must be a number", field)))?,
            Some(_) => return Err(AppError::BadRequest(format!("{} must be a number", field))),
        };
        if n == 0.0 {
            return Err(missing(field));
        }
        if n < 0.0 {
            return Err(AppError::BadRequest(format!("{} must be greater than zero", field)));
        }
        Ok(n)
    }
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required", field))
}
