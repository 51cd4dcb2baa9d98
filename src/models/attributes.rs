//! Helpers for reading string-keyed attribute maps

use std::collections::HashMap;

use crate::{
    config::ParsePolicy,
    error::{AppError, AppResult},
};

/// Text value of an attribute; a missing key reads as empty text
pub(crate) fn text(attributes: &HashMap<String, String>, key: &str) -> String {
    attributes.get(key).cloned().unwrap_or_default()
}

/// Integer value of an attribute, with the policy deciding what a bad value becomes
pub(crate) fn integer(
    attributes: &HashMap<String, String>,
    key: &'static str,
    policy: ParsePolicy,
) -> AppResult<i32> {
    let value = text(attributes, key);
    match value.trim().parse::<i32>() {
        Ok(v) => Ok(v),
        Err(e) => match policy {
            ParsePolicy::Strict => Err(AppError::Parse { field: key, value }),
            ParsePolicy::Lenient => {
                tracing::warn!("Failed to convert {} {:?} into integer: {}, using 0", key, value, e);
                Ok(0)
            }
        },
    }
}
