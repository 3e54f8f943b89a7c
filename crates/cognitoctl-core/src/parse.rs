//! Value parsers for structured command-line parameters
//!
//! These are plain `fn(&str) -> Result<T, String>` so clap can use them as
//! `value_parser`s and report the message against the offending flag.

use std::collections::BTreeMap;
use std::fs;

use serde::de::DeserializeOwned;

use crate::model::{Attribute, Blob};

/// Read file input, supporting @filename notation
fn read_input(input: &str) -> Result<String, String> {
    if let Some(filename) = input.strip_prefix('@') {
        fs::read_to_string(filename).map_err(|e| format!("Failed to read file {filename}: {e}"))
    } else {
        Ok(input.to_string())
    }
}

/// Parse inline JSON or an `@file` reference into `T`.
pub fn json_value<T: DeserializeOwned>(input: &str) -> Result<T, String> {
    let text = read_input(input)?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid JSON: {e}"))
}

/// Parse a JSON object of string values, e.g. Lambda client metadata.
pub fn string_map(input: &str) -> Result<BTreeMap<String, String>, String> {
    json_value(input)
}

/// Parse `Name=Value`, or a JSON `{"Name": .., "Value": ..}` object.
pub fn attribute(input: &str) -> Result<Attribute, String> {
    if input.trim_start().starts_with('{') {
        return json_value(input);
    }

    match input.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(Attribute::new(name, value)),
        _ => Err(format!("expected Name=Value, got '{input}'")),
    }
}

/// Read a file and carry its bytes as base64.
pub fn blob_file(path: &str) -> Result<Blob, String> {
    let path = path.strip_prefix('@').unwrap_or(path);
    fs::read(path)
        .map(|bytes| Blob::from_bytes(&bytes))
        .map_err(|e| format!("Failed to read file {path}: {e}"))
}
