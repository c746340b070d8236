// src/codec.rs
//! Reads and writes the `data = {...}` file format.
//!
//! The data file is a JavaScript assignment so the web viewer can load it
//! with a plain `<script>` tag. Everything after the prefix is JSON.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::document::HistoryDocument;
use crate::error::{HistoryError, Result};

pub const DEFAULT_PREFIX: &str = "data = ";

/// Converts between file text and [`HistoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    prefix: String,
    pretty: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, false)
    }
}

impl Codec {
    #[must_use]
    pub fn new(prefix: impl Into<String>, pretty: bool) -> Self {
        Self {
            prefix: prefix.into(),
            pretty,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses file text into a document.
    ///
    /// A missing prefix is tolerated. After the JSON body only whitespace
    /// and a single optional `;` may follow.
    ///
    /// # Errors
    /// `Format` if the body is not JSON, `Schema` if it lacks `nodes`/`edges`
    /// or their records lack required fields.
    pub fn decode(&self, raw: &str) -> Result<HistoryDocument> {
        let text = raw.trim_start();
        let body = text.strip_prefix(self.prefix.as_str()).unwrap_or(text);

        let value = parse_body(body)?;
        check_shape(&value)?;

        serde_json::from_value(value).map_err(|e| HistoryError::Schema(e.to_string()))
    }

    /// Serializes a document back into file text, prefix included.
    ///
    /// # Errors
    /// `Format` if serialization fails.
    pub fn encode(&self, document: &HistoryDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
        .map_err(|e| HistoryError::Format(e.to_string()))?;

        Ok(format!("{}{json}", self.prefix))
    }

    /// Reads and decodes the file at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or decoded.
    pub fn read_from(&self, path: &Path) -> Result<HistoryDocument> {
        let raw = fs::read_to_string(path).map_err(|e| HistoryError::io(e, path))?;
        self.decode(&raw)
    }

    /// Encodes and writes `document` to `path`, returning the bytes written.
    ///
    /// # Errors
    /// Returns error if encoding or the write fails.
    pub fn write_to(&self, document: &HistoryDocument, path: &Path) -> Result<usize> {
        let text = self.encode(document)?;
        fs::write(path, &text).map_err(|e| HistoryError::io(e, path))?;
        Ok(text.len())
    }
}

fn parse_body(body: &str) -> Result<Value> {
    let mut stream = serde_json::Deserializer::from_str(body).into_iter::<Value>();
    let value = match stream.next() {
        Some(Ok(v)) => v,
        Some(Err(e)) => return Err(HistoryError::Format(e.to_string())),
        None => return Err(HistoryError::Format("no JSON body after prefix".into())),
    };

    let rest = body[stream.byte_offset()..].trim();
    let rest = rest.strip_prefix(';').unwrap_or(rest).trim();
    if !rest.is_empty() {
        return Err(HistoryError::Format(format!(
            "unexpected trailing content: {}",
            rest.chars().take(40).collect::<String>()
        )));
    }
    Ok(value)
}

fn check_shape(value: &Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Err(HistoryError::Schema("top level is not an object".into()));
    };
    for key in ["nodes", "edges"] {
        match obj.get(key) {
            Some(Value::Array(_)) => {}
            Some(_) => return Err(HistoryError::Schema(format!("`{key}` is not an array"))),
            None => return Err(HistoryError::Schema(format!("missing `{key}`"))),
        }
    }
    Ok(())
}
