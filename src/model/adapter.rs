// File: ./src/model/adapter.rs
// Handles JSON serialization/deserialization
use crate::datetime;
use crate::errors::{DecodeError, EncodeError};
use crate::model::item::{ApiResponse, ClueEntry, ImageRef, Puzzle};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

const PUZZLE_KEYS: &[&str] = &[
    "size",
    "difficulty",
    "theme",
    "grid",
    "across",
    "down",
    "wordCount",
    "html",
    "image",
    "solutionImage",
];
const CLUE_KEYS: &[&str] = &["number", "clue", "answer", "length"];
const IMAGE_KEYS: &[&str] = &["imageName", "format", "downloadURL", "expires"];
const RESPONSE_KEYS: &[&str] = &["status", "error", "data", "code"];

impl Puzzle {
    /// Decode a puzzle from the JSON text of the envelope's `data` object.
    ///
    /// Unknown keys are ignored and missing keys fall back to the field's
    /// zero value, so newer server-side schema revisions keep decoding.
    /// A wrong-typed value aborts the whole call; no partial puzzle is
    /// ever returned.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value, "$")
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_value(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let object = expect_object(value, path)?;
        trace_unknown_keys(object, PUZZLE_KEYS, path);
        Ok(Self {
            size: int_field(object, "size", path)?,
            difficulty: string_field(object, "difficulty", path)?,
            theme: string_field(object, "theme", path)?,
            grid: grid_field(object, "grid", path)?,
            across: clue_list_field(object, "across", path)?,
            down: clue_list_field(object, "down", path)?,
            word_count: int_field(object, "wordCount", path)?,
            html: string_field(object, "html", path)?,
            image: image_field(object, "image", path)?,
            solution_image: image_field(object, "solutionImage", path)?,
        })
    }
}

impl ClueEntry {
    fn from_value(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let object = expect_object(value, path)?;
        trace_unknown_keys(object, CLUE_KEYS, path);
        Ok(Self {
            number: int_field(object, "number", path)?,
            clue: string_field(object, "clue", path)?,
            answer: string_field(object, "answer", path)?,
            length: int_field(object, "length", path)?,
        })
    }
}

impl ImageRef {
    fn from_value(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let object = expect_object(value, path)?;
        trace_unknown_keys(object, IMAGE_KEYS, path);
        Ok(Self {
            image_name: string_field(object, "imageName", path)?,
            format: string_field(object, "format", path)?,
            download_url: string_field(object, "downloadURL", path)?,
            expires: int_field(object, "expires", path)?,
        })
    }
}

impl ApiResponse {
    /// Decode a full response envelope; the nested puzzle decodes under
    /// the `data` path.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        let object = expect_object(&value, "$")?;
        trace_unknown_keys(object, RESPONSE_KEYS, "$");
        Ok(Self {
            status: string_field(object, "status", "$")?,
            error: optional_string_field(object, "error", "$")?,
            data: match object.get("data") {
                None | Some(Value::Null) => None,
                Some(value) => Some(Puzzle::from_value(value, "$.data")?),
            },
            code: optional_int_field(object, "code", "$")?,
        })
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Read a timestamp-typed field through the tolerant parser.
///
/// The upstream contract does not pin a timestamp encoding, so every
/// date-like field routes through [`datetime::parse_date_time`]; a parse
/// failure is fatal to the decode and names the offending field.
pub fn decode_date_time(value: &Value, path: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    let text = value.as_str().ok_or_else(|| DecodeError::UnexpectedType {
        path: path.to_string(),
        expected: "a date/time string",
    })?;
    datetime::parse_date_time(text).map_err(|source| DecodeError::Timestamp {
        path: path.to_string(),
        source,
    })
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::UnexpectedType {
        path: path.to_string(),
        expected: "an object",
    })
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, DecodeError> {
    value.as_array().ok_or_else(|| DecodeError::UnexpectedType {
        path: path.to_string(),
        expected: "an array",
    })
}

fn trace_unknown_keys(object: &Map<String, Value>, known: &[&str], path: &str) {
    for key in object.keys() {
        if !known.contains(&key.as_str()) {
            log::trace!("ignoring unknown key {key:?} at {path}");
        }
    }
}

// JSON `null` counts as absent everywhere below: scalar fields fall back
// to their zero value, lists to empty, nested objects to unset.

fn int_field(object: &Map<String, Value>, key: &str, path: &str) -> Result<i64, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_i64().ok_or_else(|| DecodeError::UnexpectedType {
            path: join(path, key),
            expected: "an integer",
        }),
    }
}

fn string_field(object: &Map<String, Value>, key: &str, path: &str) -> Result<String, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::UnexpectedType {
                path: join(path, key),
                expected: "a string",
            }),
    }
}

fn optional_int_field(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<i64>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::UnexpectedType {
                path: join(path, key),
                expected: "an integer",
            }),
    }
}

fn optional_string_field(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<String>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|text| Some(text.to_string()))
            .ok_or_else(|| DecodeError::UnexpectedType {
                path: join(path, key),
                expected: "a string",
            }),
    }
}

fn grid_field(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<Vec<Option<String>>>, DecodeError> {
    let Some(value) = object.get(key) else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }
    let rows = expect_array(value, &join(path, key))?;
    let mut grid = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let row_path = format!("{path}.{key}[{row_index}]");
        let cells = expect_array(row, &row_path)?;
        let mut out = Vec::with_capacity(cells.len());
        for (cell_index, cell) in cells.iter().enumerate() {
            match cell {
                Value::Null => out.push(None),
                Value::String(text) => out.push(Some(text.clone())),
                _ => {
                    return Err(DecodeError::UnexpectedType {
                        path: format!("{row_path}[{cell_index}]"),
                        expected: "a string or null",
                    });
                }
            }
        }
        grid.push(out);
    }
    Ok(grid)
}

fn clue_list_field(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<ClueEntry>, DecodeError> {
    let Some(value) = object.get(key) else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }
    let items = expect_array(value, &join(path, key))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ClueEntry::from_value(item, &format!("{path}.{key}[{index}]")))
        .collect()
}

fn image_field(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<ImageRef>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => ImageRef::from_value(value, &join(path, key)).map(Some),
    }
}

fn join(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}
