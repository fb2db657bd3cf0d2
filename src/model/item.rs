// File: ./src/model/item.rs
// Record types mirroring the generator's JSON schema
use serde::Serialize;

/// One generated crossword, as delivered under the envelope's `data` key.
///
/// Serialization emits every field under its canonical key in declaration
/// order; the optional images are omitted entirely when unset. Decoding
/// lives in the adapter so failures can name the offending field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub size: i64,
    pub difficulty: String,
    pub theme: String,
    /// Row-major cell grid; `None` marks a block square.
    pub grid: Vec<Vec<Option<String>>>,
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
    /// Expected to equal `across.len() + down.len()`; not enforced here.
    pub word_count: i64,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_image: Option<ImageRef>,
}

/// A single clue, shared shape between the `across` and `down` lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClueEntry {
    /// Position label in the grid; not unique across the two lists.
    pub number: i64,
    pub clue: String,
    pub answer: String,
    /// Expected to equal `answer.len()`; not enforced here.
    pub length: i64,
}

/// A rendered image of the grid, fetchable until `expires`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub image_name: String,
    pub format: String,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
    /// Unix-epoch seconds after which the download URL stops working.
    pub expires: i64,
}

/// Envelope wrapped around every generator response.
///
/// `error` is present (as `null`) even on success; `data` carries the
/// puzzle on success; `code` only appears on some error responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub error: Option<String>,
    pub data: Option<Puzzle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}
