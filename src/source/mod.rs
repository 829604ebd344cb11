//! Card-set source payloads.
//!
//! The remote card set arrives as a Google Spreadsheet "list feed" JSON
//! document; rows carry their cells under `gsx$<column>.$t`. Fetching the
//! document (and deciding what to do when the fetch fails) belongs to the
//! network collaborator; this module only decodes an already-delivered
//! payload. On any decode failure the caller keeps its current deck.

use serde::Deserialize;
use thiserror::Error;

use crate::scheduler::types::CardContent;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("feed decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct FeedDocument {
    feed: Feed,
}

#[derive(Deserialize)]
struct Feed {
    #[serde(default)]
    entry: Vec<FeedEntry>,
}

#[derive(Deserialize)]
struct FeedEntry {
    #[serde(rename = "gsx$front")]
    front: Option<Cell>,
    #[serde(rename = "gsx$back")]
    back: Option<Cell>,
}

#[derive(Deserialize)]
struct Cell {
    #[serde(rename = "$t")]
    text: String,
}

/// Decode a spreadsheet list-feed document into card contents. Rows missing
/// either face, or with an empty one, are skipped with a warning.
pub fn parse_feed(payload: &str) -> Result<Vec<CardContent>, SourceError> {
    let document: FeedDocument = serde_json::from_str(payload)?;

    let mut contents = Vec::with_capacity(document.feed.entry.len());
    for (index, entry) in document.feed.entry.into_iter().enumerate() {
        match (entry.front, entry.back) {
            (Some(front), Some(back))
                if !front.text.trim().is_empty() && !back.text.trim().is_empty() =>
            {
                contents.push(CardContent::new(front.text, back.text));
            }
            _ => tracing::warn!(row = index, "feed row missing a face, skipped"),
        }
    }
    Ok(contents)
}

/// Built-in fallback set, used when no feed is available. Same cards the
/// original device shipped with.
pub fn seed_cards() -> Vec<CardContent> {
    [
        ("riesling", "sweet white, off-dry apricots peaches"),
        ("sancerre", "dry white, light herbal grassy"),
        ("pinot grigio", "dry white, light citrus lemon"),
        ("pinot blanc", "dry white, light grapefruit floral"),
        ("cotes du rhone", "fruity red, strawberry cherry, round"),
        ("cabernet sauvignon", "fruity red, black cherry raspberry, high tannin"),
        ("shiraz", "fruity red, blueberry blackberry, spicy"),
        ("chianti", "savory red, clay cured meats, high tannin"),
        ("pinot noir", "fruity red, strawberry cherry, round"),
        ("merlot", "fruity red, black cherry raspberry, round"),
    ]
    .into_iter()
    .map(|(front, back)| CardContent::new(front, back))
    .collect()
}
