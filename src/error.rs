//! Error types

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The input was not valid JSON, or held elements that aren't cards.
    #[error("malformed card list: {0}")]
    Json(#[from] serde_json::Error),

    /// A card could not be parsed from its abbreviation.
    #[error("invalid card {0:?}")]
    InvalidCard(String),

    /// A deck operation could not be parsed.
    #[error("invalid operation {0:?}")]
    InvalidOp(String),
}
