use serde::{Deserialize, Serialize};

/// Query string for the check-word route.
#[derive(Serialize, Debug, Deserialize)]
pub struct WordQuery {
    pub word: String,
}

/// Request payload for a score submission.
#[derive(Serialize, Debug, Deserialize)]
pub struct ScoreSubmission {
    pub score: u32,
}
