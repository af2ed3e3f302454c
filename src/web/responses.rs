/// API responses
use crate::board::Board;
use crate::game::{ScoreRecord, WordStatus};
use serde::{Deserialize, Serialize};

/// Response for the new-board route: the fresh board plus the running
/// statistics for the caller's session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResp {
    pub board: Vec<String>,
    pub highest_score: u32,
    pub num_tries: u32,
}

impl BoardResp {
    pub fn new(board: &Board, record: &ScoreRecord) -> Self {
        BoardResp {
            board: board.rows().iter().map(|row| row.iter().collect()).collect(),
            highest_score: record.highest_score,
            num_tries: record.num_tries,
        }
    }
}

/// Response for the check-word route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckWordResp {
    pub result: WordStatus,
}

/// Response for the score submission route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResp {
    #[serde(rename = "isNewRecord")]
    pub is_new_record: bool,
}

/// Error body attached to rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResp {
    pub error: String,
}
