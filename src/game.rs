use crate::board::Board;
use crate::dict::Dictionary;

use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of checking a submitted word against the dictionary and
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "not-on-board")]
    NotOnBoard,
    #[serde(rename = "not-word")]
    NotWord,
}

/// Best score seen so far plus the number of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub highest_score: u32,
    pub num_tries: u32,
}

impl ScoreRecord {
    pub fn new() -> Self {
        ScoreRecord::default()
    }

    /// Fold a finished game's score into the record. Only a strict
    /// improvement counts as a new record; a tie does not.
    pub fn submit(&self, score: u32) -> (ScoreRecord, bool) {
        let is_new_record = score > self.highest_score;
        let updated = ScoreRecord {
            highest_score: self.highest_score.max(score),
            num_tries: self.num_tries + 1,
        };
        return (updated, is_new_record);
    }
}

/// Game orchestration: holds the shared dictionary and combines it
/// with the board search to judge submitted words.
#[derive(Debug, Clone)]
pub struct Game {
    dict: Arc<Dictionary>,
}

impl Game {
    pub fn new(dict: Arc<Dictionary>) -> Self {
        Game { dict }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn new_board(&self) -> Board {
        Board::random(&mut thread_rng())
    }

    /// Judge a submitted word: it must be a real word and traceable on
    /// the board. The empty string is simply not a word.
    pub fn classify(&self, board: &Board, word: &str) -> WordStatus {
        let word_exists = self.dict.contains(word);
        let on_board = board.find(&word.to_uppercase());
        if word_exists && on_board {
            return WordStatus::Ok;
        } else if word_exists {
            return WordStatus::NotOnBoard;
        }
        return WordStatus::NotWord;
    }
}
