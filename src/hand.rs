// src/hand.rs
// Hand parameters collected from the user, mirroring the input form fields

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoachError;

/// Table position of a player at a 6-max table.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Utg,
    Mp,
    Co,
    Btn,
    Sb,
    Bb,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Mp => "MP",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "MP" => Ok(Position::Mp),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            other => Err(CoachError::InvalidInput {
                message: format!("unknown position '{}', expected UTG/MP/CO/BTN/SB/BB", other),
            }),
        }
    }
}

/// Everything the analysis prompt is built from.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HandInput {
    pub hero_position: Position,
    pub villain_position: Position,
    /// Hero hole cards, e.g. "AhKd". Empty string when not provided.
    pub hero_hand: String,
    /// Flop cards, e.g. "2h 7s Qd". Empty when the spot is preflop.
    pub flop: String,
    pub turn: String,
    pub river: String,
    /// Effective stack as free text, e.g. "100 BB".
    pub effective_stack: String,
    /// Pot on the table including the villain's bet.
    pub current_pot: f64,
    /// Amount the hero must call; 0 means a check/bet spot.
    pub to_call: f64,
    /// Action history and free-form notes.
    pub action_history: String,
}

impl HandInput {
    /// Board summary line: flop always shown, turn and river appended only
    /// when present.
    pub fn board_summary(&self) -> String {
        let mut board = format!("Flop: {}", self.flop);
        if !self.turn.is_empty() {
            board.push_str(&format!(", Turn: {}", self.turn));
        }
        if !self.river.is_empty() {
            board.push_str(&format!(", River: {}", self.river));
        }
        board
    }

    /// All card tokens across hand and board, split on whitespace. Hole
    /// cards may also be written glued together ("AhKd").
    pub fn card_tokens(&self) -> Vec<String> {
        let mut tokens = split_card_tokens(&self.hero_hand);
        for field in [&self.flop, &self.turn, &self.river] {
            tokens.extend(split_card_tokens(field));
        }
        tokens
    }
}

/// Split a field into two-character card tokens. Accepts whitespace-separated
/// tokens ("Ah Kd") as well as glued pairs ("AhKd").
fn split_card_tokens(field: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in field.split_whitespace() {
        if chunk.len() > 2 && chunk.len() % 2 == 0 {
            let chars: Vec<char> = chunk.chars().collect();
            for pair in chars.chunks(2) {
                tokens.push(pair.iter().collect());
            }
        } else {
            tokens.push(chunk.to_string());
        }
    }
    tokens
}
