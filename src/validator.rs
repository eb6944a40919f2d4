// src/validator.rs
// Syntax and consistency checks on user-entered hand parameters

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hand::HandInput;

static CARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[2-9TJQKA][cdhs]$").unwrap());

#[derive(Debug)]
pub struct ValidationIssues {
    pub issues: Vec<String>,
    pub is_valid: bool,
}

pub fn validate_hand_input(input: &HandInput) -> ValidationIssues {
    let mut issues = Vec::new();

    let tokens = input.card_tokens();

    for token in &tokens {
        if !CARD_RE.is_match(token) {
            issues.push(format!(
                "invalid_card_token: '{}' (expected rank 2-9/T/J/Q/K/A and suit c/d/h/s)",
                token
            ));
        }
    }

    // Same physical card must not appear twice across hand and board
    let mut seen = HashSet::new();
    for token in &tokens {
        if CARD_RE.is_match(token) && !seen.insert(token.clone()) {
            issues.push(format!("duplicate_card_detected: {}", token));
        }
    }

    // Hole cards are 0 or 2 in Hold'em
    let hole_only = HandInput {
        flop: String::new(),
        turn: String::new(),
        river: String::new(),
        ..input.clone()
    };
    let hand_count = hole_only.card_tokens().len();
    if hand_count != 0 && hand_count != 2 {
        issues.push(format!("invalid_hero_card_count: {}", hand_count));
    }

    // A flop is 3 cards when present
    let flop_count = input.flop.split_whitespace().count();
    if flop_count != 0 && flop_count != 3 {
        issues.push(format!("invalid_flop_card_count: {}", flop_count));
    }

    if input.current_pot < 0.0 {
        issues.push(format!("negative_pot: {}", input.current_pot));
    }
    if input.to_call < 0.0 {
        issues.push(format!("negative_call_amount: {}", input.to_call));
    }

    ValidationIssues {
        is_valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Position;

    fn input_with(hand: &str, flop: &str) -> HandInput {
        HandInput {
            hero_position: Position::Co,
            villain_position: Position::Btn,
            hero_hand: hand.to_string(),
            flop: flop.to_string(),
            turn: String::new(),
            river: String::new(),
            effective_stack: "100 BB".to_string(),
            current_pot: 10.0,
            to_call: 5.0,
            action_history: String::new(),
        }
    }

    #[test]
    fn test_clean_input_passes() {
        let result = validate_hand_input(&input_with("AhKd", "2h 7s Qd"));
        assert!(result.is_valid, "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_empty_cards_are_allowed() {
        // Preflop spot with no hand entered is fine, the model copes
        let result = validate_hand_input(&input_with("", ""));
        assert!(result.is_valid);
    }

    #[test]
    fn test_bad_card_token_is_flagged() {
        let result = validate_hand_input(&input_with("AxKd", ""));
        assert!(!result.is_valid);
        assert!(result.issues[0].starts_with("invalid_card_token"));
    }

    #[test]
    fn test_duplicate_card_across_hand_and_board() {
        let result = validate_hand_input(&input_with("AhKd", "Ah 7s Qd"));
        assert!(result.issues.iter().any(|i| i == "duplicate_card_detected: Ah"));
    }

    #[test]
    fn test_single_hole_card_is_flagged() {
        let result = validate_hand_input(&input_with("Ah", ""));
        assert!(result.issues.iter().any(|i| i.starts_with("invalid_hero_card_count")));
    }

    #[test]
    fn test_two_card_flop_is_flagged() {
        let result = validate_hand_input(&input_with("AhKd", "2h 7s"));
        assert!(result.issues.iter().any(|i| i.starts_with("invalid_flop_card_count")));
    }

    #[test]
    fn test_negative_amounts_are_flagged() {
        let mut input = input_with("AhKd", "");
        input.to_call = -1.0;
        let result = validate_hand_input(&input);
        assert!(result.issues.iter().any(|i| i.starts_with("negative_call_amount")));
    }
}
