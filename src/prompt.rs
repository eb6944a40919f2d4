// src/prompt.rs
// Assembles the coaching prompt sent to the model

use crate::hand::HandInput;

/// Build the analysis prompt for one hand. The tool-use instruction refers
/// to `calculate_pot_odds` by name; the declaration travels alongside in the
/// request, so the two must stay in sync with `tools::POT_ODDS_TOOL_NAME`.
pub fn build_analysis_prompt(input: &HandInput) -> String {
    format!(
        r#"You are a world-class GTO poker coach. Analyze the following hand.

[Hand]
- Hero: {hero} / Hand: {hand}
- Villain: {villain}
- Effective Stack: {stack}

[Board]
{board}

[Numbers]
- Current Pot Size: {pot}
- Amount to Call: {to_call}

[Action History / Notes]
{notes}

[Instructions]
1. Situation: analyze the board texture (wet/dry) and how both players' ranges connect with it.
2. Math: if the amount to call is greater than 0, you MUST use the calculate_pot_odds tool to compute the price of the call.
3. Recommendation: give the GTO-preferred action including frequencies, and explain why (value targets, bluff candidates, range considerations)."#,
        hero = input.hero_position,
        hand = input.hero_hand,
        villain = input.villain_position,
        stack = input.effective_stack,
        board = input.board_summary(),
        pot = input.current_pot,
        to_call = input.to_call,
        notes = input.action_history,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Position;

    fn sample_input() -> HandInput {
        HandInput {
            hero_position: Position::Btn,
            villain_position: Position::Bb,
            hero_hand: "AhKd".to_string(),
            flop: "2h 7s Qd".to_string(),
            turn: "As".to_string(),
            river: String::new(),
            effective_stack: "100 BB".to_string(),
            current_pot: 24.5,
            to_call: 16.0,
            action_history: "Preflop: Hero open 2.5bb, Villain 3bet to 9bb, Hero call".to_string(),
        }
    }

    #[test]
    fn test_prompt_carries_all_hand_fields() {
        let prompt = build_analysis_prompt(&sample_input());
        assert!(prompt.contains("Hero: BTN / Hand: AhKd"));
        assert!(prompt.contains("Villain: BB"));
        assert!(prompt.contains("Effective Stack: 100 BB"));
        assert!(prompt.contains("Flop: 2h 7s Qd, Turn: As"));
        assert!(prompt.contains("Current Pot Size: 24.5"));
        assert!(prompt.contains("Amount to Call: 16"));
        assert!(prompt.contains("Villain 3bet to 9bb"));
    }

    #[test]
    fn test_prompt_names_the_tool() {
        let prompt = build_analysis_prompt(&sample_input());
        assert!(prompt.contains(crate::tools::POT_ODDS_TOOL_NAME));
    }
}
