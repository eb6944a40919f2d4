// src/tools.rs
// Function declarations offered to the model and local dispatch of its calls

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{CoachError, Result};
use crate::pot_odds;

pub const POT_ODDS_TOOL_NAME: &str = "calculate_pot_odds";

#[derive(Serialize, Debug, Clone)]
pub struct Tool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Serialize, Debug, Clone)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The tool set declared on every analysis request.
pub fn declarations() -> Vec<Tool> {
    vec![Tool {
        function_declarations: vec![FunctionDeclaration {
            name: POT_ODDS_TOOL_NAME.to_string(),
            description: "Compute pot odds and the required equity for a contemplated call."
                .to_string(),
            parameters: json!({
                "type": "OBJECT",
                "properties": {
                    "bet_to_call": {
                        "type": "NUMBER",
                        "description": "Amount the hero must put in to call."
                    },
                    "pot_size_before_call": {
                        "type": "NUMBER",
                        "description": "Total pot before the call, including the villain's bet."
                    }
                },
                "required": ["bet_to_call", "pot_size_before_call"]
            }),
        }],
    }]
}

#[derive(Deserialize)]
struct PotOddsArgs {
    #[serde(default)]
    bet_to_call: f64,
    #[serde(default)]
    pot_size_before_call: f64,
}

/// Run a tool call the model requested and produce the response payload that
/// goes back to it. A zero-pot input is reported to the model as an error
/// payload rather than failing the whole request.
pub fn dispatch(name: &str, args: &Value) -> Result<Value> {
    match name {
        POT_ODDS_TOOL_NAME => {
            let args: PotOddsArgs = serde_json::from_value(args.clone())?;
            match pot_odds::compute(args.bet_to_call, args.pot_size_before_call) {
                Ok(result) => Ok(serde_json::to_value(result)?),
                Err(CoachError::ZeroPot) => Ok(json!({ "error": "Pot is zero" })),
                Err(e) => Err(e),
            }
        }
        other => Err(CoachError::UnknownTool(other.to_string())),
    }
}
