// src/lib.rs
// Gemini Poker Coach - hand-analysis prompting over the hosted Generative
// Language API with a local pot-odds tool the model can call

pub mod config;
pub mod error;
pub mod gemini;
pub mod hand;
pub mod model_select;
pub mod pot_odds;
pub mod prompt;
pub mod screenshot;
pub mod tools;
pub mod validator;

pub use config::CoachConfig;
pub use error::{CoachError, Result};
pub use gemini::{CoachReply, GeminiClient, ToolInvocation};
pub use hand::{HandInput, Position};
pub use model_select::{select_model, FALLBACK_MODEL};
pub use pot_odds::{compute as calculate_pot_odds, PotOddsResult};
pub use validator::{validate_hand_input, ValidationIssues};
