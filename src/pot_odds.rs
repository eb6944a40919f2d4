// src/pot_odds.rs
// Pot-odds calculator exposed to the model as the calculate_pot_odds tool

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Result of a single pot-odds computation. Created fresh per call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PotOddsResult {
    /// Minimum win probability needed to break even on the call, in percent,
    /// rounded to 2 decimals. Always within [0, 100].
    pub required_equity_percent: f64,
    /// "<pot : call>" price, e.g. "2.0 : 1", rounded to 1 decimal.
    /// None when no call is owed (call amount zero, check/bet spot).
    pub pot_odds_ratio: Option<String>,
}

/// Compute required equity and pot odds for a contemplated call.
///
/// `bet_to_call` is the amount the hero must put in; `pot_size_before_call`
/// is everything already on the table including the villain's bet. Both are
/// expected non-negative. Fails with `ZeroPot` when both are zero.
pub fn compute(bet_to_call: f64, pot_size_before_call: f64) -> Result<PotOddsResult> {
    let total_pot = pot_size_before_call + bet_to_call;
    if total_pot == 0.0 {
        return Err(CoachError::ZeroPot);
    }

    let required_equity = round2(bet_to_call / total_pot * 100.0);

    let pot_odds_ratio = match odds_ratio(bet_to_call, pot_size_before_call) {
        Ok(ratio) => Some(format!("{:.1} : 1", ratio)),
        // Check/bet spot: nothing to call, the price term is undefined.
        Err(CoachError::NoCallRequired) => None,
        Err(e) => return Err(e),
    };

    Ok(PotOddsResult {
        required_equity_percent: required_equity,
        pot_odds_ratio,
    })
}

/// Raw pot : call ratio. Fails with `NoCallRequired` when `bet_to_call` is
/// zero, since dividing the prior pot by the call amount is undefined.
fn odds_ratio(bet_to_call: f64, pot_size_before_call: f64) -> Result<f64> {
    if bet_to_call == 0.0 {
        return Err(CoachError::NoCallRequired);
    }
    Ok(round1(pot_size_before_call / bet_to_call))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
