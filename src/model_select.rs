// src/model_select.rs
// Deterministic model-selection policy over the remote catalog

/// Returned when the catalog is empty, nothing matches, or the listing
/// fetch itself failed.
pub const FALLBACK_MODEL: &str = "gemini-1.5-flash";

const FAST_TIER: &str = "flash";
const CAPABLE_TIER: &str = "pro";
const LATEST_ALIAS: &str = "latest";
const EXPERIMENTAL: &str = "exp";
const REDUCED_CAPACITY: &str = "8b";

/// Pick the best model identifier from the catalog.
///
/// Rules are tried in order; within a rule the catalog is scanned in the
/// order the listing returned it. The first rule that matches anything wins:
/// 1. fast tier, experimental build
/// 2. fast tier, latest alias
/// 3. fast tier, excluding reduced-capacity and experimental variants
/// 4. capable tier, latest alias
/// 5. capable tier, excluding experimental variants
/// 6. hardcoded fallback
pub fn select_model(catalog: &[String]) -> String {
    let rules: [&dyn Fn(&str) -> bool; 5] = [
        &|m| m.contains(FAST_TIER) && m.contains(EXPERIMENTAL),
        &|m| m.contains(FAST_TIER) && m.contains(LATEST_ALIAS),
        &|m| m.contains(FAST_TIER) && !m.contains(REDUCED_CAPACITY) && !m.contains(EXPERIMENTAL),
        &|m| m.contains(CAPABLE_TIER) && m.contains(LATEST_ALIAS),
        &|m| m.contains(CAPABLE_TIER) && !m.contains(EXPERIMENTAL),
    ];

    for rule in rules {
        if let Some(name) = catalog.iter().find(|m| rule(m.as_str())) {
            return name.clone();
        }
    }
    FALLBACK_MODEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        assert_eq!(select_model(&[]), FALLBACK_MODEL);
    }

    #[test]
    fn test_no_match_falls_back() {
        let models = catalog(&["models/embedding-001", "models/aqa"]);
        assert_eq!(select_model(&models), FALLBACK_MODEL);
    }

    #[test]
    fn test_experimental_flash_wins_over_everything() {
        let models = catalog(&[
            "models/gemini-1.5-pro-latest",
            "models/gemini-1.5-flash-latest",
            "models/gemini-2.0-flash-exp",
        ]);
        assert_eq!(select_model(&models), "models/gemini-2.0-flash-exp");
    }

    #[test]
    fn test_flash_latest_beats_pro_latest() {
        let models = catalog(&["models/gemini-1.5-pro-latest", "models/gemini-1.5-flash-latest"]);
        assert_eq!(select_model(&models), "models/gemini-1.5-flash-latest");
    }

    #[test]
    fn test_reduced_capacity_variant_is_skipped() {
        let models = catalog(&["models/gemini-1.5-flash-8b", "models/gemini-1.5-flash"]);
        assert_eq!(select_model(&models), "models/gemini-1.5-flash");
    }

    #[test]
    fn test_pro_latest_when_no_flash_available() {
        let models = catalog(&["models/gemini-1.0-pro", "models/gemini-1.5-pro-latest"]);
        assert_eq!(select_model(&models), "models/gemini-1.5-pro-latest");
    }

    #[test]
    fn test_plain_pro_as_last_resort() {
        let models = catalog(&["models/gemini-1.0-pro-exp", "models/gemini-1.0-pro"]);
        assert_eq!(select_model(&models), "models/gemini-1.0-pro");
    }

    #[test]
    fn test_catalog_order_breaks_ties_within_a_rule() {
        let models = catalog(&["models/gemini-1.5-flash-latest", "models/gemini-2.0-flash-latest"]);
        assert_eq!(select_model(&models), "models/gemini-1.5-flash-latest");
    }

    #[test]
    fn test_selection_is_idempotent() {
        let models = catalog(&["models/gemini-1.5-flash-8b", "models/gemini-1.5-flash"]);
        let first = select_model(&models);
        let second = select_model(&models);
        assert_eq!(first, second);
    }
}
