use std::sync::OnceLock;

use regex::Regex;

/// Matches a digit run immediately followed by a serving suffix. Recipe
/// authors write both 人分 and 人前; the first occurrence wins.
fn servings_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)(?:人分|人前)").expect("valid regex"))
}

/// Extract the nominal serving count from a free-text descriptor like
/// "4人分". Returns 0 when the descriptor carries no usable count ("適量",
/// empty, a number without a suffix), which callers treat as unknown.
pub fn nominal_servings(descriptor: &str) -> u32 {
    servings_pattern()
        .captures(descriptor)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(0)
}

/// Scaling ratio for a recipe cooked at `requested` servings. When the
/// nominal count is unknown the ratio falls back to 1.0 so quantities pass
/// through unscaled.
pub fn serving_ratio(requested: u32, nominal: u32) -> f64 {
    if nominal > 0 {
        f64::from(requested) / f64::from(nominal)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_servings_with_bunn_suffix() {
        assert_eq!(nominal_servings("4人分"), 4);
        assert_eq!(nominal_servings("たっぷり12人分"), 12);
    }

    #[test]
    fn test_nominal_servings_with_mae_suffix() {
        assert_eq!(nominal_servings("2人前"), 2);
    }

    #[test]
    fn test_nominal_servings_first_match_wins() {
        assert_eq!(nominal_servings("4人分〜6人分"), 4);
        assert_eq!(nominal_servings("2人前または4人分"), 2);
    }

    #[test]
    fn test_nominal_servings_requires_adjacent_suffix() {
        // A digit run not immediately followed by a suffix does not count
        assert_eq!(nominal_servings("4 人分"), 0);
        assert_eq!(nominal_servings("30分"), 0);
    }

    #[test]
    fn test_nominal_servings_unknown_descriptor() {
        assert_eq!(nominal_servings("適量"), 0);
        assert_eq!(nominal_servings(""), 0);
    }

    #[test]
    fn test_serving_ratio() {
        assert_eq!(serving_ratio(4, 2), 2.0);
        assert_eq!(serving_ratio(3, 2), 1.5);
        assert_eq!(serving_ratio(2, 4), 0.5);
    }

    #[test]
    fn test_serving_ratio_unknown_nominal_defaults_to_one() {
        assert_eq!(serving_ratio(8, 0), 1.0);
    }
}
