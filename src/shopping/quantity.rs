use std::sync::OnceLock;

use regex::Regex;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"))
}

fn integer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("valid regex"))
}

/// Scale the first numeric substring of a free-text amount by `ratio`,
/// leaving the surrounding text (units, qualifiers) untouched.
///
/// A whole result renders without decimals, anything else with exactly one
/// decimal place. Amounts without a numeric substring ("適量") come back
/// unchanged; scaling is always best-effort, never an error.
pub fn scale_amount(amount: &str, ratio: f64) -> String {
    let Some(found) = decimal_pattern().find(amount) else {
        return amount.to_string();
    };
    let Ok(value) = found.as_str().parse::<f64>() else {
        return amount.to_string();
    };

    let scaled = value * ratio;
    let rendered = if scaled.fract() == 0.0 {
        format!("{scaled:.0}")
    } else {
        format!("{scaled:.1}")
    };

    // Replace only the matched substring
    format!(
        "{}{}{}",
        &amount[..found.start()],
        rendered,
        &amount[found.end()..]
    )
}

/// Parse an estimated-budget string such as "500円" or "¥1000-".
///
/// The currency symbol and unit word are stripped and the first remaining
/// digit run is the value; anything unparseable contributes 0.
pub fn parse_budget(text: &str) -> i64 {
    let stripped = text.replace('¥', "").replace('円', "");
    first_integer(&stripped)
}

/// Parse an estimated-calories string such as "1,200kcal".
///
/// The unit word and thousands separators are stripped; anything
/// unparseable contributes 0.
pub fn parse_calories(text: &str) -> i64 {
    let stripped = text.replace("kcal", "").replace(',', "");
    first_integer(&stripped)
}

fn first_integer(text: &str) -> i64 {
    integer_pattern()
        .find(text)
        .and_then(|found| found.as_str().parse().ok())
        .unwrap_or(0)
}
