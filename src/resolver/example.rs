//! Example-value synthesis from validation-rule expressions.

use chrono::Local;
use serde_json::Value;

/// Synthesizes a representative example value from a rule expression.
///
/// The expression is a pipe-delimited token list (`"required|email"`).
/// Tokens are scanned in order and the first recognized hint wins; rule
/// order decides ties, and hints are never combined:
///
/// | hint (substring) | example |
/// |---|---|
/// | `numeric` | `123` |
/// | `boolean` | `true` |
/// | `date` | today as `YYYY-MM-DD` |
/// | `email` | `"example@test.com"` |
///
/// An expression with no recognized hint yields `"example_value"`.
pub fn synthesize_example(rule: &str) -> Value {
    for token in rule.split('|') {
        if token.contains("numeric") {
            return Value::from(123);
        }
        if token.contains("boolean") {
            return Value::from(true);
        }
        if token.contains("date") {
            return Value::from(Local::now().format("%Y-%m-%d").to_string());
        }
        if token.contains("email") {
            return Value::from("example@test.com");
        }
    }

    Value::from("example_value")
}
