use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{
    Decimal,
    RoundingStrategy
};

/// Formats a parameter value for its label: at most two fractional digits,
/// half-even rounding, trailing zeros dropped (`-0.5`, `1.25`, `2`).
pub fn format_parameter(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            .normalize()
            .to_string(),
        None if value.is_nan() => "NaN".to_owned(),
        None if value > 0.0 => "∞".to_owned(),
        None => "-∞".to_owned()
    }
}
