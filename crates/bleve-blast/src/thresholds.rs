//! Overpressure threshold list parsing.

use crate::error::{BlastError, BlastResult};

/// Parse a comma-separated list of overpressure thresholds [mbar].
///
/// Tokens are trimmed; tokens that are not numbers, or are not strictly
/// positive and finite, are dropped. Order of the remaining values is kept.
pub fn parse_thresholds(text: &str) -> BlastResult<Vec<f64>> {
    let thresholds: Vec<f64> = text
        .split(',')
        .filter_map(|tok| tok.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();

    if thresholds.is_empty() {
        return Err(BlastError::NoThresholds);
    }
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_trims() {
        assert_eq!(
            parse_thresholds(" 200, 50 ,140").unwrap(),
            vec![200.0, 50.0, 140.0]
        );
    }

    #[test]
    fn drops_unusable_tokens() {
        assert_eq!(
            parse_thresholds("foo, 50, -1, 0, , 1e2, NaN").unwrap(),
            vec![50.0, 100.0]
        );
    }

    #[test]
    fn nothing_usable_is_an_error() {
        assert_eq!(parse_thresholds("foo, -1, 0"), Err(BlastError::NoThresholds));
        assert_eq!(parse_thresholds(""), Err(BlastError::NoThresholds));
        assert_eq!(parse_thresholds(" , ,"), Err(BlastError::NoThresholds));
    }
}
