/// Rounds to 3 decimals, the resolution of every length in the library.
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Rounds to 1 decimal, used for count-like averages.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn to_milli(length: f64) -> i64 {
    (length * 1000.0).round() as i64
}

fn from_milli(milli: i64) -> f64 {
    milli as f64 / 1000.0
}

/// Number of whole `piece` lengths that fit in `stock`.
/// Computed on integer thousandths, so `fit_count(0.3, 0.1) == 3`.
pub fn fit_count(stock: f64, piece: f64) -> u64 {
    let piece = to_milli(piece);
    match piece > 0 {
        true => (to_milli(stock).max(0) / piece) as u64,
        false => 0,
    }
}

/// Length left over after cutting `n` pieces of length `piece` from `stock`, rounded to 3 decimals.
pub fn remainder(stock: f64, piece: f64, n: u64) -> f64 {
    from_milli(to_milli(stock) - to_milli(piece) * n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    #[test_case(1.23456, 1.235; "rounds up")]
    #[test_case(1.23449, 1.234; "rounds down")]
    #[test_case(12.0, 12.0; "whole number")]
    fn round3_to_three_decimals(input: f64, expected: f64) {
        assert!(approx_eq!(f64, round3(input), expected, ulps = 2));
    }

    #[test]
    fn round1_to_one_decimal() {
        assert!(approx_eq!(f64, round1(2.46), 2.5, ulps = 2));
        assert!(approx_eq!(f64, round1(7.0), 7.0, ulps = 2));
    }

    #[test_case(0.3, 0.1, 3; "decimal fractions divide exactly")]
    #[test_case(25.0, 10.0, 2; "floor division")]
    #[test_case(9.999, 10.0, 0; "just too short")]
    #[test_case(10.0, 10.0, 1; "exact fit")]
    #[test_case(10.0, 0.0, 0; "zero piece")]
    fn fit_count_counts_whole_pieces(stock: f64, piece: f64, expected: u64) {
        assert_eq!(fit_count(stock, piece), expected);
    }

    #[test]
    fn remainder_is_exact_on_thousandths() {
        assert!(approx_eq!(f64, remainder(25.0, 10.0, 2), 5.0, ulps = 2));
        assert!(approx_eq!(f64, remainder(12.345, 1.115, 11), 0.08, ulps = 2));
        assert!(approx_eq!(f64, remainder(10.0, 10.0, 1), 0.0, ulps = 2));
    }
}
