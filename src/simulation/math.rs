//! Shared numeric conventions for the calculators
//!
//! Every calculator rounds through these helpers so the whole engine agrees
//! on what a dollar figure and a percentage look like. Ties round away from
//! zero, so -187.5 cents becomes -188.

/// Round to whole dollars
pub(crate) fn round_currency(x: f64) -> f64 {
    x.round()
}

/// Round to two decimal places
pub(crate) fn round_two(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Annual change as a percentage of income, two decimals
///
/// Households with zero or negative reported income get 0.0 rather than a
/// division blowup.
pub(crate) fn percentage_of_income(annual_change: f64, income: f64) -> f64 {
    if income > 0.0 {
        round_two((annual_change / income) * 100.0)
    } else {
        0.0
    }
}

/// Five years of an annual change, rounded to whole dollars
pub(crate) fn five_year_projection(annual_change: f64) -> f64 {
    round_currency(annual_change * 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_ties_away_from_zero() {
        assert_eq!(round_currency(173.2), 173.0);
        assert_eq!(round_currency(48.5), 49.0);
        assert_eq!(round_currency(-48.5), -49.0);
        assert_eq!(round_currency(-125.0), -125.0);
    }

    #[test]
    fn test_round_two_ties_away_from_zero() {
        assert_eq!(round_two(-1.875), -1.88);
        assert_eq!(round_two(6.928), 6.93);
        assert_eq!(round_two(0.344), 0.34);
    }

    #[test]
    fn test_percentage_of_income_guards_zero_income() {
        assert_eq!(percentage_of_income(-1500.0, 80_000.0), -1.88);
        assert_eq!(percentage_of_income(-1500.0, 0.0), 0.0);
        assert_eq!(percentage_of_income(-1500.0, -10.0), 0.0);
    }

    #[test]
    fn test_five_year_projection_rounds_after_scaling() {
        assert_eq!(five_year_projection(2078.4), 10392.0);
        assert_eq!(five_year_projection(-1500.0), -7500.0);
    }
}
