use thiserror::Error;

/// MIST per SUI, the chain's display-unit scale factor.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

pub const MS_PER_DAY: u64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("`{0}` is not a valid SUI amount")]
    InvalidAmount(String),
    #[error("`{0}` is not a valid number of days")]
    InvalidDuration(String),
}

/// Convert a decimal SUI amount, as entered by a user, into MIST.
///
/// Rejects anything that does not parse to a finite non-negative number, and
/// amounts too large to represent as a `u64` of MIST.
pub fn sui_to_mist(amount: &str) -> Result<u64, ConversionError> {
    let err = || ConversionError::InvalidAmount(amount.to_string());
    let sui: f64 = amount.trim().parse().map_err(|_| err())?;
    if !sui.is_finite() || sui < 0.0 {
        return Err(err());
    }
    let mist = (sui * MIST_PER_SUI as f64).round();
    if mist > u64::MAX as f64 {
        return Err(err());
    }
    Ok(mist as u64)
}

/// Render a MIST amount as a SUI string with two decimal places.
pub fn mist_to_sui(mist: u64) -> String {
    format!("{:.2}", mist as f64 / MIST_PER_SUI as f64)
}

/// Convert a whole-day count, as entered by a user, into milliseconds.
/// Zero, negative, fractional, and non-numeric inputs are all rejected.
pub fn days_to_ms(days: &str) -> Result<u64, ConversionError> {
    let err = || ConversionError::InvalidDuration(days.to_string());
    let days: u64 = days.trim().parse().map_err(|_| err())?;
    if days == 0 {
        return Err(err());
    }
    days.checked_mul(MS_PER_DAY).ok_or_else(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn whole_sui_amounts_scale_by_mist() {
        assert_eq!(sui_to_mist("100").unwrap(), 100_000_000_000);
        assert_eq!(sui_to_mist("0").unwrap(), 0);
    }

    #[test]
    fn fractional_sui_amounts_convert() {
        assert_eq!(sui_to_mist("1.5").unwrap(), 1_500_000_000);
        assert_eq!(sui_to_mist("0.25").unwrap(), 250_000_000);
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        for bad in ["abc", "", "-1", "-0.5", "inf", "NaN", "1e400"] {
            assert!(
                matches!(sui_to_mist(bad), Err(ConversionError::InvalidAmount(_))),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn mist_renders_with_two_decimals() {
        assert_eq!(mist_to_sui(1_500_000_000), "1.50");
        assert_eq!(mist_to_sui(0), "0.00");
        assert_eq!(mist_to_sui(100_000_000_000), "100.00");
    }

    #[test]
    fn day_counts_scale_by_ms_per_day() {
        assert_eq!(days_to_ms("7").unwrap(), 604_800_000);
        assert_eq!(days_to_ms("1").unwrap(), 86_400_000);
    }

    #[test]
    fn malformed_day_counts_are_rejected() {
        for bad in ["0", "-3", "2.5", "abc", ""] {
            assert!(
                matches!(days_to_ms(bad), Err(ConversionError::InvalidDuration(_))),
                "expected `{bad}` to be rejected"
            );
        }
    }

    proptest! {
        // fromSmallestUnit rounds to two decimals, i.e. multiples of 10^7
        // MIST; the round trip must land within one MIST of that rounding.
        #[test]
        fn mist_round_trips_through_display(n in 0u64..1_000_000_000_000_000) {
            let display = mist_to_sui(n);
            let back = sui_to_mist(&display).unwrap();
            let rounded = ((n as f64 / 1e7).round() * 1e7) as u64;
            prop_assert!(
                back.abs_diff(rounded) <= 1,
                "{n} -> {display} -> {back}, expected about {rounded}"
            );
        }

        #[test]
        fn positive_day_counts_always_convert(d in 1u64..100_000) {
            prop_assert_eq!(days_to_ms(&d.to_string()).unwrap(), d * MS_PER_DAY);
        }
    }
}
