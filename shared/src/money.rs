//! Amount unit handling
//!
//! Booking amounts are stored exactly as the client sent them. Whether that
//! number is in minor units (paise) or major units (rupees) is decided by the
//! configured [`AmountConvention`], and only at the two boundaries that care:
//! the UPI intent (major units, two decimals) and the card gateway (minor
//! units, integer).

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

/// Minor units per major unit (paise per rupee)
const MINOR_PER_MAJOR: i64 = 100;

/// How a stored amount is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountConvention {
    /// Amounts of 100 or more are minor units, smaller amounts are major units.
    ///
    /// Matches what the existing checkout frontend sends.
    #[default]
    Auto,
    /// Every amount is in minor units.
    Minor,
    /// Every amount is in major units.
    Major,
}

impl AmountConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }

    /// Amount in major units.
    pub fn to_major(&self, amount: Decimal) -> Decimal {
        let hundred = Decimal::from(MINOR_PER_MAJOR);
        match self {
            Self::Auto if amount >= hundred => amount / hundred,
            Self::Auto | Self::Major => amount,
            Self::Minor => amount / hundred,
        }
    }

    /// Major-unit amount rendered with exactly two decimals, e.g. `"1.50"`.
    pub fn major_display(&self, amount: Decimal) -> String {
        let mut major = self
            .to_major(amount)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        major.rescale(2);
        major.to_string()
    }

    /// Integer minor-unit amount for the card gateway.
    ///
    /// `Auto` passes the stored value through, since the card checkout always
    /// sends paise. `None` when the value does not fit an `i64`.
    pub fn to_gateway_minor(&self, amount: Decimal) -> Option<i64> {
        let minor = match self {
            Self::Auto | Self::Minor => amount,
            Self::Major => amount.checked_mul(Decimal::from(MINOR_PER_MAJOR))?,
        };
        minor
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
    }
}

impl fmt::Display for AmountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "minor" | "paise" => Ok(Self::Minor),
            "major" | "rupees" => Ok(Self::Major),
            other => Err(format!(
                "unknown amount convention '{other}', expected auto, minor or major"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_auto_boundary() {
        let c = AmountConvention::Auto;
        assert_eq!(c.major_display(dec("150")), "1.50");
        assert_eq!(c.major_display(dec("50")), "50.00");
        assert_eq!(c.major_display(dec("100")), "1.00");
        assert_eq!(c.major_display(dec("99.99")), "99.99");
        assert_eq!(c.major_display(dec("0")), "0.00");
    }

    #[test]
    fn test_fixed_conventions() {
        assert_eq!(AmountConvention::Minor.major_display(dec("50")), "0.50");
        assert_eq!(AmountConvention::Minor.major_display(dec("899900")), "8999.00");
        assert_eq!(AmountConvention::Major.major_display(dec("150")), "150.00");
        assert_eq!(AmountConvention::Major.major_display(dec("12.345")), "12.35");
    }

    #[test]
    fn test_gateway_minor() {
        assert_eq!(AmountConvention::Auto.to_gateway_minor(dec("500")), Some(500));
        assert_eq!(AmountConvention::Minor.to_gateway_minor(dec("500.4")), Some(500));
        assert_eq!(AmountConvention::Major.to_gateway_minor(dec("89.99")), Some(8999));
    }

    #[test]
    fn test_parse() {
        assert_eq!("auto".parse::<AmountConvention>(), Ok(AmountConvention::Auto));
        assert_eq!(" Minor ".parse::<AmountConvention>(), Ok(AmountConvention::Minor));
        assert_eq!("rupees".parse::<AmountConvention>(), Ok(AmountConvention::Major));
        assert!("cents".parse::<AmountConvention>().is_err());
        assert_eq!(AmountConvention::default().to_string(), "auto");
    }
}
