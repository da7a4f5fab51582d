/// Acceptance threshold. A candidate passes only if it is strictly greater.
pub const THRESHOLD: f64 = 10.0;

/// A numeric candidate parsed from a single input attempt. Lives for one
/// loop iteration only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingValue(f64);

impl PendingValue {
    /// Parses one whitespace-delimited token as a decimal number.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse::<f64>().ok().map(PendingValue)
    }

    pub fn judge(self) -> Verdict {
        if self.0 > THRESHOLD {
            Verdict::Accepted(self.0)
        } else {
            Verdict::Rejected(self.0)
        }
    }
}

/// Outcome of testing a candidate against the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Accepted(f64),
    Rejected(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(PendingValue::parse("10").unwrap().judge(), Verdict::Rejected(10.0));
        assert_eq!(PendingValue::parse("10.0").unwrap().judge(), Verdict::Rejected(10.0));
        assert_eq!(
            PendingValue::parse("10.01").unwrap().judge(),
            Verdict::Accepted(10.01)
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        assert_eq!(PendingValue::parse("-3.5").unwrap().judge(), Verdict::Rejected(-3.5));
    }

    #[test]
    fn test_nan_is_rejected() {
        // NaN compares false against the threshold, so it falls through
        // to the rejection branch.
        let verdict = PendingValue::parse("NaN").unwrap().judge();
        assert!(matches!(verdict, Verdict::Rejected(v) if v.is_nan()));
    }

    #[test]
    fn test_parse_accepts_decimal_forms() {
        assert!(PendingValue::parse("15").is_some());
        assert!(PendingValue::parse("10.5").is_some());
        assert!(PendingValue::parse("-0.25").is_some());
        assert!(PendingValue::parse("1e3").is_some());
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(PendingValue::parse("abc").is_none());
        assert!(PendingValue::parse("12abc").is_none());
        assert!(PendingValue::parse("").is_none());
        assert!(PendingValue::parse("1,5").is_none());
    }
}
