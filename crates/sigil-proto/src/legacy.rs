//! Repair of `data` suffixes written by a non-conforming producer.
//!
//! Some producers in the field emit base64 `data` values with a stray `0`
//! after the final `=`, or with the text `equest` after it. Parsed envelopes
//! pass through [`repair_data_suffix`] before their signature is checked, so
//! the signature is compared against the repaired text.
//!
//! # Invariants
//!
//! - Rules are tried in order and at most one fires
//! - Rule 1 fires only when the text ends in `=0`; it then trims trailing
//!   `'0'` characters, which stops at that `=`. Text ending in `=00` or a
//!   longer run of zeros does not match and is left unchanged
//! - Rule 2 (`=equest` suffix) removes exactly `equest`, keeping the `=`
//! - Text matching neither rule is returned unchanged
//!
//! These rules are part of the wire contract. Changing them breaks
//! interoperability with envelopes already in circulation.

/// Suffix that triggers the trailing-zero rule
const ZERO_SUFFIX: &str = "=0";

/// Suffix that triggers the `equest` rule
const EQUEST_SUFFIX: &str = "=equest";

/// Text removed by the `equest` rule
const EQUEST_TAIL: &str = "equest";

/// Which repair rule was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyRepair {
    /// `data` ended with `=0`; the trailing `'0'` was stripped
    ZeroSuffix,
    /// `data` ended with `=equest`; the `equest` tail was removed
    EquestSuffix,
}

/// Apply the repair rules to `data` in place.
///
/// Returns the rule that fired, or `None` if `data` was left untouched.
pub fn repair_data_suffix(data: &mut String) -> Option<LegacyRepair> {
    if data.ends_with(ZERO_SUFFIX) {
        let kept = data.trim_end_matches('0').len();
        data.truncate(kept);
        return Some(LegacyRepair::ZeroSuffix);
    }

    if data.ends_with(EQUEST_SUFFIX) {
        data.truncate(data.len() - EQUEST_TAIL.len());
        return Some(LegacyRepair::EquestSuffix);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repaired(input: &str) -> (String, Option<LegacyRepair>) {
        let mut data = input.to_string();
        let repair = repair_data_suffix(&mut data);
        (data, repair)
    }

    #[test]
    fn single_trailing_zero() {
        assert_eq!(
            repaired("dGVzdA=0"),
            ("dGVzdA=".to_string(), Some(LegacyRepair::ZeroSuffix))
        );
    }

    #[test]
    fn runs_of_zeros_do_not_match() {
        // Only a single '0' directly after '=' triggers the rule
        for input in ["dGVzdA=00", "dGVzdA=000", "x==00"] {
            assert_eq!(repaired(input), (input.to_string(), None), "input {input:?}");
        }
    }

    #[test]
    fn zero_trim_stops_at_equals() {
        // Zeros before the '=' are body text and survive
        assert_eq!(repaired("10=0"), ("10=".to_string(), Some(LegacyRepair::ZeroSuffix)));
        assert_eq!(repaired("=0"), ("=".to_string(), Some(LegacyRepair::ZeroSuffix)));
    }

    #[test]
    fn equest_suffix() {
        assert_eq!(repaired("dGVzdA=equest"), ("dGVzdA=".to_string(), Some(LegacyRepair::EquestSuffix)));
    }

    #[test]
    fn equest_suffix_is_removed_once() {
        assert_eq!(
            repaired("a=equest=equest"),
            ("a=equest=".to_string(), Some(LegacyRepair::EquestSuffix))
        );
    }

    #[test]
    fn zero_rule_takes_priority() {
        // Ends with "=0", so rule 1 fires even though "=equest" appears earlier
        assert_eq!(
            repaired("x=equest=0"),
            ("x=equest=".to_string(), Some(LegacyRepair::ZeroSuffix))
        );
    }

    #[test]
    fn zeros_without_equals_are_kept() {
        assert_eq!(repaired("dGVzdA00"), ("dGVzdA00".to_string(), None));
        assert_eq!(repaired("100"), ("100".to_string(), None));
    }

    #[test]
    fn request_without_equals_is_kept() {
        assert_eq!(repaired("request"), ("request".to_string(), None));
    }

    #[test]
    fn untouched_inputs() {
        for input in ["", "dGVzdA==", "hello", "=", "=1", "0", "equest"] {
            assert_eq!(repaired(input), (input.to_string(), None), "input {input:?}");
        }
    }
}
