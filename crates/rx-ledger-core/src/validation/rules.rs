//! Field-level rules.
//!
//! Lengths are counted in characters, not bytes. All ranges are inclusive.

use std::ops::RangeInclusive;

pub const NAME_LENGTH: RangeInclusive<usize> = 4..=15;
pub const MIN_ADDRESS_LENGTH: usize = 20;
pub const SPHERE_RANGE: RangeInclusive<f32> = -20.0..=20.0;
pub const CYLINDER_RANGE: RangeInclusive<f32> = -4.0..=4.0;
pub const AXIS_RANGE: RangeInclusive<f32> = 0.0..=180.0;
pub const OPTOMETRIST_LENGTH: RangeInclusive<usize> = 8..=25;

pub const MAX_REMARKS: usize = 2;
pub const REMARK_WORD_COUNT: RangeInclusive<usize> = 6..=20;

/// Character count of `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn name_ok(name: &str) -> bool {
    NAME_LENGTH.contains(&char_len(name))
}

pub fn address_ok(address: &str) -> bool {
    char_len(address) >= MIN_ADDRESS_LENGTH
}

/// NaN is outside every range.
pub fn measurements_ok(sphere: f32, cylinder: f32, axis: f32) -> bool {
    SPHERE_RANGE.contains(&sphere)
        && CYLINDER_RANGE.contains(&cylinder)
        && AXIS_RANGE.contains(&axis)
}

pub fn optometrist_ok(optometrist: &str) -> bool {
    OPTOMETRIST_LENGTH.contains(&char_len(optometrist))
}

/// Number of tokens produced by splitting on single spaces.
///
/// Runs of spaces produce empty tokens, and those count. Trailing empty
/// tokens are dropped, so `"a b  "` counts as two.
pub fn word_count(text: &str) -> usize {
    text.split(' ')
        .rev()
        .skip_while(|token| token.is_empty())
        .count()
}

/// First character is an uppercase letter. Empty text fails.
pub fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds_inclusive() {
        assert!(!name_ok("Abc"));
        assert!(name_ok("John"));
        assert!(name_ok("Abcdefghijklmno"));
        assert!(!name_ok("Abcdefghijklmnop"));
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert!(name_ok("Zoë∂"));
    }

    #[test]
    fn test_address_minimum() {
        assert!(!address_ok("Short Rd."));
        assert!(!address_ok("1234567890123456789"));
        assert!(address_ok("12345678901234567890"));
    }

    #[test]
    fn test_measurement_edges() {
        assert!(measurements_ok(-20.0, -4.0, 0.0));
        assert!(measurements_ok(20.0, 4.0, 180.0));
        assert!(!measurements_ok(-20.01, 0.0, 90.0));
        assert!(!measurements_ok(0.0, 4.01, 90.0));
        assert!(!measurements_ok(0.0, 0.0, -1.0));
        assert!(!measurements_ok(0.0, 0.0, 180.5));
    }

    #[test]
    fn test_measurement_nan_rejected() {
        assert!(!measurements_ok(f32::NAN, 0.0, 90.0));
        assert!(!measurements_ok(0.0, f32::NAN, 90.0));
        assert!(!measurements_ok(0.0, 0.0, f32::NAN));
    }

    #[test]
    fn test_optometrist_bounds() {
        assert!(!optometrist_ok("Dr. O"));
        assert!(optometrist_ok("Dr. Sigh"));
        assert!(optometrist_ok("Dr. Adams"));
        assert!(optometrist_ok(&"x".repeat(25)));
        assert!(!optometrist_ok(&"x".repeat(26)));
    }

    #[test]
    fn test_word_count_naive_split() {
        assert_eq!(word_count("This prescription is accurate and detailed."), 6);
        assert_eq!(word_count("one  two"), 3);
        assert_eq!(word_count(" leading"), 2);
        assert_eq!(word_count("trailing  "), 1);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_starts_uppercase() {
        assert!(starts_uppercase("This"));
        assert!(starts_uppercase("Élan"));
        assert!(!starts_uppercase("this"));
        assert!(!starts_uppercase("1 This"));
        assert!(!starts_uppercase(" This"));
        assert!(!starts_uppercase(""));
    }
}
