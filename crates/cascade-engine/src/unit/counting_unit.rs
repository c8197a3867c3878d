use std::fmt;

use crate::error::InvalidConfiguration;
use crate::render::zero_pad;

/// Limit used by [`CountingUnit::default`].
const DEFAULT_LIMIT: u32 = 60;

/// A counter that wraps to zero when it reaches its limit.
///
/// Invariant: `0 <= value < limit` at all times, and `limit > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingUnit {
    limit: u32,
    value: u32,
    label: String,
}

impl CountingUnit {
    /// Creates a unit starting at 0.
    ///
    /// Fails with [`InvalidConfiguration::ZeroLimit`] when `limit` is 0.
    pub fn new(limit: u32, label: impl Into<String>) -> Result<Self, InvalidConfiguration> {
        if limit == 0 {
            return Err(InvalidConfiguration::ZeroLimit { unit: 0 });
        }
        Ok(Self {
            limit,
            value: 0,
            label: label.into(),
        })
    }

    /// Infallible constructor for built-in presets with known-good limits.
    pub(crate) fn preset(limit: u32, label: &str) -> Self {
        debug_assert!(limit > 0);
        Self {
            limit,
            value: 0,
            label: label.to_string(),
        }
    }

    /// Creates an unlabeled unit.
    pub fn with_limit(limit: u32) -> Result<Self, InvalidConfiguration> {
        Self::new(limit, "")
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Increments the value modulo `limit`.
    ///
    /// Returns `true` when the increment wrapped the value back to 0. This is
    /// the carry signal consumed by a cascade.
    pub fn advance(&mut self) -> bool {
        // `value < limit <= u32::MAX`, so the increment cannot overflow.
        self.value = (self.value + 1) % self.limit;
        self.value == 0
    }

    /// Current value, at least two digits wide.
    pub fn display_value(&self) -> String {
        zero_pad(self.value)
    }

    /// [`display_value`](Self::display_value) followed by the label.
    pub fn labeled_value(&self) -> String {
        let mut out = self.display_value();
        out.push_str(&self.label);
        out
    }
}

impl Default for CountingUnit {
    fn default() -> Self {
        Self::preset(DEFAULT_LIMIT, "")
    }
}

impl fmt::Display for CountingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_starts_at_zero() {
        let unit = CountingUnit::new(24, "h").unwrap();
        assert_eq!(unit.value(), 0);
        assert_eq!(unit.limit(), 24);
        assert_eq!(unit.label(), "h");
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert_eq!(
            CountingUnit::new(0, "s"),
            Err(InvalidConfiguration::ZeroLimit { unit: 0 })
        );
        assert!(CountingUnit::with_limit(0).is_err());
    }

    #[test]
    fn with_limit_has_empty_label() {
        assert_eq!(CountingUnit::with_limit(10).unwrap().label(), "");
    }

    #[test]
    fn default_counts_to_sixty() {
        let unit = CountingUnit::default();
        assert_eq!(unit.limit(), 60);
        assert_eq!(unit.value(), 0);
        assert_eq!(unit.label(), "");
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn advance_reports_wrap_only_at_limit() {
        let mut unit = CountingUnit::with_limit(3).unwrap();
        assert!(!unit.advance());
        assert!(!unit.advance());
        assert!(unit.advance());
        assert_eq!(unit.value(), 0);
    }

    #[test]
    fn limit_one_wraps_every_time() {
        let mut unit = CountingUnit::with_limit(1).unwrap();
        for _ in 0..5 {
            assert!(unit.advance());
            assert_eq!(unit.value(), 0);
        }
    }

    #[test]
    fn max_limit_does_not_overflow() {
        let mut unit = CountingUnit::with_limit(u32::MAX).unwrap();
        unit.value = u32::MAX - 1;
        assert!(unit.advance());
        assert_eq!(unit.value(), 0);
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_value_pads_single_digits() {
        let mut unit = CountingUnit::new(60, "s").unwrap();
        assert_eq!(unit.display_value(), "00");
        for _ in 0..7 {
            unit.advance();
        }
        assert_eq!(unit.display_value(), "07");
        assert_eq!(unit.to_string(), "07");
        assert_eq!(unit.labeled_value(), "07s");
    }

    #[test]
    fn display_value_large_limit_uses_natural_width() {
        let mut unit = CountingUnit::with_limit(1000).unwrap();
        for _ in 0..123 {
            unit.advance();
        }
        assert_eq!(unit.display_value(), "123");
    }

    // ── properties ────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn full_cycle_returns_to_zero(limit in 1u32..500) {
            let mut unit = CountingUnit::with_limit(limit).unwrap();
            for i in 1..=limit {
                let wrapped = unit.advance();
                prop_assert_eq!(wrapped, i == limit);
                prop_assert!(unit.value() < limit);
            }
            prop_assert_eq!(unit.value(), 0);
        }

        #[test]
        fn display_value_parses_back(limit in 1u32..100, steps in 0u32..100) {
            let mut unit = CountingUnit::with_limit(limit).unwrap();
            for _ in 0..steps {
                unit.advance();
            }
            let shown = unit.display_value();
            prop_assert!(shown.len() >= 2);
            prop_assert!(shown.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(shown.parse::<u32>().unwrap(), unit.value());
        }
    }
}
