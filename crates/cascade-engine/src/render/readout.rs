/// Formats `value` with at least two digits.
///
/// Values below 10 get a leading zero. Values of 100 or more keep their
/// natural digit count; callers wanting a fixed width for large limits apply
/// their own policy.
#[inline]
pub fn zero_pad(value: u32) -> String {
    format!("{value:02}")
}

/// Interleaves `parts` with `separators`, left to right.
///
/// `separators[i]` sits between `parts[i]` and `parts[i + 1]`. The caller
/// guarantees `separators.len() + 1 == parts.len()`; surplus entries on either
/// side are dropped.
pub fn join_readout<P, S>(parts: &[P], separators: &[S]) -> String
where
    P: AsRef<str>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            match separators.get(i - 1) {
                Some(sep) => out.push_str(sep.as_ref()),
                None => break,
            }
        }
        out.push_str(part.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── zero_pad ──────────────────────────────────────────────────────────

    #[test]
    fn zero_pad_single_digit() {
        assert_eq!(zero_pad(0), "00");
        assert_eq!(zero_pad(7), "07");
    }

    #[test]
    fn zero_pad_two_digits_unchanged() {
        assert_eq!(zero_pad(10), "10");
        assert_eq!(zero_pad(59), "59");
    }

    #[test]
    fn zero_pad_wide_values_keep_natural_width() {
        assert_eq!(zero_pad(100), "100");
        assert_eq!(zero_pad(999), "999");
    }

    // ── join_readout ──────────────────────────────────────────────────────

    #[test]
    fn join_single_part_has_no_separator() {
        assert_eq!(join_readout(&["05"], &[] as &[&str]), "05");
    }

    #[test]
    fn join_uses_distinct_separators_in_order() {
        assert_eq!(join_readout(&["12", "34", "56"], &[":", "."]), "12:34.56");
    }

    #[test]
    fn join_empty_separator() {
        assert_eq!(join_readout(&["1", "2"], &[""]), "12");
    }
}
