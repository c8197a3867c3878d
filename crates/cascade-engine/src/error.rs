use std::fmt;

/// Rejected construction parameters for a [`CountingUnit`] or [`CascadeClock`].
///
/// Detected eagerly at construction; once an instance exists no operation on it
/// can fail.
///
/// [`CountingUnit`]: crate::unit::CountingUnit
/// [`CascadeClock`]: crate::clock::CascadeClock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// The unit list was empty.
    NoUnits,
    /// A unit was given a wrap limit of zero. `unit` is its position,
    /// least-significant first.
    ZeroLimit { unit: usize },
    /// The separator list did not have exactly `unit_count - 1` entries.
    SeparatorCount { expected: usize, found: usize },
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUnits => write!(f, "invalid configuration: a cascade needs at least one unit"),
            Self::ZeroLimit { unit } => {
                write!(f, "invalid configuration: unit {unit} has a limit of 0")
            }
            Self::SeparatorCount { expected, found } => write!(
                f,
                "invalid configuration: expected {expected} separator(s), found {found}"
            ),
        }
    }
}

impl std::error::Error for InvalidConfiguration {}
