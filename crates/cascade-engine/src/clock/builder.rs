use crate::error::InvalidConfiguration;
use crate::unit::CountingUnit;

use super::CascadeClock;

/// Fluent construction for [`CascadeClock`].
///
/// Units are added least-significant first; separators are added in rendering
/// order (left to right). Nothing is validated until [`build`](Self::build).
///
/// ```rust
/// use cascade_engine::clock::CascadeClock;
///
/// let clock = CascadeClock::builder()
///     .unit(60, "s")
///     .unit(60, "m")
///     .unit(24, "h")
///     .separators([":", "."])
///     .build()
///     .unwrap();
/// assert_eq!(clock.render(), "00:00.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockBuilder {
    units:      Vec<(u32, String)>,
    separators: Vec<String>,
}

impl ClockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a unit more significant than every unit added so far.
    pub fn unit(mut self, limit: u32, label: impl Into<String>) -> Self {
        self.units.push((limit, label.into()));
        self
    }

    /// Append one separator after those added so far.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.separators.push(sep.into());
        self
    }

    /// Replace all separators.
    pub fn separators<S: Into<String>>(mut self, seps: impl IntoIterator<Item = S>) -> Self {
        self.separators = seps.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and construct the clock.
    pub fn build(self) -> Result<CascadeClock, InvalidConfiguration> {
        let units = self
            .units
            .into_iter()
            .enumerate()
            .map(|(i, (limit, label))| {
                CountingUnit::new(limit, label)
                    .map_err(|_| InvalidConfiguration::ZeroLimit { unit: i })
            })
            .collect::<Result<Vec<_>, _>>()?;
        CascadeClock::from_parts(units, self.separators)
    }
}
